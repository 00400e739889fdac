//! Seed data for the mood leaderboard.
//!
//! The leaderboard is an opaque read model: the store hands it out as-is and
//! never recomputes it from history.

use super::types::MoodLeaderboardRow;

const SEED_LEADERBOARD: &str = include_str!("../../data/leaderboard.json");

/// Leaderboard rows embedded in the binary.
///
/// # Panics
/// Panics if the embedded JSON is invalid (a build-time bug).
pub fn seed_leaderboard() -> Vec<MoodLeaderboardRow> {
    serde_json::from_str(SEED_LEADERBOARD).expect("embedded leaderboard.json must be valid JSON")
}

/// Rows ordered by total spend, highest first. Ties keep seed order.
pub fn ranked_by_spend(rows: &[MoodLeaderboardRow]) -> Vec<MoodLeaderboardRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    ranked
}
