//! Mood state store.
//!
//! Single source of truth for the user's current mood, the last detected
//! mood and a bounded newest-first history. Dependent views subscribe to
//! [`MoodStore::subscribe`] and re-read the published [`MoodSnapshot`].

mod leaderboard;
mod store;
mod types;

pub use leaderboard::{ranked_by_spend, seed_leaderboard};
pub use store::{MoodStore, DEFAULT_HISTORY_LIMIT};
pub use types::*;
