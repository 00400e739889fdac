use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::leaderboard::seed_leaderboard;
use super::types::{
    ConfidencePolicy, Mood, MoodEntry, MoodLeaderboardRow, MoodSnapshot, LIVE_DETECTION_CONTEXT,
};
use crate::config::AppConfig;
use crate::error::MoodStyleError;

/// Maximum number of history entries kept when no config says otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// In-memory mood store for one application session.
///
/// Mutations take `&self` so the store can sit behind an `Arc` shared by UI
/// handlers and the detection task. Each mutation is applied under one lock
/// and publishes exactly one snapshot.
pub struct MoodStore {
    state: Mutex<MoodSnapshot>,
    history_limit: usize,
    policy: ConfidencePolicy,
    tx: watch::Sender<MoodSnapshot>,
}

impl MoodStore {
    /// Create a store with the given retention limit and confidence policy,
    /// seeded with the embedded leaderboard.
    pub fn new(history_limit: usize, policy: ConfidencePolicy) -> Self {
        Self::with_leaderboard(history_limit, policy, seed_leaderboard())
    }

    pub fn with_leaderboard(
        history_limit: usize,
        policy: ConfidencePolicy,
        leaderboard: Vec<MoodLeaderboardRow>,
    ) -> Self {
        let initial = MoodSnapshot {
            mood_leaderboard: leaderboard,
            ..MoodSnapshot::default()
        };
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            state: Mutex::new(initial),
            history_limit: history_limit.max(1),
            policy,
            tx,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.history_limit, config.confidence_policy)
    }

    /// Replace the current mood. Does not touch history or the detected mood.
    pub fn set_current_mood(&self, mood: impl Into<Mood>) {
        let mood = mood.into();
        let mut state = self.state();
        debug!("Setting current mood: {}", mood);
        state.current_mood = Some(mood);
        self.publish(&mut state);
    }

    /// Record the outcome of a detection pass.
    ///
    /// Sets the detected mood and appends one history entry whose context is
    /// "Live detection". Under [`ConfidencePolicy::Reject`] an out-of-range
    /// confidence leaves the store untouched.
    pub fn set_detected_mood(
        &self,
        mood: impl Into<Mood>,
        confidence: f32,
    ) -> Result<MoodEntry, MoodStyleError> {
        let mood = mood.into();
        let confidence = self.check_confidence(confidence)?;

        let mut state = self.state();
        state.detected_mood = Some(mood.clone());
        let entry = self.push_entry(&mut state, mood, confidence, Some(LIVE_DETECTION_CONTEXT));
        info!(
            "Detected mood {} (confidence {:.2})",
            entry.mood, entry.confidence
        );
        self.publish(&mut state);
        Ok(entry)
    }

    /// Prepend a history entry stamped now, dropping the oldest entries
    /// beyond the retention limit.
    pub fn add_mood_entry(
        &self,
        mood: impl Into<Mood>,
        confidence: f32,
        context: Option<&str>,
    ) -> Result<MoodEntry, MoodStyleError> {
        let mood = mood.into();
        let confidence = self.check_confidence(confidence)?;

        let mut state = self.state();
        let entry = self.push_entry(&mut state, mood, confidence, context);
        self.publish(&mut state);
        Ok(entry)
    }

    /// Current leaderboard snapshot. Pure read.
    pub fn mood_leaderboard(&self) -> Vec<MoodLeaderboardRow> {
        self.state().mood_leaderboard.clone()
    }

    pub fn current_mood(&self) -> Option<Mood> {
        self.state().current_mood.clone()
    }

    pub fn detected_mood(&self) -> Option<Mood> {
        self.state().detected_mood.clone()
    }

    /// History, newest first.
    pub fn mood_history(&self) -> Vec<MoodEntry> {
        self.state().mood_history.clone()
    }

    pub fn latest_entry(&self) -> Option<MoodEntry> {
        self.state().mood_history.first().cloned()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn snapshot(&self) -> MoodSnapshot {
        self.state().clone()
    }

    /// Observe every snapshot published from now on.
    /// The receiver starts out holding the latest snapshot, marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<MoodSnapshot> {
        self.tx.subscribe()
    }

    fn state(&self) -> MutexGuard<'_, MoodSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_confidence(&self, confidence: f32) -> Result<f32, MoodStyleError> {
        let in_range = (0.0..=1.0).contains(&confidence);
        match self.policy {
            ConfidencePolicy::PassThrough => {
                if !in_range {
                    debug!("Passing through out-of-range confidence {}", confidence);
                }
                Ok(confidence)
            }
            ConfidencePolicy::Clamp if confidence.is_nan() => Ok(0.0),
            ConfidencePolicy::Clamp => Ok(confidence.clamp(0.0, 1.0)),
            ConfidencePolicy::Reject if in_range => Ok(confidence),
            ConfidencePolicy::Reject => {
                warn!("Rejecting out-of-range confidence {}", confidence);
                Err(MoodStyleError::InvalidConfidence(confidence))
            }
        }
    }

    fn push_entry(
        &self,
        state: &mut MoodSnapshot,
        mood: Mood,
        confidence: f32,
        context: Option<&str>,
    ) -> MoodEntry {
        // Never stamp an entry older than the current head, so a clock step
        // backwards cannot break newest-first ordering.
        let now = Utc::now();
        let date = state
            .mood_history
            .first()
            .map_or(now, |head| now.max(head.date));

        let entry = MoodEntry {
            date,
            mood,
            confidence,
            context: context.map(str::to_string),
        };

        state.mood_history.insert(0, entry.clone());
        if state.mood_history.len() > self.history_limit {
            let dropped = state.mood_history.len() - self.history_limit;
            state.mood_history.truncate(self.history_limit);
            debug!("Evicted {} history entries past the limit", dropped);
        }
        entry
    }

    fn publish(&self, state: &mut MoodSnapshot) {
        state.revision += 1;
        self.tx.send_replace(state.clone());
    }
}

impl Default for MoodStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT, ConfidencePolicy::default())
    }
}
