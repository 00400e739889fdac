//! Social share: build a short text about the user's mood and put it on the
//! clipboard.

use std::sync::{Mutex, PoisonError};

use tracing::{error, info};

use crate::error::MoodStyleError;
use crate::mood::{Mood, MoodStore};
use crate::notify::Notifier;

/// Clipboard boundary.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Clipboard held in memory. Can be told to fail every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    failure: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            failure: Some(reason.into()),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

pub fn share_text(mood: Option<&Mood>) -> String {
    match mood {
        Some(mood) => format!(
            "I'm feeling {} today! ✨ Check out my mood-matched style on MoodStyle. #MoodStyle #{}",
            mood,
            hashtag(mood)
        ),
        None => "Discover your mood-matched style on MoodStyle ✨ #MoodStyle".to_string(),
    }
}

fn hashtag(mood: &Mood) -> String {
    let mut tag: String = mood
        .label()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    tag.push_str("Vibes");
    tag
}

/// Copy a share message for the current mood (or, failing that, the last
/// detected one) and report the outcome to the user.
pub fn share_mood(
    store: &MoodStore,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> Result<String, MoodStyleError> {
    let mood = store.current_mood().or_else(|| store.detected_mood());
    let text = share_text(mood.as_ref());

    match clipboard.write_text(&text) {
        Ok(()) => {
            info!("Copied share text to clipboard");
            notifier.success("Copied to clipboard!".to_string());
            Ok(text)
        }
        Err(reason) => {
            error!("Failed to copy share text: {}", reason);
            notifier.error("Couldn't copy to clipboard".to_string());
            Err(MoodStyleError::Clipboard(reason))
        }
    }
}
