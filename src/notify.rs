//! User-visible transient notifications ("toasts").

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Sink for toasts. Implemented by whatever draws them.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, message: String);

    fn success(&self, message: String) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: String) {
        self.notify(ToastKind::Error, message);
    }

    fn info(&self, message: String) {
        self.notify(ToastKind::Info, message);
    }
}

/// In-memory toast log, oldest first, bounded to the most recent `capacity`.
pub struct NotificationCenter {
    toasts: Mutex<Vec<Toast>>,
    capacity: usize,
}

impl NotificationCenter {
    pub const DEFAULT_CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.lock().last().cloned()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.lock().iter().filter(|t| t.kind == kind).count()
    }

    /// Remove and return every pending toast.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, kind: ToastKind, message: String) {
        debug!("Toast ({:?}): {}", kind, message);
        let mut toasts = self.lock();
        toasts.push(Toast {
            kind,
            message,
            created_at: Utc::now(),
        });
        if toasts.len() > self.capacity {
            let excess = toasts.len() - self.capacity;
            toasts.drain(..excess);
        }
    }
}
