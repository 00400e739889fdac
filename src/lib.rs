pub mod avatar;
pub mod catalog;
pub mod config;
pub mod detection;
mod error;
pub mod mood;
pub mod notify;
pub mod routes;
pub mod scene;
pub mod session;
pub mod share;
pub mod style;
pub mod viewer;

pub use error::MoodStyleError;
pub use mood::{Mood, MoodEntry, MoodLeaderboardRow, MoodSnapshot, MoodStore};
pub use session::Session;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
