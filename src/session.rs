//! One application session: the store, toasts, navigation and the overlay,
//! wired together for the lifetime of a tab.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{self, OutfitDescriptor};
use crate::config::AppConfig;
use crate::detection::{Camera, MoodClassifier, MoodDetector};
use crate::error::MoodStyleError;
use crate::mood::{ranked_by_spend, Mood, MoodEntry, MoodLeaderboardRow, MoodStore};
use crate::notify::NotificationCenter;
use crate::routes::{Overlay, Route};
use crate::share::{self, Clipboard};
use crate::viewer::OutfitViewer;

pub struct Session {
    config: AppConfig,
    store: Arc<MoodStore>,
    notifications: Arc<NotificationCenter>,
    route: Route,
    dark_mode: bool,
    viewer: Option<OutfitViewer>,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(MoodStore::from_config(&config));
        info!(
            "Session started (history limit {}, confidence policy {:?})",
            store.history_limit(),
            config.confidence_policy
        );
        Self {
            config,
            store,
            notifications: Arc::new(NotificationCenter::new()),
            route: Route::Home,
            dark_mode: false,
            viewer: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared handle to the mood store.
    pub fn store(&self) -> Arc<MoodStore> {
        self.store.clone()
    }

    pub fn notifications(&self) -> Arc<NotificationCenter> {
        self.notifications.clone()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Switch top-level view. An open overlay stays open on top of the new page.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating {} -> {}", self.route, route);
        self.route = route;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    /// Explicit user choice of mood.
    pub fn select_mood(&self, mood: impl Into<Mood>) {
        self.store.set_current_mood(mood);
    }

    /// Run one detection pass against the session's store and toasts.
    pub async fn detect_mood<C, K>(
        &self,
        detector: &mut MoodDetector<C>,
        camera: &K,
    ) -> Result<MoodEntry, MoodStyleError>
    where
        C: MoodClassifier,
        K: Camera,
    {
        detector
            .detect(camera, &self.store, self.notifications.as_ref())
            .await
    }

    pub fn share(&self, clipboard: &dyn Clipboard) -> Result<String, MoodStyleError> {
        share::share_mood(&self.store, clipboard, self.notifications.as_ref())
    }

    /// Top picks for the current mood, or every pick when none is set.
    pub fn recommendations(&self) -> Vec<OutfitDescriptor> {
        match self.store.current_mood() {
            Some(mood) => catalog::by_mood(&mood),
            None => catalog::top_picks(),
        }
    }

    /// Leaderboard rows for display, biggest spenders first.
    pub fn leaderboard(&self) -> Vec<MoodLeaderboardRow> {
        ranked_by_spend(&self.store.mood_leaderboard())
    }

    /// Open the 3D preview for a catalog outfit, replacing any open preview.
    pub fn open_viewer(&mut self, outfit_id: &str) -> Result<&mut OutfitViewer, MoodStyleError> {
        let outfit = catalog::find(outfit_id)?;
        self.close_viewer();

        let route = self.route;
        let viewer = OutfitViewer::open(
            Some(outfit),
            self.dark_mode,
            &self.config.viewer,
            Box::new(move || debug!("Viewer closed over {}", route)),
        );
        Ok(self.viewer.insert(viewer))
    }

    pub fn viewer(&self) -> Option<&OutfitViewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut OutfitViewer> {
        self.viewer.as_mut()
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.viewer.as_ref().map(|_| Overlay::OutfitViewer)
    }

    pub fn close_viewer(&mut self) {
        if let Some(viewer) = self.viewer.take() {
            viewer.close();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
