//! Top-level navigation surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A navigable top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Dashboard,
    Games,
    TopPicks,
    Gift,
    Vendor,
    Wishlist,
    Wardrobe,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Dashboard,
        Route::Games,
        Route::TopPicks,
        Route::Gift,
        Route::Vendor,
        Route::Wishlist,
        Route::Wardrobe,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Games => "/games",
            Route::TopPicks => "/top-picks",
            Route::Gift => "/gift",
            Route::Vendor => "/vendor",
            Route::Wishlist => "/wishlist",
            Route::Wardrobe => "/wardrobe",
        }
    }

    /// Match a path, ignoring a trailing slash and any query or fragment.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Layers drawn over the current route. Never addressable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    OutfitViewer,
}
