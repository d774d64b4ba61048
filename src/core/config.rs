//! Game configuration.
//!
//! Everything the session and frontend need that isn't game state:
//! cooldown length, window geometry, asset location and gallery layout.
//! All values have defaults matching the classic party setup, so most callers
//! only ever write `BingoConfig::default()`.

use serde::{Deserialize, Serialize};

use super::cooldown::DEFAULT_COOLDOWN_MS;
use crate::layout::{GalleryLayout, WindowSize};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Minimum time between reveals, in milliseconds.
    pub cooldown_ms: u64,

    /// Window title.
    pub title: String,

    /// Fixed window size in logical pixels.
    pub window: WindowSize,

    /// Directory holding images, sounds, music and font.
    pub asset_root: String,

    /// Where the featured card and thumbnails go.
    pub layout: GalleryLayout,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            title: "Monster Bingo".to_string(),
            window: WindowSize::default(),
            asset_root: "assets".to_string(),
            layout: GalleryLayout::default(),
            seed: None,
        }
    }
}

impl BingoConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reveal cooldown.
    #[must_use]
    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size.
    #[must_use]
    pub fn with_window(mut self, width: f32, height: f32) -> Self {
        self.window = WindowSize::new(width, height);
        self
    }

    /// Set the asset directory.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Set the gallery layout.
    #[must_use]
    pub fn with_layout(mut self, layout: GalleryLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
