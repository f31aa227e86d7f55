//! Flipbook asset library.
//!
//! Characters resolve flipbooks by path once, when they are built. A path
//! that is not registered resolves to `None` and the sprite shows nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use factotum_core::constants::{IDLE_ANIMATION_PATH, RUNNING_ANIMATION_PATH};
use factotum_core::types::FlipbookHandle;

/// Sprite animation asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipbookAsset {
    pub name: String,
    pub frame_count: u32,
    pub frames_per_second: f32,
}

#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    flipbooks: Vec<FlipbookAsset>,
    by_path: HashMap<String, FlipbookHandle>,
}

impl FlipbookAsset {
    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.frames_per_second > 0.0 {
            self.frame_count as f32 / self.frames_per_second
        } else {
            0.0
        }
    }
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the stock side-scroller run and idle flipbooks.
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.register(
            RUNNING_ANIMATION_PATH,
            FlipbookAsset {
                name: "RunningAnimation".into(),
                frame_count: 8,
                frames_per_second: 15.0,
            },
        );
        library.register(
            IDLE_ANIMATION_PATH,
            FlipbookAsset {
                name: "IdleAnimation".into(),
                frame_count: 4,
                frames_per_second: 8.0,
            },
        );
        library
    }

    /// Register a flipbook under `path`, replacing any earlier registration.
    pub fn register(&mut self, path: impl Into<String>, asset: FlipbookAsset) -> FlipbookHandle {
        let handle = FlipbookHandle(self.flipbooks.len() as u32);
        self.flipbooks.push(asset);
        self.by_path.insert(path.into(), handle);
        handle
    }

    pub fn resolve(&self, path: &str) -> Option<FlipbookHandle> {
        let handle = self.by_path.get(path).copied();
        if handle.is_none() {
            log::debug!("flipbook not found: {path}");
        }
        handle
    }

    pub fn get(&self, handle: FlipbookHandle) -> Option<&FlipbookAsset> {
        self.flipbooks.get(handle.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
