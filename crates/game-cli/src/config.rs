use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use npuzzle_utils::puzzle::SessionConfig;

/// Pixel size assumed when no source image is configured.
const PLACEHOLDER_PX: u32 = 512;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::rows")]
    pub rows: usize,
    #[serde(default = "defaults::cols")]
    pub cols: usize,
    #[serde(default = "defaults::shuffle_moves")]
    pub shuffle_moves: usize,
    /// Source image for the tile faces; its pixel size decides the slice
    /// geometry. Optional; without one a square placeholder size is used.
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Minimum gesture displacement, in distance units, before a swipe
    /// counts as input.
    #[serde(default = "defaults::swipe_threshold")]
    pub swipe_threshold: f32,
}

mod defaults {
    pub fn rows() -> usize {
        3
    }
    pub fn cols() -> usize {
        3
    }
    pub fn shuffle_moves() -> usize {
        200
    }
    pub fn swipe_threshold() -> f32 {
        40.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
            shuffle_moves: defaults::shuffle_moves(),
            image: None,
            swipe_threshold: defaults::swipe_threshold(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config {}", path.as_ref().display()))?;
        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("malformed config {}", path.as_ref().display()))?;
        Ok(cfg)
    }

    /// Resolve to the core's session config, probing the configured image
    /// for its pixel dimensions. A configured-but-unreadable image aborts
    /// startup; the session never starts half-initialized.
    pub fn resolve(&self) -> Result<SessionConfig> {
        if !(10..=1000).contains(&self.shuffle_moves) {
            log::warn!(
                "shuffle_moves = {} is outside the recommended 10..=1000",
                self.shuffle_moves
            );
        }
        let (image_width, image_height) = match &self.image {
            Some(path) => image::image_dimensions(path)
                .with_context(|| format!("failed to read puzzle image {}", path.display()))?,
            None => (PLACEHOLDER_PX, PLACEHOLDER_PX),
        };
        Ok(SessionConfig {
            rows: self.rows,
            cols: self.cols,
            shuffle_moves: self.shuffle_moves,
            image_width,
            image_height,
        })
    }
}
