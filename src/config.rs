//! Layout configuration persistence
//!
//! Stores user preferences in `~/.config/documint-layout/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MOBILE_BREAKPOINT;
use crate::persistence::LAYOUT_STORAGE_KEY;
use crate::solver::MIN_PANEL_WIDTH;

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Minimum width of a visible panel while dragging, in percent
    #[serde(default = "default_min_panel_width")]
    pub min_panel_width: f32,

    /// Viewport width (logical pixels) below which a single panel is shown
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,

    /// Width of the divider hit region in logical pixels
    #[serde(default = "default_divider_hit_width")]
    pub divider_hit_width: f32,

    /// Height of the strip holding minimized-panel restore tabs
    #[serde(default = "default_tab_strip_height")]
    pub tab_strip_height: f32,

    /// Storage key for the persisted layout record
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_min_panel_width() -> f32 {
    MIN_PANEL_WIDTH
}

fn default_mobile_breakpoint() -> f32 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_divider_hit_width() -> f32 {
    8.0
}

fn default_tab_strip_height() -> f32 {
    28.0
}

fn default_storage_key() -> String {
    LAYOUT_STORAGE_KEY.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_panel_width: default_min_panel_width(),
            mobile_breakpoint: default_mobile_breakpoint(),
            divider_hit_width: default_divider_hit_width(),
            tab_strip_height: default_tab_strip_height(),
            storage_key: default_storage_key(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<LayoutConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.validated()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    ///
    /// Three panels at the minimum width must still fit in 100%.
    pub fn validated(mut self) -> Self {
        if !(self.min_panel_width > 0.0 && self.min_panel_width <= 100.0 / 3.0) {
            tracing::warn!(
                "Invalid min_panel_width {}, using {}",
                self.min_panel_width,
                MIN_PANEL_WIDTH
            );
            self.min_panel_width = default_min_panel_width();
        }
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            tracing::warn!(
                "Invalid mobile_breakpoint {}, using {}",
                self.mobile_breakpoint,
                DEFAULT_MOBILE_BREAKPOINT
            );
            self.mobile_breakpoint = default_mobile_breakpoint();
        }
        if !(self.divider_hit_width.is_finite() && self.divider_hit_width > 0.0) {
            self.divider_hit_width = default_divider_hit_width();
        }
        if !(self.tab_strip_height.is_finite() && self.tab_strip_height >= 0.0) {
            self.tab_strip_height = default_tab_strip_height();
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = default_storage_key();
        }
        self
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
