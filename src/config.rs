//! Application configuration
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes:
//!
//! ```json
//! { "window": { "width": 1280.0 }, "style": { "shape_color": [0, 128, 255] } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::Deserialize;

use crate::error::{CadError, Result};

/// RGB triple as stored in the config file
pub type Rgb = [u8; 3];

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MiniCAD".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: Rgb,
    pub shape_color: Rgb,
    /// Color of the shape that follows the cursor mid-gesture
    pub preview_color: Rgb,
    pub hint_color: Rgb,
    pub stroke_width: f32,
    pub point_radius: f32,
    pub hint_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            shape_color: [0, 0, 0],
            preview_color: [150, 150, 150],
            hint_color: [0, 0, 0],
            stroke_width: 2.0,
            point_radius: 3.0,
            hint_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    /// TTF/OTF file used for the hint text instead of the built-in font
    pub hint_font: Option<PathBuf>,
}

impl Config {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| CadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the window or renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("style.stroke_width", self.style.stroke_width),
            ("style.point_radius", self.style.point_radius),
            ("style.hint_size", self.style.hint_size),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CadError::InvalidSetting {
                    key,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
