use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::brush::BrushWidth;
use crate::surface::{self, MAX_PIXELS};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Startup settings for a drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Initial brush color as `[r, g, b]`
    pub color: [u8; 3],
    pub brush_width: BrushWidth,
    pub window_title: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            color: [0, 0, 0],
            brush_width: BrushWidth::default(),
            window_title: "Sketch: draw and save to PNG".to_owned(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Use the file named by `SKETCH_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        surface::check_dimensions(self.width as i64, self.height as i64).map_err(|_| {
            ConfigError::Invalid(format!(
                "canvas size must be positive and at most {} pixels, got {}x{}",
                MAX_PIXELS, self.width, self.height
            ))
        })?;
        Ok(())
    }

    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (600, 400));
        assert_eq!(config.color32(), Color32::BLACK);
        assert_eq!(config.brush_width.pixels(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json(r#"{ "width": 800, "brush_width": 5 }"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 400);
        assert_eq!(config.brush_width.pixels(), 5);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(
            CanvasConfig::from_json(r#"{ "height": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_canvas() {
        assert!(matches!(
            CanvasConfig::from_json(r#"{ "width": 4294967295, "height": 4294967295 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_brush_width() {
        assert!(matches!(
            CanvasConfig::from_json(r#"{ "brush_width": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
