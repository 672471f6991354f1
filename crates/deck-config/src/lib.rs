//! Swipedeck configuration system
//!
//! This crate provides centralized configuration for the deck scene, loading
//! settings from `deck.toml` with environment-variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for the deck scene.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckConfig {
    /// Logical display surface dimensions.
    pub viewport: ViewportConfig,
    /// Swipe-commit decision and exit animation settings.
    pub swipe: SwipeConfig,
    /// Stacked-card fan-out settings.
    pub stack: StackConfig,
    /// Settle-back spring parameters.
    pub spring: SpringConfig,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 800.0,
        }
    }
}

/// Swipe decision and exit animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Horizontal displacement required to commit, as a fraction of the
    /// viewport width. The comparison is strict: displacement exactly at the
    /// threshold resets instead of committing.
    pub threshold_ratio: f32,
    /// Duration of the forced off-screen exit, in milliseconds. Constant
    /// regardless of the distance remaining.
    pub out_duration_ms: f32,
    /// Card tilt at the far end of the rotation domain, in degrees.
    pub rotation_max_deg: f32,
    /// Half-width of the rotation input domain, as a multiple of the
    /// viewport width.
    pub rotation_reach_ratio: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: 0.25,
            out_duration_ms: 250.0,
            rotation_max_deg: 120.0,
            rotation_reach_ratio: 1.5,
        }
    }
}

/// Stacked-card rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Vertical offset between consecutive stacked cards, in logical pixels.
    pub offset_step: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self { offset_step: 10.0 }
    }
}

/// Spring parameters for the settle-back animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 180.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl DeckConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (`deck.toml` in the
    /// current directory) or return the default configuration if the file
    /// doesn't exist.
    pub fn load_or_default() -> Self {
        Self::load_from_file("deck.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over configuration file values,
    /// allowing temporary overrides without editing the file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("DECK_VIEWPORT_WIDTH") {
            if let Ok(width) = val.parse::<f32>() {
                self.viewport.width = width;
            }
        }
        if let Ok(val) = std::env::var("DECK_VIEWPORT_HEIGHT") {
            if let Ok(height) = val.parse::<f32>() {
                self.viewport.height = height;
            }
        }
        if let Ok(val) = std::env::var("DECK_THRESHOLD_RATIO") {
            if let Ok(ratio) = val.parse::<f32>() {
                self.swipe.threshold_ratio = ratio;
            }
        }
        if let Ok(val) = std::env::var("DECK_SWIPE_OUT_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.swipe.out_duration_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("DECK_STACK_OFFSET") {
            if let Ok(step) = val.parse::<f32>() {
                self.stack.offset_step = step;
            }
        }
    }

    /// Load the effective configuration.
    ///
    /// 1. Load from deck.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert_eq!(config.viewport.width, 400.0);
        assert_eq!(config.swipe.threshold_ratio, 0.25);
        assert_eq!(config.swipe.out_duration_ms, 250.0);
        assert_eq!(config.stack.offset_step, 10.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DeckConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: DeckConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.swipe.threshold_ratio, 0.25);
        assert_eq!(parsed.spring.stiffness, 180.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: DeckConfig = toml::from_str("[swipe]\nthreshold_ratio = 0.3\n").unwrap();
        assert_eq!(parsed.swipe.threshold_ratio, 0.3);
        assert_eq!(parsed.swipe.out_duration_ms, 250.0);
        assert_eq!(parsed.viewport.width, 400.0);
    }

    #[test]
    fn test_load_or_default_without_file() {
        // Should not panic even if deck.toml doesn't exist.
        let config = DeckConfig::load_or_default();
        assert_eq!(config.stack.offset_step, 10.0);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("DECK_VIEWPORT_WIDTH", "800");
            std::env::set_var("DECK_THRESHOLD_RATIO", "0.4");
        }

        let mut config = DeckConfig::default();
        config.merge_with_env();

        assert_eq!(config.viewport.width, 800.0);
        assert_eq!(config.swipe.threshold_ratio, 0.4);

        unsafe {
            std::env::remove_var("DECK_VIEWPORT_WIDTH");
            std::env::remove_var("DECK_THRESHOLD_RATIO");
        }
    }
}
