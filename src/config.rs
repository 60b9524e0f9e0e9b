//! Kiosk configuration parsed from the embedded `assets/kiosk.json`.
//!
//! Every field has a default, so a deployment only lists what it changes.
//! Out-of-range values are rejected as a whole; `builtin` then falls back to
//! the defaults instead of running with half-applied settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const DEFAULT_INITIAL_CATEGORY: &str = "parking";
pub const DEFAULT_LEVEL: u8 = 2;
pub const DEFAULT_ZOOM_MIN: f64 = 0.6;
pub const DEFAULT_ZOOM_MAX: f64 = 1.6;
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_ZOOM_INITIAL: f64 = 1.0;
pub const DEFAULT_CLICK_SOUND_SRC: &str = "/sounds/click.mp3";
pub const DEFAULT_CLICK_VOLUME: f64 = 0.35;

const BUILTIN_CONFIG: &str = include_str!("../assets/kiosk.json");

/// Error returned by [`KioskConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse kiosk config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid zoom range: min={min} max={max} step={step} initial={initial}")]
    InvalidZoom { min: f64, max: f64, step: f64, initial: f64 },
    #[error("click volume must be within 0..=1, got {0}")]
    InvalidVolume(f64),
    #[error("floor level must be 1 or 2, got {0}")]
    InvalidLevel(u8),
    #[error("initial category key must not be empty")]
    EmptyInitialCategory,
}

/// Map zoom bounds and step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { min: DEFAULT_ZOOM_MIN, max: DEFAULT_ZOOM_MAX, step: DEFAULT_ZOOM_STEP, initial: DEFAULT_ZOOM_INITIAL }
    }
}

/// Button click feedback sound.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickSoundConfig {
    pub src: String,
    pub volume: f64,
}

impl Default for ClickSoundConfig {
    fn default() -> Self {
        Self { src: DEFAULT_CLICK_SOUND_SRC.to_owned(), volume: DEFAULT_CLICK_VOLUME }
    }
}

/// Deployment settings for one kiosk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Language used when no preference is stored.
    pub default_language: Language,
    /// Category key active at startup.
    pub initial_category: String,
    /// Floor shown when the map first renders.
    pub default_level: u8,
    pub zoom: ZoomConfig,
    pub click_sound: ClickSoundConfig,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            initial_category: DEFAULT_INITIAL_CATEGORY.to_owned(),
            default_level: DEFAULT_LEVEL,
            zoom: ZoomConfig::default(),
            click_sound: ClickSoundConfig::default(),
        }
    }
}

impl KioskConfig {
    /// Parse and validate a config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded config, or defaults when it is invalid.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default kiosk config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ZoomConfig { min, max, step, initial } = self.zoom;
        let finite = [min, max, step, initial].iter().all(|v| v.is_finite());
        if !finite || min <= 0.0 || min >= max || step <= 0.0 || !(min..=max).contains(&initial) {
            return Err(ConfigError::InvalidZoom { min, max, step, initial });
        }
        if !(0.0..=1.0).contains(&self.click_sound.volume) {
            return Err(ConfigError::InvalidVolume(self.click_sound.volume));
        }
        if !matches!(self.default_level, 1 | 2) {
            return Err(ConfigError::InvalidLevel(self.default_level));
        }
        if self.initial_category.trim().is_empty() {
            return Err(ConfigError::EmptyInitialCategory);
        }
        Ok(())
    }
}
