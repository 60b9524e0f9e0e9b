//! Persisted kiosk preferences: text size, audio feedback, language.
//!
//! Keys and encodings stay compatible with existing kiosk storage: the two
//! flags are JSON booleans and the language is its bare picker code.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::i18n::Language;
use crate::util::ui_persistence::{decode_json, load_string, save_json, save_string};

pub const LARGE_TEXT_KEY: &str = "largeText";
pub const AUDIO_ON_KEY: &str = "audioOn";
pub const LANGUAGE_KEY: &str = "language";

/// User-adjustable settings that survive a page reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub large_text: bool,
    pub audio_on: bool,
    pub language: Language,
}

impl Preferences {
    /// Preferences for a kiosk with nothing stored yet.
    pub fn defaults(default_language: Language) -> Self {
        Self { large_text: false, audio_on: true, language: default_language }
    }

    /// Build preferences from raw stored values, ignoring anything malformed.
    pub fn from_stored(
        large_text: Option<&str>,
        audio_on: Option<&str>,
        language: Option<&str>,
        default_language: Language,
    ) -> Self {
        let defaults = Self::defaults(default_language);
        Self {
            large_text: large_text.and_then(decode_json::<bool>).unwrap_or(defaults.large_text),
            audio_on: audio_on.and_then(decode_json::<bool>).unwrap_or(defaults.audio_on),
            language: language.and_then(Language::parse).unwrap_or(defaults.language),
        }
    }

    /// Read stored preferences.
    pub fn load(default_language: Language) -> Self {
        let large_text = load_string(LARGE_TEXT_KEY);
        let audio_on = load_string(AUDIO_ON_KEY);
        let language = load_string(LANGUAGE_KEY);
        Self::from_stored(large_text.as_deref(), audio_on.as_deref(), language.as_deref(), default_language)
    }

    /// Write all preferences.
    pub fn save(&self) {
        save_json(LARGE_TEXT_KEY, &self.large_text);
        save_json(AUDIO_ON_KEY, &self.audio_on);
        save_string(LANGUAGE_KEY, self.language.code());
    }
}
