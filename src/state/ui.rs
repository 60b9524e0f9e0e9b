//! Local UI chrome state (tabs, accessibility toggles, language).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the directory model so toggling
//! audio or text size never touches category or marker state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::Language;
use crate::util::preferences::Preferences;

/// Tabs of the narrow-screen layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileTab {
    #[default]
    Explore,
    Map,
    Offers,
}

impl MobileTab {
    pub const ALL: [Self; 3] = [Self::Explore, Self::Map, Self::Offers];
}

/// UI state for the tab bar, accessibility toggles, and language picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub mobile_tab: MobileTab,
    pub large_text: bool,
    pub audio_on: bool,
    pub language: Language,
    pub show_location_list: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mobile_tab: MobileTab::Explore,
            large_text: false,
            audio_on: true,
            language: Language::En,
            show_location_list: true,
        }
    }
}

impl UiState {
    /// Startup state seeded from stored preferences.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self { large_text: prefs.large_text, audio_on: prefs.audio_on, language: prefs.language, ..Self::default() }
    }

    /// The persisted subset of this state.
    pub fn preferences(&self) -> Preferences {
        Preferences { large_text: self.large_text, audio_on: self.audio_on, language: self.language }
    }
}
