//! Per-language kiosk copy loaded from the embedded `locales/*.json` files.
//!
//! TRADE-OFFS
//! ==========
//! Locales are parsed on demand rather than cached: a language switch is a
//! rare, user-paced event and the documents are a few kilobytes.

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;

use serde::{Deserialize, Serialize};
use venue::Category;

use super::language::Language;

const EN: &str = include_str!("../../locales/en.json");
const ES: &str = include_str!("../../locales/es.json");
const FR: &str = include_str!("../../locales/fr.json");
const DE: &str = include_str!("../../locales/de.json");
const ZH: &str = include_str!("../../locales/zh.json");
const AR: &str = include_str!("../../locales/ar.json");

/// Error returned by [`Dictionary::load`].
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to parse {language:?} locale: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Labels for the narrow-screen tab bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCopy {
    pub explore: String,
    pub map: String,
    pub offers: String,
}

/// One section of the expanded help panel: prose, a list, or both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpSection {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A carousel slide in the promo panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub subtitle: String,
}

/// Copy for the floor map panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCopy {
    pub title: String,
    pub floor_label: String,
    pub level1: String,
    pub level2: String,
    pub placeholder: String,
    pub zone_parking: String,
    pub zone_banks: String,
    pub zone_shopping: String,
    pub zone_food: String,
    pub legend_you_are_here: String,
    pub legend_fire_exit: String,
    pub legend_accessible: String,
    pub legend_selected: String,
    pub legend_toggle: String,
    pub list_toggle: String,
    pub list_title: String,
    pub zoom_out: String,
    pub zoom_in: String,
}

/// All user-facing copy for one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub nav_title: String,
    pub nav_subtitle: String,
    pub language_label: String,
    pub tabs: TabCopy,
    pub welcome_title: String,
    pub welcome_subtitle: String,
    pub help_title: String,
    pub help_steps: Vec<String>,
    pub help_button_label: String,
    pub help_panel_title: String,
    pub help_show_label: String,
    pub help_hide_label: String,
    pub help_sections: Vec<HelpSection>,
    pub promo_header: String,
    pub promo_offers: Vec<Offer>,
    pub promotions_title: String,
    pub promotions: Vec<String>,
    /// Home grid categories in display order. Keys match the venue layout.
    pub categories: Vec<Category>,
    pub map: MapCopy,
}

impl Dictionary {
    /// Parse the embedded locale for `language`.
    pub fn load(language: Language) -> Result<Self, DictionaryError> {
        serde_json::from_str(raw_locale(language)).map_err(|source| DictionaryError::Parse { language, source })
    }

    /// Locale for `language`, falling back to English when it cannot be parsed.
    ///
    /// Returns `None` only if English itself is broken.
    pub fn for_language(language: Language) -> Option<Self> {
        match Self::load(language) {
            Ok(dictionary) => Some(dictionary),
            Err(e) if language != Language::En => {
                log::warn!("{e}; falling back to English");
                Self::for_language(Language::En)
            }
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    /// Label of the category with `key`, if present.
    pub fn category_label(&self, key: &str) -> Option<&str> {
        venue::category::by_key(&self.categories, key).map(|c| c.label.as_str())
    }
}

fn raw_locale(language: Language) -> &'static str {
    match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
        Language::De => DE,
        Language::Zh => ZH,
        Language::Ar => AR,
    }
}
