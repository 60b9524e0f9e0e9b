//! Languages offered by the kiosk language picker.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use serde::{Deserialize, Serialize};

/// Supported UI languages. English is the fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
    Ar,
}

impl Language {
    /// Picker order.
    pub const ALL: [Self; 6] = [Self::En, Self::Es, Self::Fr, Self::De, Self::Zh, Self::Ar];

    /// Short code used in the picker and in `localStorage` (`"EN"`, `"ES"`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::De => "DE",
            Self::Zh => "ZH",
            Self::Ar => "AR",
        }
    }

    /// English display name shown in the picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Zh => "Chinese",
            Self::Ar => "Arabic",
        }
    }

    /// BCP 47 tag for the document `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Zh => "zh",
            Self::Ar => "ar",
        }
    }

    /// Whether text runs right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Parse a picker code, case-insensitive and tolerant of region tags
    /// (`"de-AT"` parses as German).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let primary = value.split(['-', '_']).next().unwrap_or(value);
        Self::ALL.into_iter().find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }
}
