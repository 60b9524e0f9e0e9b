//! Localization: supported languages and per-language kiosk copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each language ships as one JSON document under `locales/`, embedded at
//! compile time. Category labels come from here, so the marker list is
//! re-derived whenever the language changes.

pub mod dictionary;
pub mod language;

pub use dictionary::{Dictionary, DictionaryError};
pub use language::Language;
