//! Directory categories shown on the home grid.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use serde::{Deserialize, Serialize};

/// A named grouping of venue locations (Parking, Banks, ...).
///
/// `key` is stable across languages; `label` is the localized display name
/// and is what markers reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
    pub icon: String,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into(), icon: icon.into() }
    }
}

/// Find the category with the given stable key.
pub fn by_key<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.key == key)
}

/// Find the category with the given display label.
pub fn by_label<'a>(categories: &'a [Category], label: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.label == label)
}

/// Map a label from one category list to the label sharing its key in another.
///
/// Used when the language changes: `"Parking"` in English becomes
/// `"Estacionamiento"` in Spanish. Returns `None` when the label is unknown in
/// `from` or its key is missing from `to`.
pub fn translate_label<'a>(from: &[Category], to: &'a [Category], label: &str) -> Option<&'a str> {
    let key = &by_label(from, label)?.key;
    by_key(to, key).map(|c| c.label.as_str())
}
