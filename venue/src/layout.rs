//! Venue layout: the static category-to-location table behind the floor map.
//!
//! The table is authored once, keyed by stable category keys, and localized
//! per language. Item labels are stored as a suffix appended to the localized
//! category label, so `"parking"` + `"L1"` renders as `"Parking - L1"` in
//! English and `"Parken - L1"` in German.
//!
//! Authoring mistakes are data defects, not runtime faults. `validate` is the
//! load-time gate that reports them as [`VenueError`]; the selection core
//! downstream assumes a validated table.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::category::{Category, by_key};
use crate::marker::{CategoryLocations, LocationItem};

const BUILTIN_LAYOUT: &str = include_str!("../assets/venue.json");

/// Error returned when loading or validating a [`VenueLayout`].
#[derive(Debug, thiserror::Error)]
pub enum VenueError {
    /// The layout document is not valid JSON for this schema.
    #[error("failed to parse venue layout: {0}")]
    Parse(#[from] serde_json::Error),
    /// A group references a category key that is not in the category list.
    #[error("unknown category key: {key}")]
    UnknownCategory { key: String },
    /// Two locations share the same marker id.
    #[error("duplicate marker id: {id}")]
    DuplicateMarkerId { id: String },
    /// A position is not a percentage in `0%..=100%`.
    #[error("invalid position {value:?} for marker {id}")]
    InvalidPosition { id: String, value: String },
    /// Two categories in one language share a display label.
    #[error("duplicate category label: {label}")]
    DuplicateCategoryLabel { label: String },
    /// Two categories in one language share a stable key.
    #[error("duplicate category key: {key}")]
    DuplicateCategoryKey { key: String },
}

/// A location as authored, before its label is localized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: String,
    pub suffix: String,
    pub x: String,
    pub y: String,
}

/// All locations for one category key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutGroup {
    pub category: String,
    pub color: String,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

/// The full venue table in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueLayout {
    pub groups: Vec<LayoutGroup>,
}

impl VenueLayout {
    /// Parse a layout document.
    pub fn from_json(raw: &str) -> Result<Self, VenueError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The layout shipped with the kiosk.
    pub fn builtin() -> Result<Self, VenueError> {
        Self::from_json(BUILTIN_LAYOUT)
    }

    /// Check the layout against one language's category list.
    ///
    /// Reports the first defect found, in this order: duplicate category
    /// labels or keys, unknown category keys, duplicate marker ids, bad
    /// positions.
    pub fn validate(&self, categories: &[Category]) -> Result<(), VenueError> {
        let mut labels = HashSet::new();
        let mut keys = HashSet::new();
        for category in categories {
            if !labels.insert(category.label.as_str()) {
                return Err(VenueError::DuplicateCategoryLabel { label: category.label.clone() });
            }
            if !keys.insert(category.key.as_str()) {
                return Err(VenueError::DuplicateCategoryKey { key: category.key.clone() });
            }
        }

        let mut ids = HashSet::new();
        for group in &self.groups {
            if by_key(categories, &group.category).is_none() {
                return Err(VenueError::UnknownCategory { key: group.category.clone() });
            }
            for item in &group.items {
                if !ids.insert(item.id.as_str()) {
                    return Err(VenueError::DuplicateMarkerId { id: item.id.clone() });
                }
                for value in [&item.x, &item.y] {
                    if parse_percent(value).is_none() {
                        return Err(VenueError::InvalidPosition { id: item.id.clone(), value: value.clone() });
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolve category keys to localized labels, preserving group order.
    ///
    /// Groups whose key has no category in `categories` are dropped; run
    /// [`validate`](Self::validate) first to surface them as errors.
    #[must_use]
    pub fn localize(&self, categories: &[Category]) -> Vec<CategoryLocations> {
        self.groups
            .iter()
            .filter_map(|group| {
                let Some(category) = by_key(categories, &group.category) else {
                    log::warn!("venue group {} has no matching category", group.category);
                    return None;
                };
                let items = group
                    .items
                    .iter()
                    .map(|item| LocationItem {
                        id: item.id.clone(),
                        label: format!("{} - {}", category.label, item.suffix),
                        x: item.x.clone(),
                        y: item.y.clone(),
                    })
                    .collect();
                Some(CategoryLocations { category: category.label.clone(), color: group.color.clone(), items })
            })
            .collect()
    }
}

/// Parse a percentage-of-container position such as `"18%"`.
///
/// Accepts finite values in `0..=100` followed by a single `%`.
#[must_use]
pub fn parse_percent(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix('%')?;
    let Ok(parsed) = number.trim().parse::<f64>() else {
        return None;
    };
    (parsed.is_finite() && (0.0..=100.0).contains(&parsed)).then_some(parsed)
}
