//! Map markers and the category-to-marker derivation.
//!
//! Markers are never edited in place. Whenever the category list changes
//! (a language switch), the kiosk derives a fresh marker list from the
//! localized location groups and re-runs selection bookkeeping against it.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use serde::{Deserialize, Serialize};

/// One named location inside a category group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationItem {
    pub id: String,
    pub label: String,
    /// Horizontal position as a percentage of the map container, e.g. `"18%"`.
    pub x: String,
    /// Vertical position as a percentage of the map container.
    pub y: String,
}

/// A category with its display color and the locations that belong to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLocations {
    /// Localized category label; matches a `Category::label`.
    pub category: String,
    pub color: String,
    pub items: Vec<LocationItem>,
}

/// A point of interest on the floor map, tied to exactly one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub label: String,
    /// Display hint only (CSS color).
    pub color: String,
    pub x: String,
    pub y: String,
    /// Localized category label this marker belongs to.
    pub category: String,
}

/// Flatten location groups into markers, group order first, then item order.
#[must_use]
pub fn derive_markers(groups: &[CategoryLocations]) -> Vec<MapMarker> {
    groups
        .iter()
        .flat_map(|group| {
            group.items.iter().map(|item| MapMarker {
                id: item.id.clone(),
                label: item.label.clone(),
                color: group.color.clone(),
                x: item.x.clone(),
                y: item.y.clone(),
                category: group.category.clone(),
            })
        })
        .collect()
}

/// Markers whose category equals `category_label`, in their original order.
///
/// An unknown label or a category without locations yields an empty list.
#[must_use]
pub fn filter_by_category<'a>(markers: &'a [MapMarker], category_label: &str) -> Vec<&'a MapMarker> {
    markers.iter().filter(|m| m.category == category_label).collect()
}

/// First marker of a category in derivation order.
#[must_use]
pub fn first_in_category<'a>(markers: &'a [MapMarker], category_label: &str) -> Option<&'a MapMarker> {
    markers.iter().find(|m| m.category == category_label)
}

/// Look up a marker by id.
#[must_use]
pub fn find<'a>(markers: &'a [MapMarker], id: &str) -> Option<&'a MapMarker> {
    markers.iter().find(|m| m.id == id)
}

/// Fill an empty selection with the first marker of `selected_category`.
///
/// A present `current_selected_id` is returned unchanged, whatever category
/// it belongs to. Returns `None` when the selection was empty and the category
/// has no markers.
#[must_use]
pub fn ensure_selection(markers: &[MapMarker], selected_category: &str, current_selected_id: Option<&str>) -> Option<String> {
    match current_selected_id {
        Some(id) => Some(id.to_owned()),
        None => first_in_category(markers, selected_category).map(|m| m.id.clone()),
    }
}
