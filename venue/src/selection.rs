//! Active category and selected marker.
//!
//! DESIGN
//! ======
//! Two paths change the selected marker and they deliberately differ:
//!
//! - `select_category` always overwrites: the first marker of the new
//!   category, or none.
//! - `ensure` only fills an empty selection and never replaces one.
//!
//! `reduce` applies an action and then runs `ensure`, so when a category tap
//! and a default fill land in the same update the explicit tap wins and the
//! fill can only act on whatever is still empty afterwards.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::category::{Category, translate_label};
use crate::marker::{self, MapMarker, ensure_selection, first_in_category};

/// Selection state: one active category label and at most one marker id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: String,
    pub marker_id: Option<String>,
}

/// Actions accepted by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    /// User tapped a category card.
    SelectCategory(String),
    /// User tapped a marker on the map or in the location list.
    SelectMarker(String),
    /// Markers were re-derived; re-establish the default selection.
    Refresh,
}

/// Switch to `category_label` and select its first marker, if any.
///
/// Returns the new `(selected_category, selected_marker_id)` pair. Any prior
/// selection is discarded.
#[must_use]
pub fn select_category(markers: &[MapMarker], category_label: &str) -> (String, Option<String>) {
    let marker_id = first_in_category(markers, category_label).map(|m| m.id.clone());
    (category_label.to_owned(), marker_id)
}

/// Apply `action` and then fill an empty selection.
#[must_use]
pub fn reduce(state: &Selection, action: &SelectionAction, markers: &[MapMarker]) -> Selection {
    log::trace!("selection action {action:?} from {state:?}");
    let next = match action {
        SelectionAction::SelectCategory(label) => state.select_category(markers, label),
        SelectionAction::SelectMarker(id) => state.select_marker(markers, id),
        SelectionAction::Refresh => state.clone(),
    };
    next.ensure(markers)
}

impl Selection {
    /// Startup state: `category` with its first marker selected.
    #[must_use]
    pub fn initial(markers: &[MapMarker], category: &str) -> Self {
        Self { category: category.to_owned(), marker_id: None }.ensure(markers)
    }

    /// Overwriting category switch. See [`select_category`].
    #[must_use]
    pub fn select_category(&self, markers: &[MapMarker], category_label: &str) -> Self {
        let (category, marker_id) = select_category(markers, category_label);
        log::debug!("category selected: {category} (marker {marker_id:?})");
        Self { category, marker_id }
    }

    /// Select a marker by id, keeping the active category.
    ///
    /// Ids that are not in `markers` leave the state unchanged.
    #[must_use]
    pub fn select_marker(&self, markers: &[MapMarker], id: &str) -> Self {
        if marker::find(markers, id).is_none() {
            log::debug!("ignoring selection of unknown marker {id}");
            return self.clone();
        }
        Self { category: self.category.clone(), marker_id: Some(id.to_owned()) }
    }

    /// Fill an empty selection with the first marker of the active category.
    #[must_use]
    pub fn ensure(&self, markers: &[MapMarker]) -> Self {
        Self {
            category: self.category.clone(),
            marker_id: ensure_selection(markers, &self.category, self.marker_id.as_deref()),
        }
    }

    /// Carry the selection across a category-list change (language switch).
    ///
    /// The active label is translated through the shared category key. Marker
    /// ids are language independent, so the selected id survives when it still
    /// exists in `markers`; otherwise the selection is refilled.
    #[must_use]
    pub fn relocalize(&self, from: &[Category], to: &[Category], markers: &[MapMarker]) -> Self {
        let category = translate_label(from, to, &self.category).map_or_else(|| self.category.clone(), str::to_owned);
        let marker_id = self.marker_id.clone().filter(|id| marker::find(markers, id).is_some());
        reduce(&Self { category, marker_id }, &SelectionAction::Refresh, markers)
    }

    /// Whether `id` is the selected marker.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.marker_id.as_deref() == Some(id)
    }
}
