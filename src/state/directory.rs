//! Directory state: categories, derived markers, and the marker selection.
//!
//! ARCHITECTURE
//! ============
//! This is the single writer for everything the category grid and the map
//! read. Markers are re-derived from the venue layout whenever the language
//! changes; the selection is only ever changed through `venue::reduce` (or
//! `Selection::relocalize` on a language switch), so the default-selection
//! rule is re-applied after every transition.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use venue::{Category, MapMarker, Selection, SelectionAction, VenueError, VenueLayout, derive_markers, filter_by_category};

use crate::i18n::{Dictionary, Language};

/// Categories, markers, and selection for the active language.
#[derive(Clone, Debug)]
pub struct DirectoryState {
    pub language: Language,
    pub categories: Vec<Category>,
    pub markers: Vec<MapMarker>,
    pub selection: Selection,
    layout: VenueLayout,
}

impl DirectoryState {
    /// Build the startup state without validating the layout.
    ///
    /// `initial_category_key` falls back to the first category when the
    /// dictionary has no such key.
    pub fn new(language: Language, dictionary: &Dictionary, layout: VenueLayout, initial_category_key: &str) -> Self {
        let categories = dictionary.categories.clone();
        let markers = derive_markers(&layout.localize(&categories));
        let initial = dictionary
            .category_label(initial_category_key)
            .or_else(|| categories.first().map(|c| c.label.as_str()))
            .unwrap_or_default()
            .to_owned();
        let selection = Selection::initial(&markers, &initial);
        log::debug!("directory ready: {} categories, {} markers, selection {selection:?}", categories.len(), markers.len());
        Self { language, categories, markers, selection, layout }
    }

    /// Validate `layout` against the dictionary's categories, then build.
    pub fn load(
        language: Language,
        dictionary: &Dictionary,
        layout: VenueLayout,
        initial_category_key: &str,
    ) -> Result<Self, VenueError> {
        layout.validate(&dictionary.categories)?;
        Ok(Self::new(language, dictionary, layout, initial_category_key))
    }

    /// Label of the active category.
    pub fn selected_category(&self) -> &str {
        &self.selection.category
    }

    /// Id of the selected marker, if any.
    pub fn selected_marker_id(&self) -> Option<&str> {
        self.selection.marker_id.as_deref()
    }

    /// The selected marker, if any.
    pub fn selected_marker(&self) -> Option<&MapMarker> {
        self.selected_marker_id().and_then(|id| venue::marker::find(&self.markers, id))
    }

    /// Markers of the active category, for the location list.
    pub fn visible_markers(&self) -> Vec<&MapMarker> {
        filter_by_category(&self.markers, &self.selection.category)
    }

    /// Apply a selection action against the current markers.
    pub fn dispatch(&mut self, action: SelectionAction) {
        self.selection = venue::reduce(&self.selection, &action, &self.markers);
    }

    pub fn select_category(&mut self, label: &str) {
        self.dispatch(SelectionAction::SelectCategory(label.to_owned()));
    }

    pub fn select_marker(&mut self, id: &str) {
        self.dispatch(SelectionAction::SelectMarker(id.to_owned()));
    }

    /// Switch to another language's categories and re-derive markers.
    pub fn set_language(&mut self, language: Language, dictionary: &Dictionary) {
        if language == self.language {
            return;
        }
        if let Err(e) = self.layout.validate(&dictionary.categories) {
            log::warn!("venue layout does not fit {language:?} categories: {e}");
        }
        let categories = dictionary.categories.clone();
        let markers = derive_markers(&self.layout.localize(&categories));
        self.selection = self.selection.relocalize(&self.categories, &categories, &markers);
        self.language = language;
        self.categories = categories;
        self.markers = markers;
    }
}
