use super::*;

fn english() -> Dictionary {
    Dictionary::load(Language::En).unwrap()
}

fn directory() -> DirectoryState {
    DirectoryState::load(Language::En, &english(), VenueLayout::builtin().unwrap(), "parking").unwrap()
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_selects_first_parking_marker() {
    let state = directory();
    assert_eq!(state.selected_category(), "Parking");
    assert_eq!(state.selected_marker_id(), Some("parking-1"));
    assert_eq!(state.selected_marker().map(|m| m.label.as_str()), Some("Parking - L1"));
}

#[test]
fn startup_derives_all_markers() {
    let state = directory();
    assert_eq!(state.markers.len(), 17);
    assert_eq!(state.categories.len(), 9);
}

#[test]
fn unknown_initial_key_falls_back_to_first_category() {
    let state = DirectoryState::new(Language::En, &english(), VenueLayout::builtin().unwrap(), "cinema");
    assert_eq!(state.selected_category(), "Parking");
}

#[test]
fn empty_layout_has_no_selection() {
    let state = DirectoryState::new(Language::En, &english(), VenueLayout::default(), "banks");
    assert_eq!(state.selected_category(), "Banks");
    assert_eq!(state.selected_marker_id(), None);
    assert!(state.visible_markers().is_empty());
}

#[test]
fn load_rejects_layout_with_unknown_category() {
    let layout = VenueLayout::from_json(r##"{"groups":[{"category":"cinema","color":"#000","items":[]}]}"##).unwrap();
    assert!(DirectoryState::load(Language::En, &english(), layout, "parking").is_err());
}

// =============================================================
// Category and marker selection
// =============================================================

#[test]
fn select_category_moves_selection_to_first_marker() {
    let mut state = directory();
    state.select_category("Banks");
    assert_eq!(state.selected_category(), "Banks");
    assert_eq!(state.selected_marker_id(), Some("banks-1"));
}

#[test]
fn visible_markers_follow_active_category() {
    let mut state = directory();
    assert_eq!(state.visible_markers().len(), 4);
    state.select_category("Shopping");
    let ids: Vec<&str> = state.visible_markers().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["shopping-1", "shopping-2", "shopping-3"]);
}

#[test]
fn select_marker_keeps_category_and_ignores_unknown_ids() {
    let mut state = directory();
    state.select_marker("parking-3");
    assert_eq!(state.selected_marker_id(), Some("parking-3"));
    state.select_marker("nope");
    assert_eq!(state.selected_marker_id(), Some("parking-3"));
    assert_eq!(state.selected_category(), "Parking");
}

#[test]
fn select_category_without_locations_clears_marker() {
    let mut state = directory();
    state.select_category("Nowhere");
    assert_eq!(state.selected_marker_id(), None);
    assert!(state.selected_marker().is_none());
}

// =============================================================
// Language switch
// =============================================================

#[test]
fn set_language_relabels_markers_and_keeps_selection() {
    let mut state = directory();
    state.select_category("Banks");
    state.select_marker("banks-2");

    state.set_language(Language::De, &Dictionary::load(Language::De).unwrap());
    assert_eq!(state.language, Language::De);
    assert_eq!(state.selected_category(), "Banken");
    assert_eq!(state.selected_marker_id(), Some("banks-2"));
    assert_eq!(state.selected_marker().map(|m| m.label.as_str()), Some("Banken - South"));
    assert!(state.markers.iter().all(|m| state.categories.iter().any(|c| c.label == m.category)));
}

#[test]
fn set_language_same_language_is_noop() {
    let mut state = directory();
    state.select_marker("parking-2");
    let before = state.selection.clone();
    state.set_language(Language::En, &english());
    assert_eq!(state.selection, before);
}

#[test]
fn set_language_round_trip_restores_labels() {
    let mut state = directory();
    state.set_language(Language::Zh, &Dictionary::load(Language::Zh).unwrap());
    assert_eq!(state.selected_category(), "停车");
    state.set_language(Language::En, &english());
    assert_eq!(state.selected_category(), "Parking");
    assert_eq!(state.selected_marker_id(), Some("parking-1"));
}
