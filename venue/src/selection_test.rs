use super::*;

fn pin(id: &str, category: &str) -> MapMarker {
    MapMarker {
        id: id.to_owned(),
        label: id.to_owned(),
        color: "#000".to_owned(),
        x: "10%".to_owned(),
        y: "10%".to_owned(),
        category: category.to_owned(),
    }
}

fn markers() -> Vec<MapMarker> {
    vec![pin("p1", "Parking"), pin("p2", "Parking"), pin("b1", "Banks")]
}

// =============================================================
// select_category
// =============================================================

#[test]
fn select_category_picks_first_marker_of_category() {
    assert_eq!(select_category(&markers(), "Banks"), ("Banks".to_owned(), Some("b1".to_owned())));
}

#[test]
fn select_category_without_markers_clears_selection() {
    let m = markers();
    let state = Selection::initial(&m, "Parking").select_category(&m, "Banks");
    assert_eq!(state.marker_id.as_deref(), Some("b1"));

    let state = state.select_category(&m, "Search");
    assert_eq!(state.category, "Search");
    assert_eq!(state.marker_id, None);
}

#[test]
fn select_category_overwrites_prior_selection() {
    let m = markers();
    let state = Selection { category: "Parking".to_owned(), marker_id: Some("p2".to_owned()) };
    let next = state.select_category(&m, "Parking");
    assert_eq!(next.marker_id.as_deref(), Some("p1"));
}

#[test]
fn select_category_result_is_none_or_member_of_filtered() {
    let m = markers();
    for label in ["Parking", "Banks", "Search", ""] {
        let (_, id) = select_category(&m, label);
        let filtered = crate::marker::filter_by_category(&m, label);
        match id {
            None => assert!(filtered.is_empty()),
            Some(id) => assert!(filtered.iter().any(|f| f.id == id)),
        }
    }
}

// =============================================================
// initial / ensure
// =============================================================

#[test]
fn initial_selects_first_marker_of_initial_category() {
    let state = Selection::initial(&markers(), "Parking");
    assert_eq!(state.category, "Parking");
    assert_eq!(state.marker_id.as_deref(), Some("p1"));
}

#[test]
fn initial_with_empty_category_has_no_marker() {
    let state = Selection::initial(&markers(), "Help");
    assert_eq!(state.marker_id, None);
}

#[test]
fn ensure_does_not_replace_existing_selection() {
    let m = markers();
    let state = Selection { category: "Parking".to_owned(), marker_id: Some("b1".to_owned()) };
    assert_eq!(state.ensure(&m), state);
}

#[test]
fn ensure_is_idempotent() {
    let m = markers();
    let state = Selection { category: "Banks".to_owned(), marker_id: None };
    let once = state.ensure(&m);
    assert_eq!(once.ensure(&m), once);
}

// =============================================================
// select_marker
// =============================================================

#[test]
fn select_marker_keeps_category() {
    let m = markers();
    let state = Selection::initial(&m, "Parking").select_marker(&m, "p2");
    assert_eq!(state.category, "Parking");
    assert!(state.is_selected("p2"));
    assert!(!state.is_selected("p1"));
}

#[test]
fn select_marker_unknown_id_is_ignored() {
    let m = markers();
    let state = Selection::initial(&m, "Parking");
    assert_eq!(state.select_marker(&m, "nope"), state);
}

// =============================================================
// reduce
// =============================================================

#[test]
fn reduce_walks_example_sequence() {
    let m = markers();
    let state = Selection::initial(&m, "Parking");
    assert_eq!(state.marker_id.as_deref(), Some("p1"));

    let state = reduce(&state, &SelectionAction::SelectCategory("Banks".to_owned()), &m);
    assert_eq!(state.category, "Banks");
    assert_eq!(state.marker_id.as_deref(), Some("b1"));

    let state = reduce(&state, &SelectionAction::SelectCategory("Search".to_owned()), &m);
    assert_eq!(state.category, "Search");
    assert_eq!(state.marker_id, None);
}

#[test]
fn reduce_refresh_fills_empty_selection() {
    let m = markers();
    let state = Selection { category: "Banks".to_owned(), marker_id: None };
    let next = reduce(&state, &SelectionAction::Refresh, &m);
    assert_eq!(next.marker_id.as_deref(), Some("b1"));
}

#[test]
fn reduce_select_marker_then_refresh_keeps_marker() {
    let m = markers();
    let state = Selection::initial(&m, "Parking");
    let state = reduce(&state, &SelectionAction::SelectMarker("p2".to_owned()), &m);
    let state = reduce(&state, &SelectionAction::Refresh, &m);
    assert_eq!(state.marker_id.as_deref(), Some("p2"));
}

// =============================================================
// relocalize
// =============================================================

fn english() -> Vec<Category> {
    vec![Category::new("parking", "Parking", "P"), Category::new("banks", "Banks", "B")]
}

fn german() -> Vec<Category> {
    vec![Category::new("parking", "Parken", "P"), Category::new("banks", "Banken", "B")]
}

fn german_markers() -> Vec<MapMarker> {
    vec![pin("p1", "Parken"), pin("p2", "Parken"), pin("b1", "Banken")]
}

#[test]
fn relocalize_translates_category_and_keeps_marker() {
    let state = Selection { category: "Banks".to_owned(), marker_id: Some("b1".to_owned()) };
    let next = state.relocalize(&english(), &german(), &german_markers());
    assert_eq!(next.category, "Banken");
    assert_eq!(next.marker_id.as_deref(), Some("b1"));
}

#[test]
fn relocalize_refills_when_marker_disappears() {
    let state = Selection { category: "Parking".to_owned(), marker_id: Some("gone".to_owned()) };
    let next = state.relocalize(&english(), &german(), &german_markers());
    assert_eq!(next.category, "Parken");
    assert_eq!(next.marker_id.as_deref(), Some("p1"));
}

#[test]
fn relocalize_unknown_label_is_kept() {
    let state = Selection { category: "Lost".to_owned(), marker_id: None };
    let next = state.relocalize(&english(), &german(), &german_markers());
    assert_eq!(next.category, "Lost");
    assert_eq!(next.marker_id, None);
}
