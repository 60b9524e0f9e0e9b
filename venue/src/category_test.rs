use super::*;

fn english() -> Vec<Category> {
    vec![Category::new("parking", "Parking", "P"), Category::new("banks", "Banks", "B")]
}

fn spanish() -> Vec<Category> {
    vec![Category::new("parking", "Estacionamiento", "P"), Category::new("banks", "Bancos", "B")]
}

#[test]
fn by_key_finds_category() {
    let cats = english();
    assert_eq!(by_key(&cats, "banks").map(|c| c.label.as_str()), Some("Banks"));
    assert!(by_key(&cats, "food").is_none());
}

#[test]
fn by_label_is_exact_match() {
    let cats = english();
    assert!(by_label(&cats, "Parking").is_some());
    assert!(by_label(&cats, "parking").is_none());
}

#[test]
fn translate_label_follows_key() {
    assert_eq!(translate_label(&english(), &spanish(), "Banks"), Some("Bancos"));
    assert_eq!(translate_label(&spanish(), &english(), "Estacionamiento"), Some("Parking"));
}

#[test]
fn translate_label_unknown_label_is_none() {
    assert_eq!(translate_label(&english(), &spanish(), "Search"), None);
}

#[test]
fn translate_label_missing_target_key_is_none() {
    let partial = vec![Category::new("parking", "Estacionamiento", "P")];
    assert_eq!(translate_label(&english(), &partial, "Banks"), None);
}
