use super::*;

#[test]
fn arabic_is_right_to_left() {
    assert_eq!(text_direction(Language::Ar), "rtl");
}

#[test]
fn other_languages_are_left_to_right() {
    for language in Language::ALL.into_iter().filter(|l| *l != Language::Ar) {
        assert_eq!(text_direction(language), "ltr", "{language:?}");
    }
}

#[test]
fn font_size_value_is_pixels() {
    assert_eq!(font_size_value(18), "18px");
}

#[cfg(not(feature = "csr"))]
#[test]
fn setters_are_noops_natively() {
    set_root_font_size(20);
    set_language_attrs(Language::Ar);
}
