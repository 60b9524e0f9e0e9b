use super::*;

#[test]
fn audio_icon_reflects_toggle() {
    assert_eq!(audio_icon(true), "🔊");
    assert_eq!(audio_icon(false), "🔈");
}

#[test]
fn every_language_is_offered_once() {
    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    let mut unique = codes.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), codes.len());
    assert_eq!(codes.first(), Some(&"EN"));
}
