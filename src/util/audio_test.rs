use super::*;

// =============================================================
// Activation
// =============================================================

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Spacebar"));
}

#[test]
fn other_keys_do_not_activate() {
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("a"));
    assert!(!is_activation_key("Escape"));
}

#[test]
fn disabled_attributes_block_activation() {
    assert!(is_enabled(false, None));
    assert!(is_enabled(false, Some("false")));
    assert!(!is_enabled(true, None));
    assert!(!is_enabled(false, Some("true")));
}

// =============================================================
// Playback decision
// =============================================================

#[test]
fn plays_only_for_enabled_buttons_with_audio_on() {
    assert!(should_play_click(true, Some(true)));
    assert!(!should_play_click(false, Some(true)));
    assert!(!should_play_click(true, Some(false)));
    assert!(!should_play_click(true, None));
}

#[test]
fn volume_is_clamped() {
    assert!((clamp_volume(0.35) - 0.35).abs() < f64::EPSILON);
    assert!(clamp_volume(2.0) <= 1.0);
    assert!(clamp_volume(-1.0) >= 0.0);
    assert!(clamp_volume(f64::NAN).abs() < f64::EPSILON);
}

#[cfg(not(feature = "csr"))]
#[test]
fn click_sound_plays_silently_natively() {
    let sound = ClickSound::new(&ClickSoundConfig { src: "/sounds/click.mp3".to_owned(), volume: 0.35 });
    sound.play();
    sound.clone().play();
}
