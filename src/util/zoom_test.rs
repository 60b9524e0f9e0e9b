use super::*;

fn cfg() -> ZoomConfig {
    ZoomConfig::default()
}

#[test]
fn zoom_in_rounds_to_two_decimals() {
    assert_eq!(zoom_in(1.0, &cfg()), 1.1);
    assert_eq!(zoom_in(1.1, &cfg()), 1.2);
    assert_eq!(zoom_in(0.7, &cfg()), 0.8);
}

#[test]
fn zoom_in_clamps_to_max() {
    assert_eq!(zoom_in(1.6, &cfg()), 1.6);
    assert_eq!(zoom_in(1.55, &cfg()), 1.6);
}

#[test]
fn zoom_out_clamps_to_min() {
    assert_eq!(zoom_out(0.6, &cfg()), 0.6);
    assert_eq!(zoom_out(0.65, &cfg()), 0.6);
    assert_eq!(zoom_out(1.0, &cfg()), 0.9);
}

#[test]
fn repeated_steps_return_to_start() {
    let mut z = 1.0;
    for _ in 0..3 {
        z = zoom_in(z, &cfg());
    }
    for _ in 0..3 {
        z = zoom_out(z, &cfg());
    }
    assert_eq!(z, 1.0);
}

#[test]
fn percent_rounds_to_whole_number() {
    assert_eq!(percent(1.0), 100);
    assert_eq!(percent(1.1), 110);
    assert_eq!(percent(0.6), 60);
    assert_eq!(percent(1.234), 123);
}
