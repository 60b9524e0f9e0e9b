#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_is_none_without_browser_storage() {
    assert_eq!(load_string("audioOn"), None);
    assert_eq!(load_string("largeText"), None);
}

#[test]
fn save_is_noop_but_callable() {
    save_string("language", "FR");
    save_json("audioOn", &false);
    assert_eq!(load_string("language"), None);
}

#[test]
fn decode_json_reads_booleans() {
    assert_eq!(decode_json::<bool>("true"), Some(true));
    assert_eq!(decode_json::<bool>("false"), Some(false));
}

#[test]
fn decode_json_treats_garbage_as_absent() {
    assert_eq!(decode_json::<bool>("yes"), None);
    assert_eq!(decode_json::<bool>(""), None);
}
