use super::*;

fn offer(title: &str) -> Offer {
    Offer { title: title.to_owned(), subtitle: format!("{title} subtitle") }
}

#[test]
fn active_offer_uses_index() {
    let offers = vec![offer("A"), offer("B"), offer("C")];
    assert_eq!(active_offer(&offers, 1).map(|o| o.title.as_str()), Some("B"));
}

#[test]
fn active_offer_out_of_range_falls_back_to_first() {
    let offers = vec![offer("A"), offer("B")];
    assert_eq!(active_offer(&offers, 7).map(|o| o.title.as_str()), Some("A"));
}

#[test]
fn active_offer_empty_is_none() {
    assert!(active_offer(&[], 0).is_none());
}

#[test]
fn bullets_cycle_pink_orange_then_blue() {
    assert_eq!(promotion_bullet_class(0), "promo-panel__bullet--pink");
    assert_eq!(promotion_bullet_class(1), "promo-panel__bullet--orange");
    assert_eq!(promotion_bullet_class(2), "promo-panel__bullet--blue");
    assert_eq!(promotion_bullet_class(9), "promo-panel__bullet--blue");
}
