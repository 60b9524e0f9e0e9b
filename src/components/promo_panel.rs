//! Offer carousel and promotions list.

#[cfg(test)]
#[path = "promo_panel_test.rs"]
mod promo_panel_test;

use leptos::prelude::*;

use crate::i18n::Dictionary;
use crate::i18n::dictionary::Offer;

/// Offer at `index`, or the first offer when `index` is past the end.
pub fn active_offer(offers: &[Offer], index: usize) -> Option<&Offer> {
    offers.get(index).or_else(|| offers.first())
}

/// Bullet color modifier for the promotion at `index`.
pub fn promotion_bullet_class(index: usize) -> &'static str {
    match index {
        0 => "promo-panel__bullet--pink",
        1 => "promo-panel__bullet--orange",
        _ => "promo-panel__bullet--blue",
    }
}

/// Promotional offers with dot navigation.
#[component]
pub fn PromoPanel() -> impl IntoView {
    let dictionary = expect_context::<RwSignal<Dictionary>>();
    let active_index = RwSignal::new(0_usize);

    let active = move || dictionary.with(|d| active_offer(&d.promo_offers, active_index.get()).cloned());
    let offer_count = move || dictionary.with(|d| d.promo_offers.len());

    view! {
        <div class="promo-panel">
            <div class="promo-panel__header">
                <span aria-hidden="true">"✨"</span>
                <span>{move || dictionary.with(|d| d.promo_header.clone())}</span>
            </div>

            <div class="promo-panel__banner">
                <h2 class="promo-panel__offer-title">{move || active().map(|o| o.title)}</h2>
                <p class="promo-panel__offer-subtitle">{move || active().map(|o| o.subtitle)}</p>

                <div class="promo-panel__dots">
                    {move || {
                        (0..offer_count())
                            .map(|i| {
                                view! {
                                    <button
                                        type="button"
                                        class="promo-panel__dot"
                                        class:promo-panel__dot--active=move || active_index.get() == i
                                        aria-label=format!("Offer {}", i + 1)
                                        on:click=move |_| active_index.set(i)
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="promo-panel__promotions">
                <h3 class="promo-panel__promotions-title">
                    {move || dictionary.with(|d| d.promotions_title.clone())}
                </h3>
                <ul class="promo-panel__list">
                    {move || {
                        dictionary
                            .with(|d| d.promotions.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <li class="promo-panel__item">
                                        <span class=format!("promo-panel__bullet {}", promotion_bullet_class(i))></span>
                                        <span>{item}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}
