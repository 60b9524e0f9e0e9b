//! Explore / Map / Offers tab bar for narrow screens.

#[cfg(test)]
#[path = "mobile_tab_bar_test.rs"]
mod mobile_tab_bar_test;

use leptos::prelude::*;

use crate::i18n::Dictionary;
use crate::i18n::dictionary::TabCopy;
use crate::state::ui::{MobileTab, UiState};

/// Localized label for `tab`.
pub fn tab_label(tab: MobileTab, copy: &TabCopy) -> &str {
    match tab {
        MobileTab::Explore => &copy.explore,
        MobileTab::Map => &copy.map,
        MobileTab::Offers => &copy.offers,
    }
}

/// Tab strip shown above the content on small screens.
#[component]
pub fn MobileTabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dictionary = expect_context::<RwSignal<Dictionary>>();

    view! {
        <div class="mobile-tab-bar" role="tablist">
            {MobileTab::ALL
                .into_iter()
                .map(|tab| {
                    let active = move || ui.get().mobile_tab == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="mobile-tab-bar__tab"
                            class:mobile-tab-bar__tab--active=active
                            aria-selected=move || active().to_string()
                            on:click=move |_| ui.update(|u| u.mobile_tab = tab)
                        >
                            {move || dictionary.with(|d| tab_label(tab, &d.tabs).to_owned())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
