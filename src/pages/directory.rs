//! Directory page: tabbed layout on narrow screens, three columns otherwise.
//!
//! Both layouts are always rendered. The crate ships no CSS; the host page
//! is expected to hide one of them at its `lg` breakpoint using the
//! `directory-page__*` classes. They share every state container, so
//! switching layout keeps the selection, the floor and the zoom.

use leptos::prelude::*;

use crate::components::category_grid::CategoryGrid;
use crate::components::map_panel::MapPanel;
use crate::components::mobile_tab_bar::MobileTabBar;
use crate::components::nav_bar::NavBar;
use crate::components::promo_panel::PromoPanel;
use crate::components::welcome_panel::WelcomePanel;
use crate::state::ui::{MobileTab, UiState};

/// Directory page.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tab = move || ui.get().mobile_tab;

    view! {
        <div class="directory-page">
            <NavBar/>

            <div class="directory-page__mobile-tabs">
                <MobileTabBar/>
            </div>

            <main class="directory-page__main">
                <div class="directory-page__frame">
                    <div class="directory-page__mobile">
                        <Show when=move || tab() == MobileTab::Explore>
                            <div class="directory-page__stack">
                                <WelcomePanel/>
                                <div class="directory-page__grid-slot">
                                    <CategoryGrid show_map_on_select=true/>
                                </div>
                            </div>
                        </Show>
                        <Show when=move || tab() == MobileTab::Map>
                            <div class="directory-page__map-slot">
                                <MapPanel/>
                            </div>
                        </Show>
                        <Show when=move || tab() == MobileTab::Offers>
                            <div class="directory-page__map-slot">
                                <PromoPanel/>
                            </div>
                        </Show>
                    </div>

                    <div class="directory-page__desktop">
                        <section class="directory-page__column directory-page__column--promo">
                            <PromoPanel/>
                        </section>
                        <section class="directory-page__column directory-page__column--explore">
                            <WelcomePanel/>
                            <div class="directory-page__grid-fill">
                                <CategoryGrid/>
                            </div>
                        </section>
                        <section class="directory-page__column directory-page__column--map">
                            <MapPanel/>
                        </section>
                    </div>
                </div>
            </main>
        </div>
    }
}
