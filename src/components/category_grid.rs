//! Grid of localized category tiles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tapping a tile is the category-selection entry point: it dispatches to
//! the directory state, which re-applies the default marker selection. In
//! the tabbed layout the grid also jumps to the map.

use leptos::prelude::*;

use crate::components::category_card::CategoryCard;
use crate::state::directory::DirectoryState;
use crate::state::ui::{MobileTab, UiState};

/// Category grid. Set `show_map_on_select` in the tabbed layout.
#[component]
pub fn CategoryGrid(#[prop(optional)] show_map_on_select: bool) -> impl IntoView {
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_select = Callback::new(move |label: String| {
        directory.update(|d| d.select_category(&label));
        if show_map_on_select {
            ui.update(|u| u.mobile_tab = MobileTab::Map);
        }
    });

    // Selection changes leave the tile list untouched, so tiles are not rebuilt.
    let categories = Memo::new(move |_| directory.with(|d| d.categories.clone()));

    view! {
        <div class="category-grid">
            <div class="category-grid__scroll">
                <div class="category-grid__tiles">
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                let label = category.label.clone();
                                let selected = Signal::derive(move || {
                                    directory.with(|d| d.selected_category() == label)
                                });
                                view! {
                                    <CategoryCard
                                        label=category.label
                                        icon=category.icon
                                        selected=selected
                                        on_select=on_select
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
