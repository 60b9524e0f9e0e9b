//! Single category button for the home grid.

use leptos::prelude::*;

/// A tappable category tile.
#[component]
pub fn CategoryCard(
    label: String,
    icon: String,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let aria_label = label.clone();
    let on_click = {
        let label = label.clone();
        move |_| on_select.run(label.clone())
    };

    view! {
        <button
            type="button"
            class="category-card"
            class:category-card--selected=move || selected.get()
            aria-label=aria_label
            aria-pressed=move || selected.get().to_string()
            on:click=on_click
        >
            <span class="category-card__icon" aria-hidden="true">
                {icon}
            </span>
            <span class="category-card__label">{label}</span>
        </button>
    }
}
