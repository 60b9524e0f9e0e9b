//! Top bar with kiosk title and the accessibility and language controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar is the only writer for the persisted preferences. A language
//! change swaps the dictionary and relocalizes the directory in one step so
//! the map never renders labels from two languages.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::i18n::{Dictionary, Language};
use crate::state::directory::DirectoryState;
use crate::state::ui::UiState;

/// Speaker glyph for the audio toggle.
pub fn audio_icon(audio_on: bool) -> &'static str {
    if audio_on { "🔊" } else { "🔈" }
}

/// Switch every language-dependent container to `language`.
///
/// Leaves state untouched when no dictionary can be loaded.
pub fn switch_language(
    language: Language,
    ui: RwSignal<UiState>,
    directory: RwSignal<DirectoryState>,
    dictionary: RwSignal<Dictionary>,
) {
    if ui.with_untracked(|u| u.language) == language {
        return;
    }
    let Some(next) = Dictionary::for_language(language) else {
        leptos::logging::warn!("no dictionary available for {}", language.code());
        return;
    };
    directory.update(|d| d.set_language(language, &next));
    dictionary.set(next);
    ui.update(|u| u.language = language);
}

/// Kiosk header.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let dictionary = expect_context::<RwSignal<Dictionary>>();

    let title = move || dictionary.with(|d| d.nav_title.clone());
    let subtitle = move || dictionary.with(|d| d.nav_subtitle.clone());
    let language_label = move || dictionary.with(|d| d.language_label.clone());
    let large_text = move || ui.get().large_text;
    let audio_on = move || ui.get().audio_on;

    let on_language = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match Language::parse(&value) {
            Some(language) => switch_language(language, ui, directory, dictionary),
            None => leptos::logging::warn!("unknown language code {value:?}"),
        }
    };

    view! {
        <header class="nav-bar">
            <div class="nav-bar__inner">
                <div class="nav-bar__brand">
                    <div class="nav-bar__logo" aria-hidden="true">
                        "🗺️"
                    </div>
                    <div class="nav-bar__titles">
                        <div class="nav-bar__title">{title}</div>
                        <div class="nav-bar__subtitle">{subtitle}</div>
                    </div>
                </div>

                <nav class="nav-bar__controls">
                    <button
                        type="button"
                        class="nav-bar__button"
                        class:nav-bar__button--on=large_text
                        aria-label="Toggle larger text"
                        aria-pressed=move || large_text().to_string()
                        on:click=move |_| ui.update(|u| u.large_text = !u.large_text)
                    >
                        "T"
                    </button>

                    <button
                        type="button"
                        class="nav-bar__button nav-bar__button--audio"
                        class:nav-bar__button--active=audio_on
                        aria-label="Toggle audio feedback"
                        aria-pressed=move || audio_on().to_string()
                        on:click=move |_| ui.update(|u| u.audio_on = !u.audio_on)
                    >
                        {move || audio_icon(audio_on())}
                    </button>

                    <label class="nav-bar__language">
                        <span aria-hidden="true">"🌐"</span>
                        <span class="nav-bar__language-label">{language_label}</span>
                        <select
                            class="nav-bar__language-select"
                            aria-label=language_label
                            prop:value=move || ui.get().language.code()
                            on:change=on_language
                        >
                            {Language::ALL
                                .into_iter()
                                .map(|language| {
                                    view! {
                                        <option
                                            value=language.code()
                                            selected=move || ui.get().language == language
                                        >
                                            {language.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </nav>
            </div>
        </header>
    }
}
