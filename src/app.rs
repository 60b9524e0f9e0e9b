//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds every state container once at startup (config, stored
//! preferences, dictionary, venue layout), provides them as `RwSignal`
//! contexts, and wires the document-level effects: persisted preferences,
//! root font size, `lang`/`dir` attributes, and click feedback.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use venue::VenueLayout;

use crate::config::KioskConfig;
use crate::i18n::{Dictionary, Language};
use crate::pages::directory::DirectoryPage;
use crate::state::directory::DirectoryState;
use crate::state::map_view::MapViewState;
use crate::state::ui::UiState;
use crate::util::document::{set_language_attrs, set_root_font_size};
use crate::util::preferences::Preferences;
use crate::util::text_scale::{detect_screen_class, root_font_size_px};

/// Directory state for `language`, degrading to an empty map when the
/// shipped layout is unusable.
pub fn build_directory(language: Language, dictionary: &Dictionary, config: &KioskConfig) -> DirectoryState {
    let loaded =
        VenueLayout::builtin().and_then(|layout| DirectoryState::load(language, dictionary, layout, &config.initial_category));
    match loaded {
        Ok(directory) => directory,
        Err(e) => {
            leptos::logging::warn!("venue layout rejected: {e}; starting with an empty map");
            DirectoryState::new(language, dictionary, VenueLayout::default(), &config.initial_category)
        }
    }
}

/// Dictionary for the stored language, and the language it actually covers.
pub fn resolve_dictionary(preferred: Language) -> Option<(Language, Dictionary)> {
    if let Ok(dictionary) = Dictionary::load(preferred) {
        return Some((preferred, dictionary));
    }
    Dictionary::for_language(preferred).map(|dictionary| (Language::En, dictionary))
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = KioskConfig::builtin();
    let prefs = Preferences::load(config.default_language);
    let Some((language, dictionary)) = resolve_dictionary(prefs.language) else {
        return view! { <p class="kiosk-error">"Directory unavailable"</p> }.into_any();
    };

    let ui_state = UiState::from_preferences(&Preferences { language, ..prefs });
    let directory = RwSignal::new(build_directory(language, &dictionary, &config));
    let map_view = RwSignal::new(MapViewState::new(&config));
    let ui = RwSignal::new(ui_state);
    let dictionary = RwSignal::new(dictionary);

    provide_context(ui);
    provide_context(directory);
    provide_context(map_view);
    provide_context(dictionary);

    Effect::new(move || ui.with(UiState::preferences).save());
    Effect::new(move || set_language_attrs(ui.with(|u| u.language)));

    let screen = RwSignal::new(detect_screen_class());
    Effect::new(move || {
        let large_text = ui.with(|u| u.large_text);
        set_root_font_size(root_font_size_px(screen.get(), large_text));
    });

    install_browser_listeners(&config, ui, screen);

    view! {
        <Title text=move || dictionary.with(|d| d.nav_title.clone())/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DirectoryPage/>
            </Routes>
        </Router>
    }
    .into_any()
}

/// Window listeners for click feedback and screen-size changes.
///
/// Click and keydown are observed on `window` in the bubble phase, after
/// component handlers have run. An element whose handler stops propagation
/// therefore plays no click sound.
#[cfg(feature = "csr")]
fn install_browser_listeners(
    config: &KioskConfig,
    ui: RwSignal<UiState>,
    screen: RwSignal<crate::util::text_scale::ScreenClass>,
) {
    use crate::util::audio::{ClickSound, button_target, is_activation_key, should_play_click};

    let sound = StoredValue::new_local(ClickSound::new(&config.click_sound));

    let on_click = window_event_listener(leptos::ev::click, move |ev| {
        let audio_on = ui.with_untracked(|u| u.audio_on);
        if should_play_click(audio_on, button_target(&ev)) {
            sound.with_value(ClickSound::play);
        }
    });
    let on_keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if !is_activation_key(&ev.key()) {
            return;
        }
        let audio_on = ui.with_untracked(|u| u.audio_on);
        if should_play_click(audio_on, button_target(&ev)) {
            sound.with_value(ClickSound::play);
        }
    });
    let on_resize = window_event_listener(leptos::ev::resize, move |_| {
        let next = detect_screen_class();
        if screen.get_untracked() != next {
            screen.set(next);
        }
    });

    on_cleanup(move || {
        on_click.remove();
        on_keydown.remove();
        on_resize.remove();
    });
}

#[cfg(not(feature = "csr"))]
fn install_browser_listeners(
    config: &KioskConfig,
    ui: RwSignal<UiState>,
    screen: RwSignal<crate::util::text_scale::ScreenClass>,
) {
    let _ = (config, ui, screen);
}
