//! Click feedback for button-like elements.
//!
//! A single preloaded `<audio>` element is rewound and replayed on every
//! activation. Activation is decided from the event target: the nearest
//! `button` or `[role="button"]` ancestor, unless it is disabled. Browsers
//! may block playback before the first user gesture; that is logged and
//! otherwise ignored.
//!
//! The listeners are attached to `window` in the bubble phase, so a handler
//! that calls `stopPropagation` also silences the click. No component in
//! the kiosk stops propagation.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use crate::config::ClickSoundConfig;

/// Selector for elements that produce click feedback.
pub const BUTTON_LIKE_SELECTOR: &str = "button, [role=\"button\"]";

/// Keys that activate a focused button-like element.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// True when a button-like element with these attributes accepts activation.
pub fn is_enabled(disabled: bool, aria_disabled: Option<&str>) -> bool {
    !disabled && aria_disabled != Some("true")
}

/// True when an activation should be followed by a click sound.
///
/// `target` is `None` when the event did not land on a button-like element,
/// otherwise whether that element is enabled.
pub fn should_play_click(audio_on: bool, target: Option<bool>) -> bool {
    audio_on && target == Some(true)
}

/// Volume clamped to the range accepted by media elements.
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

/// Resolve the button-like element an event landed on and report whether
/// it is enabled.
#[cfg(feature = "csr")]
pub fn button_target(event: &web_sys::Event) -> Option<bool> {
    use wasm_bindgen::JsCast;
    let element = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = element.closest(BUTTON_LIKE_SELECTOR).ok().flatten()?;
    let aria_disabled = button.get_attribute("aria-disabled");
    Some(is_enabled(button.has_attribute("disabled"), aria_disabled.as_deref()))
}

/// Preloaded click sound.
#[derive(Clone)]
pub struct ClickSound {
    #[cfg(feature = "csr")]
    audio: Option<web_sys::HtmlAudioElement>,
}

impl ClickSound {
    pub fn new(config: &ClickSoundConfig) -> Self {
        #[cfg(feature = "csr")]
        {
            let audio = match web_sys::HtmlAudioElement::new_with_src(&config.src) {
                Ok(audio) => {
                    audio.set_preload("auto");
                    audio.set_volume(clamp_volume(config.volume));
                    Some(audio)
                }
                Err(e) => {
                    log::warn!("click sound unavailable ({}): {e:?}", config.src);
                    None
                }
            };
            Self { audio }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = config;
            Self {}
        }
    }

    /// Rewind and play from the start.
    ///
    /// A blocked autoplay rejects the returned promise; the rejection is
    /// awaited on a local task and logged.
    pub fn play(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(audio) = self.audio.as_ref() else {
                return;
            };
            if let Err(e) = audio.pause() {
                log::debug!("click sound pause failed: {e:?}");
            }
            audio.set_current_time(0.0);
            match audio.play() {
                Ok(promise) => leptos::task::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::debug!("click sound blocked: {e:?}");
                    }
                }),
                Err(e) => log::debug!("click sound failed to start: {e:?}"),
            }
        }
    }
}
