//! Document-level attributes driven by kiosk preferences.
//!
//! The root font size carries the text scale and the `<html>` `lang`/`dir`
//! attributes follow the active language. Native builds no-op.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::i18n::Language;

/// Value for the `dir` attribute of `<html>`.
pub fn text_direction(language: Language) -> &'static str {
    if language.is_rtl() { "rtl" } else { "ltr" }
}

/// CSS value for the root font size.
pub fn font_size_value(px: u32) -> String {
    format!("{px}px")
}

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Set `font-size` on the `<html>` element.
pub fn set_root_font_size(px: u32) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = root_element() else {
            return;
        };
        if root.style().set_property("font-size", &font_size_value(px)).is_err() {
            log::warn!("failed to set root font size to {px}px");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = px;
    }
}

/// Set the `lang` and `dir` attributes on the `<html>` element.
pub fn set_language_attrs(language: Language) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = root_element() else {
            return;
        };
        let lang = root.set_attribute("lang", language.html_lang());
        let dir = root.set_attribute("dir", text_direction(language));
        if lang.is_err() || dir.is_err() {
            log::warn!("failed to set document language attributes for {}", language.code());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = language;
    }
}
