//! Utility helpers shared across kiosk UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, audio, document
//! attributes) from components. Browser calls compile only with the `csr`
//! feature; native builds and tests get no-op fallbacks.

pub mod audio;
pub mod document;
pub mod preferences;
pub mod text_scale;
pub mod ui_persistence;
pub mod zoom;
