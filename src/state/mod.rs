//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, `directory` categories and
//! markers, `map_view` floor and zoom) so each component depends on a small
//! model. The root component owns one `RwSignal` per container and provides
//! it through context; nothing is held in globals.

pub mod directory;
pub mod map_view;
pub mod ui;
