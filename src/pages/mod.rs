//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The kiosk has a single directory page; it arranges components for the
//! current viewport and leaves rendering details to `components`.

pub mod directory;
