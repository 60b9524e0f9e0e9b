//! Venue data model and marker selection for the directory kiosk.
//!
//! This crate owns the language-independent shape of the centre: categories,
//! the location table behind the floor map, and the rules that keep exactly
//! zero or one marker selected. It has no UI dependencies so the kiosk and its
//! tests share one pure implementation.
//!
//! FLOW
//! ====
//! `VenueLayout` (authored JSON) is validated against the active category
//! list, localized into `CategoryLocations`, flattened by `derive_markers`,
//! and then driven by `Selection` transitions.

pub mod category;
pub mod layout;
pub mod marker;
pub mod selection;

pub use category::Category;
pub use layout::{VenueError, VenueLayout, parse_percent};
pub use marker::{CategoryLocations, LocationItem, MapMarker, derive_markers, ensure_selection, filter_by_category};
pub use selection::{Selection, SelectionAction, reduce, select_category};
