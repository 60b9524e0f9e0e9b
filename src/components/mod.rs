//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the kiosk chrome, category grid, floor map, and offers
//! while reading and writing shared state from Leptos context providers.

pub mod category_card;
pub mod category_grid;
pub mod map_panel;
pub mod mobile_tab_bar;
pub mod nav_bar;
pub mod promo_panel;
pub mod welcome_panel;
