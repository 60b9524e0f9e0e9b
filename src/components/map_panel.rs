//! Floor map panel: floor tabs, zoomable plan, markers, legend, location list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every marker of every category is drawn; the selected one is emphasized.
//! The location list shows only markers of the active category. Marker taps
//! and list taps both go through `DirectoryState::select_marker`.
//!
//! Positions are CSS percentages relative to the plan, so the layout data
//! stays resolution independent.

#[cfg(test)]
#[path = "map_panel_test.rs"]
mod map_panel_test;

use leptos::prelude::*;
use venue::MapMarker;

use crate::i18n::Dictionary;
use crate::i18n::dictionary::MapCopy;
use crate::state::directory::DirectoryState;
use crate::state::map_view::{FloorLevel, MapViewState};
use crate::state::ui::UiState;

/// Named areas painted under the markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Parking,
    Banks,
    Shopping,
    Food,
}

impl Zone {
    pub const ALL: [Self; 4] = [Self::Parking, Self::Banks, Self::Shopping, Self::Food];

    pub fn label(self, copy: &MapCopy) -> &str {
        match self {
            Self::Parking => &copy.zone_parking,
            Self::Banks => &copy.zone_banks,
            Self::Shopping => &copy.zone_shopping,
            Self::Food => &copy.zone_food,
        }
    }

    /// Placement on the plan.
    pub fn style(self) -> &'static str {
        match self {
            Self::Parking => "left: 7%; top: 8%; width: 36%; height: 32%;",
            Self::Banks => "right: 7%; top: 10%; width: 34%; height: 28%;",
            Self::Shopping => "left: 14%; bottom: 12%; width: 48%; height: 30%;",
            Self::Food => "right: 10%; bottom: 12%; width: 28%; height: 30%;",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Parking => "map-zone map-zone--parking",
            Self::Banks => "map-zone map-zone--banks",
            Self::Shopping => "map-zone map-zone--shopping",
            Self::Food => "map-zone map-zone--food",
        }
    }
}

/// Fire exits drawn on every floor.
pub const FIRE_EXIT_STYLES: [&str; 2] = ["right: 18%; bottom: 22%;", "left: 16%; bottom: 26%;"];
pub const YOU_ARE_HERE_STYLE: &str = "left: 48%; top: 46%;";
pub const YOU_ARE_HERE_LABEL_STYLE: &str = "left: 53%; top: 50%;";

/// Inline position for a marker pin.
pub fn marker_style(marker: &MapMarker) -> String {
    format!("left: {}; top: {};", marker.x, marker.y)
}

/// Inline ring color for a marker pin.
pub fn marker_dot_style(marker: &MapMarker) -> String {
    format!("border-color: {};", marker.color)
}

/// Plan transform for `zoom`.
pub fn zoom_transform(zoom: f64) -> String {
    format!("transform: scale({zoom});")
}

/// Header caption, e.g. "Floor 2".
pub fn floor_caption(floor_label: &str, level: FloorLevel) -> String {
    format!("{floor_label} {}", level.number())
}

/// `(id, label)` rows of the location list for the active category.
pub fn location_entries(directory: &DirectoryState) -> Vec<(String, String)> {
    directory.visible_markers().into_iter().map(|m| (m.id.clone(), m.label.clone())).collect()
}

/// Floor map with zoom controls.
#[component]
pub fn MapPanel() -> impl IntoView {
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let map_view = expect_context::<RwSignal<MapViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let dictionary = expect_context::<RwSignal<Dictionary>>();

    let copy = move |pick: fn(&MapCopy) -> &String| move || dictionary.with(|d| pick(&d.map).clone());
    let level = move || map_view.get().level;
    let show_legend = move || map_view.get().show_legend;
    let show_list = move || ui.get().show_location_list;

    let on_select_marker = Callback::new(move |id: String| {
        directory.update(|d| d.select_marker(&id));
    });

    // Marker taps only move the highlight; the pins and rows stay mounted.
    let markers = Memo::new(move |_| directory.with(|d| d.markers.clone()));
    let locations = Memo::new(move |_| directory.with(location_entries));

    let floor_tab = move |floor: FloorLevel, label: fn(&MapCopy) -> &String| {
        view! {
            <button
                type="button"
                class="map-panel__floor-tab"
                class:map-panel__floor-tab--active=move || level() == floor
                aria-pressed=move || (level() == floor).to_string()
                on:click=move |_| map_view.update(|m| m.level = floor)
            >
                {copy(label)}
            </button>
        }
    };

    view! {
        <div class="map-panel">
            <div class="map-panel__header">
                <div class="map-panel__badge" aria-hidden="true">
                    "MAP"
                </div>
                <div>
                    <div class="map-panel__title">{copy(|m| &m.title)}</div>
                    <div class="map-panel__floor">
                        {move || dictionary.with(|d| floor_caption(&d.map.floor_label, level()))}
                    </div>
                </div>
            </div>

            <div class="map-panel__floor-tabs">
                {floor_tab(FloorLevel::One, |m| &m.level1)}
                {floor_tab(FloorLevel::Two, |m| &m.level2)}
            </div>

            <div class="map-panel__content">
                <div class="map-panel__stage">
                    <div class="map-panel__plan">
                        <div class="map-panel__zoom" style=move || zoom_transform(map_view.get().zoom)>
                            <div class="map-panel__grid"></div>

                            {Zone::ALL
                                .into_iter()
                                .map(|zone| {
                                    view! {
                                        <div class=zone.class() style=zone.style()>
                                            {move || dictionary.with(|d| zone.label(&d.map).to_owned())}
                                        </div>
                                    }
                                })
                                .collect_view()}

                            {move || {
                                markers
                                    .get()
                                    .into_iter()
                                    .map(|marker| {
                                        let id = marker.id.clone();
                                        let selected = move || directory.with(|d| d.selection.is_selected(&id));
                                        let click_id = marker.id.clone();
                                        view! {
                                            <div
                                                class="map-marker"
                                                class:map-marker--selected=selected
                                                style=marker_style(&marker)
                                                on:click=move |_| on_select_marker.run(click_id.clone())
                                            >
                                                <span class="map-marker__dot" style=marker_dot_style(&marker)></span>
                                                <span class="map-marker__label">{marker.label.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}

                            <div class="map-static map-static--you-are-here" style=YOU_ARE_HERE_STYLE>
                                <span class="map-static__core"></span>
                            </div>
                            <div class="map-static__label" style=YOU_ARE_HERE_LABEL_STYLE>
                                {copy(|m| &m.legend_you_are_here)}
                            </div>
                            {FIRE_EXIT_STYLES
                                .into_iter()
                                .map(|style| view! { <div class="map-static map-static--fire-exit" style=style></div> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="map-panel__placeholder">{copy(|m| &m.placeholder)}</div>

                    <div class="map-panel__legend">
                        <button
                            type="button"
                            class="map-panel__chip"
                            aria-label="Toggle map legend"
                            aria-pressed=move || show_legend().to_string()
                            on:click=move |_| map_view.update(|m| m.show_legend = !m.show_legend)
                        >
                            <span class="map-panel__chip-dot"></span>
                            {copy(|m| &m.legend_toggle)}
                        </button>
                        <Show when=show_legend>
                            <div class="map-legend">
                                <div class="map-legend__row">
                                    <span class="map-legend__swatch map-legend__swatch--you-are-here"></span>
                                    <span>{copy(|m| &m.legend_you_are_here)}</span>
                                </div>
                                <div class="map-legend__row">
                                    <span class="map-legend__swatch map-legend__swatch--fire-exit"></span>
                                    <span>{copy(|m| &m.legend_fire_exit)}</span>
                                </div>
                                <div class="map-legend__row">
                                    <span class="map-legend__swatch map-legend__swatch--accessible"></span>
                                    <span>{copy(|m| &m.legend_accessible)}</span>
                                </div>
                                <div class="map-legend__row">
                                    <span class="map-legend__swatch map-legend__swatch--selected"></span>
                                    <span>{copy(|m| &m.legend_selected)}</span>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="map-panel__locations">
                        <button
                            type="button"
                            class="map-panel__chip"
                            aria-label="Toggle location list"
                            aria-pressed=move || show_list().to_string()
                            on:click=move |_| ui.update(|u| u.show_location_list = !u.show_location_list)
                        >
                            <span class="map-panel__chip-dot"></span>
                            {copy(|m| &m.list_toggle)}
                        </button>
                        <Show when=show_list>
                            <div class="location-list">
                                <div class="location-list__title">{copy(|m| &m.list_title)}</div>
                                <div class="location-list__category">
                                    {move || directory.with(|d| d.selected_category().to_owned())}
                                </div>
                                <div class="location-list__items">
                                    {move || {
                                        locations
                                            .get()
                                            .into_iter()
                                            .map(|(id, label)| {
                                                let selected_id = id.clone();
                                                let selected = move || {
                                                    directory.with(|d| d.selection.is_selected(&selected_id))
                                                };
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="location-list__item"
                                                        class:location-list__item--selected=selected
                                                        on:click=move |_| on_select_marker.run(id.clone())
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>

                <div class="map-panel__zoom-controls">
                    <button
                        type="button"
                        class="map-panel__zoom-button"
                        aria-label=copy(|m| &m.zoom_out)
                        class:map-panel__zoom-button--limit=move || !map_view.get().can_zoom_out()
                        on:click=move |_| map_view.update(MapViewState::zoom_out)
                    >
                        <span class="map-panel__zoom-glyph">"-"</span>
                        {copy(|m| &m.zoom_out)}
                    </button>
                    <div class="map-panel__zoom-readout">{move || format!("{}%", map_view.get().zoom_percent())}</div>
                    <button
                        type="button"
                        class="map-panel__zoom-button"
                        aria-label=copy(|m| &m.zoom_in)
                        class:map-panel__zoom-button--limit=move || !map_view.get().can_zoom_in()
                        on:click=move |_| map_view.update(MapViewState::zoom_in)
                    >
                        <span class="map-panel__zoom-glyph">"+"</span>
                        {copy(|m| &m.zoom_in)}
                    </button>
                </div>
            </div>
        </div>
    }
}
