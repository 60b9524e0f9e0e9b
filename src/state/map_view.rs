//! Floor map view state: visible floor, zoom, and legend visibility.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use crate::config::{KioskConfig, ZoomConfig};
use crate::util::zoom;

/// Floors of the centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloorLevel {
    One,
    #[default]
    Two,
}

impl FloorLevel {
    /// Floor number shown next to the floor label.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }
}

/// Map panel view state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewState {
    pub level: FloorLevel,
    pub zoom: f64,
    pub zoom_config: ZoomConfig,
    pub show_legend: bool,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new(&KioskConfig::default())
    }
}

impl MapViewState {
    pub fn new(config: &KioskConfig) -> Self {
        Self {
            level: FloorLevel::from_number(config.default_level).unwrap_or_default(),
            zoom: config.zoom.initial,
            zoom_config: config.zoom,
            show_legend: false,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = zoom::zoom_in(self.zoom, &self.zoom_config);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = zoom::zoom_out(self.zoom, &self.zoom_config);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.zoom_config.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.zoom_config.min
    }

    /// Zoom as a whole percentage for the readout.
    pub fn zoom_percent(&self) -> u32 {
        zoom::percent(self.zoom)
    }
}
