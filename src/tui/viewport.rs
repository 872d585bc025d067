//! Visible window of the map and conversions between screen cells and
//! longitude/latitude.
//!
//! The canvas draws in braille, two dots across and four down per cell. A dot
//! is treated like a web-map pixel: at zoom `z` it spans `360 / (256 * 2^z)`
//! degrees on both axes (plate carrée, so the world outline lines up).

use crate::config::{MAX_ZOOM, MIN_ZOOM};
use ratatui::layout::Rect;

pub const DOTS_PER_CELL_X: f64 = 2.0;
pub const DOTS_PER_CELL_Y: f64 = 4.0;

const MAX_LAT: f64 = 85.0;

/// Fraction of the visible span moved by one pan step.
const PAN_FRACTION: f64 = 0.2;

/// Degrees covered by one braille dot at `zoom`.
pub fn degrees_per_dot(zoom: f64) -> f64 {
    360.0 / (256.0 * 2f64.powf(zoom))
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Longitude/latitude bounds of a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl Viewport {
    pub fn new(center_lon: f64, center_lat: f64, zoom: f64) -> Self {
        Self {
            center_lon: wrap_lon(center_lon),
            center_lat: center_lat.clamp(-MAX_LAT, MAX_LAT),
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn degrees_per_dot(&self) -> f64 {
        degrees_per_dot(self.zoom)
    }

    /// Canvas bounds for a drawing area of `area` cells.
    pub fn bounds(&self, area: Rect) -> GeoBounds {
        let dpd = self.degrees_per_dot();
        let half_w = f64::from(area.width) * DOTS_PER_CELL_X * dpd / 2.0;
        let half_h = f64::from(area.height) * DOTS_PER_CELL_Y * dpd / 2.0;
        GeoBounds {
            x: [self.center_lon - half_w, self.center_lon + half_w],
            y: [self.center_lat - half_h, self.center_lat + half_h],
        }
    }

    /// Step the zoom level; returns the clamped new level.
    pub fn zoom_by(&mut self, delta: f64) -> f64 {
        self.zoom = clamp_zoom(self.zoom + delta);
        self.zoom
    }

    pub fn pan(&mut self, direction: PanDirection, area: Rect) {
        let bounds = self.bounds(area);
        let dx = (bounds.x[1] - bounds.x[0]) * PAN_FRACTION;
        let dy = (bounds.y[1] - bounds.y[0]) * PAN_FRACTION;
        match direction {
            PanDirection::Left => self.center_lon = wrap_lon(self.center_lon - dx),
            PanDirection::Right => self.center_lon = wrap_lon(self.center_lon + dx),
            PanDirection::Up => self.center_lat = (self.center_lat + dy).clamp(-MAX_LAT, MAX_LAT),
            PanDirection::Down => self.center_lat = (self.center_lat - dy).clamp(-MAX_LAT, MAX_LAT),
        }
    }

    pub fn center_on(&mut self, lon: f64, lat: f64) {
        self.center_lon = wrap_lon(lon);
        self.center_lat = lat.clamp(-MAX_LAT, MAX_LAT);
    }

    /// Longitude/latitude under the centre of cell (`column`, `row`), or
    /// `None` outside `area`.
    pub fn cell_to_geo(&self, area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
        if !contains(area, column, row) {
            return None;
        }
        let bounds = self.bounds(area);
        let cell_w = (bounds.x[1] - bounds.x[0]) / f64::from(area.width);
        let cell_h = (bounds.y[1] - bounds.y[0]) / f64::from(area.height);
        let lon = bounds.x[0] + (f64::from(column - area.x) + 0.5) * cell_w;
        let lat = bounds.y[1] - (f64::from(row - area.y) + 0.5) * cell_h;
        Some((lon, lat))
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn wrap_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
