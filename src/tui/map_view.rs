//! Braille canvas with the world outline and the attached markers.

use super::surface::CanvasSurface;
use super::theme::{marker_color, Theme};
use super::viewport::{GeoBounds, Viewport};
use crate::store::MarkerSpec;
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution, Points},
        Block, Borders,
    },
    Frame,
};

/// Extra dots between a selected marker and its highlight ring.
const SELECTION_RING_GAP: f64 = 2.0;

/// Dots covered by a filled marker, in lon/lat.
pub fn disc_coords(spec: &MarkerSpec, degrees_per_dot: f64) -> Vec<(f64, f64)> {
    let r = spec.radius;
    let n = r.ceil() as i32;
    let mut coords = Vec::new();
    for dx in -n..=n {
        for dy in -n..=n {
            let (fx, fy) = (f64::from(dx), f64::from(dy));
            if fx * fx + fy * fy <= r * r {
                coords.push((
                    spec.lon + fx * degrees_per_dot,
                    spec.lat + fy * degrees_per_dot,
                ));
            }
        }
    }
    if coords.is_empty() {
        coords.push((spec.lon, spec.lat));
    }
    coords
}

fn in_bounds(spec: &MarkerSpec, bounds: &GeoBounds, margin: f64) -> bool {
    spec.lon >= bounds.x[0] - margin
        && spec.lon <= bounds.x[1] + margin
        && spec.lat >= bounds.y[0] - margin
        && spec.lat <= bounds.y[1] + margin
}

pub struct MapViewState<'a> {
    pub surface: &'a CanvasSurface,
    pub viewport: &'a Viewport,
    pub selected: Option<(f64, f64)>,
    pub title: String,
}

/// Draw the map into `area`; returns the inner drawing area for hit-testing.
pub fn render_map(frame: &mut Frame, area: Rect, state: &MapViewState, theme: &Theme) -> Rect {
    let block = Block::default()
        .title(state.title.as_str())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    let bounds = state.viewport.bounds(inner);
    let dpd = state.viewport.degrees_per_dot();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: theme.coastline,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for (_, spec) in state.surface.drawn_markers() {
                let margin = spec.radius * dpd;
                if !in_bounds(spec, &bounds, margin) {
                    continue;
                }
                let coords = disc_coords(spec, dpd);
                ctx.draw(&Points {
                    coords: &coords,
                    color: marker_color(spec.fill_color),
                });
            }

            // No ring around a selection whose marker is not painted
            let ring = state.selected.and_then(|(lon, lat)| {
                state
                    .surface
                    .drawn_markers()
                    .find(|(_, s)| s.lon == lon && s.lat == lat)
            });
            if let Some((_, spec)) = ring {
                ctx.layer();
                ctx.draw(&Circle {
                    x: spec.lon,
                    y: spec.lat,
                    radius: (spec.radius + SELECTION_RING_GAP) * dpd,
                    color: Color::White,
                });
            }
        });

    frame.render_widget(canvas, area);
    inner
}
