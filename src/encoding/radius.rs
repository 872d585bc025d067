//! Zoom-dependent marker radius.

/// Radius in screen pixels at zoom 5.
pub const BASE_RADIUS: f64 = 2.7;

/// Zoom level at which markers collapse to zero radius.
pub const ZERO_RADIUS_ZOOM: f64 = 3.0;

/// Marker radius for a point at the given zoom level.
///
/// The score is accepted so callers can pass the point being rendered, but
/// the radius depends on zoom alone. Zoom levels at or below 3 give zero or
/// negative radii; treat those as invisible rather than as errors.
pub fn radius(_score: f64, zoom: f64) -> f64 {
    BASE_RADIUS * (zoom - ZERO_RADIUS_ZOOM) / 2.0
}

/// Whether a radius produces something drawable.
pub fn is_drawable(radius: f64) -> bool {
    radius > 0.0
}
