//! The map surface that markers are drawn on.
//!
//! The store never draws anything itself: it asks a [`MapSurface`] to create
//! marker handles and to attach, detach or resize them. The terminal map
//! implements this trait, and [`RecordingSurface`] implements it in memory for
//! headless runs and tests.

use crate::encoding::Rgb;
use serde::{Deserialize, Serialize};

/// Opaque handle of a marker owned by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MarkerId(pub usize);

/// Static styling shared by every marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill_opacity: default_fill_opacity(),
            opacity: default_opacity(),
            weight: default_weight(),
        }
    }
}

fn default_fill_opacity() -> f64 {
    0.9
}

fn default_opacity() -> f64 {
    1.0
}

fn default_weight() -> f64 {
    0.6
}

/// Everything a surface needs to create one circle marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub fill_color: Rgb,
    pub stroke_color: Rgb,
    pub stroke: bool,
    pub fill_opacity: f64,
    pub opacity: f64,
    pub weight: f64,
}

/// Marker operations the store relies on.
///
/// Calls arrive one at a time from a single handler; implementations need no
/// internal locking.
pub trait MapSurface {
    /// Create a detached marker and return its handle.
    fn create_marker(&mut self, spec: MarkerSpec) -> MarkerId;

    fn attach(&mut self, id: MarkerId);

    fn detach(&mut self, id: MarkerId);

    fn is_attached(&self, id: MarkerId) -> bool;

    fn set_radius(&mut self, id: MarkerId, radius: f64);
}

/// In-memory surface that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    markers: Vec<RecordedMarker>,
    attach_order: Vec<MarkerId>,
    attach_calls: usize,
    detach_calls: usize,
}

#[derive(Debug, Clone)]
struct RecordedMarker {
    spec: MarkerSpec,
    attached: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self, id: MarkerId) -> Option<&MarkerSpec> {
        self.markers.get(id.0).map(|m| &m.spec)
    }

    /// Every attach in call order, including re-attaches.
    pub fn attach_order(&self) -> &[MarkerId] {
        &self.attach_order
    }

    pub fn attach_calls(&self) -> usize {
        self.attach_calls
    }

    pub fn detach_calls(&self) -> usize {
        self.detach_calls
    }

    pub fn attached_count(&self) -> usize {
        self.markers.iter().filter(|m| m.attached).count()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl MapSurface for RecordingSurface {
    fn create_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        self.markers.push(RecordedMarker {
            spec,
            attached: false,
        });
        MarkerId(self.markers.len() - 1)
    }

    fn attach(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            marker.attached = true;
            self.attach_calls += 1;
            self.attach_order.push(id);
        }
    }

    fn detach(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            marker.attached = false;
            self.detach_calls += 1;
        }
    }

    fn is_attached(&self, id: MarkerId) -> bool {
        self.markers.get(id.0).is_some_and(|m| m.attached)
    }

    fn set_radius(&mut self, id: MarkerId, radius: f64) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            marker.spec.radius = radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> MarkerSpec {
        let color = Rgb::new(1, 2, 3);
        let style = MarkerStyle::default();
        MarkerSpec {
            lat: 0.0,
            lon: 0.0,
            radius: 1.0,
            fill_color: color,
            stroke_color: color,
            stroke: true,
            fill_opacity: style.fill_opacity,
            opacity: style.opacity,
            weight: style.weight,
        }
    }

    #[test]
    fn test_markers_start_detached() {
        let mut surface = RecordingSurface::new();
        let id = surface.create_marker(spec());
        assert!(!surface.is_attached(id));
        assert_eq!(surface.attached_count(), 0);
    }

    #[test]
    fn test_attach_detach_counts() {
        let mut surface = RecordingSurface::new();
        let id = surface.create_marker(spec());
        surface.attach(id);
        surface.detach(id);
        surface.attach(id);
        assert_eq!(surface.attach_calls(), 2);
        assert_eq!(surface.detach_calls(), 1);
        assert_eq!(surface.attach_order(), &[id, id]);
        assert!(surface.is_attached(id));
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.attach(MarkerId(7));
        assert_eq!(surface.attach_calls(), 0);
        assert!(!surface.is_attached(MarkerId(7)));
    }

    #[test]
    fn test_default_style_values() {
        let style = MarkerStyle::default();
        assert_eq!(style.fill_opacity, 0.9);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.weight, 0.6);
    }
}
