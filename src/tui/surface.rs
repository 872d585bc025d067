//! Marker layer behind the terminal map.

use crate::encoding::is_drawable;
use crate::store::{MapSurface, MarkerId, MarkerSpec};

#[derive(Debug, Clone)]
struct CanvasMarker {
    spec: MarkerSpec,
    attached: bool,
}

/// [`MapSurface`] whose attached markers are painted by the map view.
///
/// Markers paint in creation order, so the store's ascending-score insertion
/// puts high scores on top.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    markers: Vec<CanvasMarker>,
    attached: usize,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self, id: MarkerId) -> Option<&MarkerSpec> {
        self.markers.get(id.0).map(|m| &m.spec)
    }

    /// Attached markers in paint order.
    pub fn attached_markers(&self) -> impl Iterator<Item = (MarkerId, &MarkerSpec)> + '_ {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.attached)
            .map(|(i, m)| (MarkerId(i), &m.spec))
    }

    /// Attached markers with a positive radius, the ones actually painted.
    pub fn drawn_markers(&self) -> impl Iterator<Item = (MarkerId, &MarkerSpec)> + '_ {
        self.attached_markers()
            .filter(|(_, spec)| is_drawable(spec.radius))
    }

    pub fn is_drawn(&self, id: MarkerId) -> bool {
        self.is_attached(id) && self.spec(id).is_some_and(|s| is_drawable(s.radius))
    }

    pub fn attached_count(&self) -> usize {
        self.attached
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn_markers().count()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Drawn marker closest to (`lon`, `lat`) within `max_distance`
    /// degrees. Ties go to the one painted last, which is the one on top.
    pub fn nearest_drawn(&self, lon: f64, lat: f64, max_distance: f64) -> Option<MarkerId> {
        let mut best: Option<(MarkerId, f64)> = None;
        for (id, spec) in self.drawn_markers() {
            let d = (spec.lon - lon).hypot(spec.lat - lat);
            if d <= max_distance && best.is_none_or(|(_, bd)| d <= bd) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl MapSurface for CanvasSurface {
    fn create_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        self.markers.push(CanvasMarker {
            spec,
            attached: false,
        });
        MarkerId(self.markers.len() - 1)
    }

    fn attach(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            if !marker.attached {
                marker.attached = true;
                self.attached += 1;
            }
        }
    }

    fn detach(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            if marker.attached {
                marker.attached = false;
                self.attached -= 1;
            }
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
