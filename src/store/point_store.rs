//! Marker entries and the filter/zoom synchronisation passes over them.

use super::surface::{MapSurface, MarkerId, MarkerSpec, MarkerStyle};
use crate::encoding::{color_for_score, radius};
use crate::filter::{is_visible, BooleanSnapshot, RangeSnapshot};
use crate::point::PointRecord;
use std::collections::HashMap;
use tracing::{debug, info};

/// Receives the point behind a selected marker.
pub trait DetailSink {
    fn show(&mut self, point: &PointRecord);
}

impl<F> DetailSink for F
where
    F: FnMut(&PointRecord),
{
    fn show(&mut self, point: &PointRecord) {
        self(point)
    }
}

/// One marker handle paired with the point it renders.
#[derive(Debug, Clone)]
pub struct MarkerEntry {
    pub handle: MarkerId,
    pub point: PointRecord,
}

/// Attach/detach calls issued by one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub attached: usize,
    pub detached: usize,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.attached == 0 && self.detached == 0
    }
}

/// All markers of the session, in paint order (ascending score).
///
/// The entry set is fixed once [`load_and_render`](Self::load_and_render)
/// returns; later passes only change attach state and radius on the surface.
#[derive(Debug)]
pub struct PointStore {
    entries: Vec<MarkerEntry>,
    by_handle: HashMap<MarkerId, usize>,
}

impl PointStore {
    /// Create one marker per point, lowest score first so higher scores paint
    /// on top, and attach them all.
    pub fn load_and_render<S>(
        mut points: Vec<PointRecord>,
        zoom: f64,
        style: &MarkerStyle,
        surface: &mut S,
    ) -> Self
    where
        S: MapSurface + ?Sized,
    {
        points.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut entries = Vec::with_capacity(points.len());
        let mut by_handle = HashMap::with_capacity(points.len());

        for point in points {
            let color = color_for_score(point.score);
            let handle = surface.create_marker(MarkerSpec {
                lat: point.lat,
                lon: point.lon,
                radius: radius(point.score, zoom),
                fill_color: color,
                stroke_color: color,
                stroke: true,
                fill_opacity: style.fill_opacity,
                opacity: style.opacity,
                weight: style.weight,
            });
            surface.attach(handle);

            by_handle.insert(handle, entries.len());
            entries.push(MarkerEntry { handle, point });
        }

        info!(markers = entries.len(), zoom, "markers rendered");
        Self { entries, by_handle }
    }

    /// Bring every marker's attach state in line with the filters.
    ///
    /// Only markers whose visibility differs from their current state are
    /// touched, so a second pass with unchanged filters issues no calls.
    pub fn apply_filters<S>(
        &self,
        ranges: &RangeSnapshot,
        flags: &BooleanSnapshot,
        surface: &mut S,
    ) -> SyncReport
    where
        S: MapSurface + ?Sized,
    {
        let mut report = SyncReport::default();

        for entry in &self.entries {
            let visible = is_visible(&entry.point, ranges, flags);
            let on_map = surface.is_attached(entry.handle);

            if visible && !on_map {
                surface.attach(entry.handle);
                report.attached += 1;
            } else if !visible && on_map {
                surface.detach(entry.handle);
                report.detached += 1;
            }
        }

        debug!(
            attached = report.attached,
            detached = report.detached,
            "filters applied"
        );
        report
    }

    /// Resize every marker for `zoom`; attach state and colour are untouched.
    pub fn apply_radius_for_zoom<S>(&self, zoom: f64, surface: &mut S)
    where
        S: MapSurface + ?Sized,
    {
        for entry in &self.entries {
            surface.set_radius(entry.handle, radius(entry.point.score, zoom));
        }
        debug!(zoom, markers = self.entries.len(), "radius updated");
    }

    /// Forward the point behind `handle` to `sink`. Returns false for unknown
    /// handles.
    pub fn select(&self, handle: MarkerId, sink: &mut dyn DetailSink) -> bool {
        match self.get(handle) {
            Some(entry) => {
                sink.show(&entry.point);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, handle: MarkerId) -> Option<&MarkerEntry> {
        self.by_handle.get(&handle).and_then(|&i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[MarkerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries currently attached to `surface`, in paint order.
    pub fn visible_entries<'a, S>(&'a self, surface: &'a S) -> impl Iterator<Item = &'a MarkerEntry> + 'a
    where
        S: MapSurface + ?Sized,
    {
        self.entries
            .iter()
            .filter(move |entry| surface.is_attached(entry.handle))
    }

    pub fn visible_count<S>(&self, surface: &S) -> usize
    where
        S: MapSurface + ?Sized,
    {
        self.visible_entries(surface).count()
    }
}
