//! Command dispatch for one map session.
//!
//! Every user interaction becomes one [`MapCommand`]. [`MapSession::dispatch`]
//! runs it to completion: the filter state is mutated and every marker is
//! re-synchronised before the call returns, so no caller can observe a filter
//! change whose markers have not caught up.

use super::point_store::{DetailSink, PointStore, SyncReport};
use super::surface::{MapSurface, MarkerId, MarkerStyle};
use crate::filter::{BooleanFilterSet, BooleanFlag, RangeFilterSet, SliderPositions, Thumb};
use crate::point::{PointRecord, ScoreDimension};
use tracing::debug;

/// One discrete user interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapCommand {
    /// Both slider inputs of a dimension were written.
    SetBounds {
        dimension: ScoreDimension,
        min: f64,
        max: f64,
    },
    /// One thumb was dragged by `delta`.
    NudgeThumb {
        dimension: ScoreDimension,
        thumb: Thumb,
        delta: f64,
    },
    SetFlag {
        flag: BooleanFlag,
        on: bool,
    },
    ToggleFlag(BooleanFlag),
    /// All ranges back to full span, all flags off.
    ResetFilters,
    /// Zoom-end event with the new zoom level.
    Zoom(f64),
    /// A marker was clicked.
    Select(MarkerId),
}

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// Filters changed; `positions` is set when a slider moved.
    Filtered {
        report: SyncReport,
        positions: Option<(ScoreDimension, SliderPositions)>,
    },
    Resized {
        zoom: f64,
    },
    Selected {
        found: bool,
    },
}

/// Owns the markers and both filter sets of one map view.
#[derive(Debug)]
pub struct MapSession {
    store: PointStore,
    ranges: RangeFilterSet,
    flags: BooleanFilterSet,
    zoom: f64,
}

impl MapSession {
    /// Render `points` on `surface` at `zoom` with default filters.
    pub fn load<S>(points: Vec<PointRecord>, zoom: f64, style: &MarkerStyle, surface: &mut S) -> Self
    where
        S: MapSurface + ?Sized,
    {
        Self {
            store: PointStore::load_and_render(points, zoom, style, surface),
            ranges: RangeFilterSet::new(),
            flags: BooleanFilterSet::new(),
            zoom,
        }
    }

    pub fn dispatch<S>(
        &mut self,
        command: MapCommand,
        surface: &mut S,
        sink: &mut dyn DetailSink,
    ) -> CommandOutcome
    where
        S: MapSurface + ?Sized,
    {
        debug!(?command, "dispatch");
        match command {
            MapCommand::SetBounds { dimension, min, max } => {
                let positions = self.ranges.set_bounds(dimension, min, max);
                self.refilter(surface, Some((dimension, positions)))
            }
            MapCommand::NudgeThumb {
                dimension,
                thumb,
                delta,
            } => {
                let positions = self.ranges.nudge(dimension, thumb, delta);
                self.refilter(surface, Some((dimension, positions)))
            }
            MapCommand::SetFlag { flag, on } => {
                self.flags.set(flag, on);
                self.refilter(surface, None)
            }
            MapCommand::ToggleFlag(flag) => {
                self.flags.toggle(flag);
                self.refilter(surface, None)
            }
            MapCommand::ResetFilters => {
                self.ranges.reset();
                self.flags.reset();
                self.refilter(surface, None)
            }
            MapCommand::Zoom(zoom) => {
                self.zoom = zoom;
                self.store.apply_radius_for_zoom(zoom, surface);
                CommandOutcome::Resized { zoom }
            }
            MapCommand::Select(handle) => CommandOutcome::Selected {
                found: self.store.select(handle, sink),
            },
        }
    }

    /// Re-run the filter pass against the current state.
    pub fn apply_filters<S>(&self, surface: &mut S) -> SyncReport
    where
        S: MapSurface + ?Sized,
    {
        self.store
            .apply_filters(&self.ranges.snapshot(), &self.flags.snapshot(), surface)
    }

    fn refilter<S>(
        &self,
        surface: &mut S,
        positions: Option<(ScoreDimension, SliderPositions)>,
    ) -> CommandOutcome
    where
        S: MapSurface + ?Sized,
    {
        CommandOutcome::Filtered {
            report: self.apply_filters(surface),
            positions,
        }
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn ranges(&self) -> &RangeFilterSet {
        &self.ranges
    }

    pub fn flags(&self) -> &BooleanFilterSet {
        &self.flags
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::test_support::sample_point;
    use crate::store::RecordingSurface;

    fn session(surface: &mut RecordingSurface) -> MapSession {
        MapSession::load(vec![sample_point()], 5.0, &MarkerStyle::default(), surface)
    }

    fn ignore(_: &PointRecord) {}

    #[test]
    fn test_set_bounds_refilters_and_reports_positions() {
        let mut surface = RecordingSurface::new();
        let mut session = session(&mut surface);

        let outcome = session.dispatch(
            MapCommand::SetBounds {
                dimension: ScoreDimension::Total,
                min: 100.0,
                max: 60.0,
            },
            &mut surface,
            &mut ignore,
        );

        match outcome {
            CommandOutcome::Filtered { report, positions } => {
                assert_eq!(report.detached, 1);
                let (dim, pos) = positions.unwrap();
                assert_eq!(dim, ScoreDimension::Total);
                assert_eq!(pos.min_percent, 60.0);
                assert_eq!(pos.max_percent, 100.0);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(surface.attached_count(), 0);
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut surface = RecordingSurface::new();
        let mut session = session(&mut surface);

        session.dispatch(MapCommand::ToggleFlag(BooleanFlag::NoBoundary), &mut surface, &mut ignore);
        assert_eq!(surface.attached_count(), 0);

        session.dispatch(MapCommand::ResetFilters, &mut surface, &mut ignore);
        assert_eq!(surface.attached_count(), 1);
        assert!(!session.flags().is_set(BooleanFlag::NoBoundary));
    }

    #[test]
    fn test_zoom_does_not_touch_attach_state() {
        let mut surface = RecordingSurface::new();
        let mut session = session(&mut surface);
        let calls = (surface.attach_calls(), surface.detach_calls());

        let outcome = session.dispatch(MapCommand::Zoom(7.0), &mut surface, &mut ignore);

        assert_eq!(outcome, CommandOutcome::Resized { zoom: 7.0 });
        assert_eq!(session.zoom(), 7.0);
        assert_eq!((surface.attach_calls(), surface.detach_calls()), calls);
        let handle = session.store().entries()[0].handle;
        assert_eq!(surface.spec(handle).map(|s| s.radius), Some(5.4));
    }

    #[test]
    fn test_select_reaches_sink() {
        let mut surface = RecordingSurface::new();
        let mut session = session(&mut surface);
        let handle = session.store().entries()[0].handle;
        let mut seen = None;

        let outcome = session.dispatch(
            MapCommand::Select(handle),
            &mut surface,
            &mut |p: &PointRecord| seen = Some(p.boundary),
        );

        assert_eq!(outcome, CommandOutcome::Selected { found: true });
        assert_eq!(seen, Some(123456));
    }
}
