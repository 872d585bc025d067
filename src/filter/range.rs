//! Dual-thumb range filters over the five score dimensions.
//!
//! Each dimension holds one [`Range`]. Writes go through
//! [`RangeFilterSet::set_bounds`], which restores `min <= max` by swapping and
//! keeps both ends inside `[0, slider_max]`. Slider positions are derived on
//! every call and never stored.

use crate::point::ScoreDimension;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bounds for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// The full slider span of `dimension`.
    pub fn full(dimension: ScoreDimension) -> Self {
        Self {
            min: 0.0,
            max: dimension.slider_max(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Which end of a dual slider is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thumb {
    #[default]
    Min,
    Max,
}

impl Thumb {
    pub fn other(self) -> Self {
        match self {
            Thumb::Min => Thumb::Max,
            Thumb::Max => Thumb::Min,
        }
    }
}

/// Thumb positions as percentages of the slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPositions {
    pub min_percent: f64,
    pub max_percent: f64,
}

impl SliderPositions {
    pub fn of(range: Range, slider_max: f64) -> Self {
        Self {
            min_percent: 100.0 * range.min / slider_max,
            max_percent: 100.0 * range.max / slider_max,
        }
    }

    pub fn gradient(&self) -> TrackGradient {
        TrackGradient {
            min_percent: self.min_percent,
            max_percent: self.max_percent,
        }
    }
}

/// Background of a slider track: inactive outside the selected span, active
/// inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGradient {
    pub min_percent: f64,
    pub max_percent: f64,
}

impl TrackGradient {
    pub const INACTIVE: &'static str = "#dadae5";
    pub const ACTIVE: &'static str = "#3264fe";

    /// CSS background for web front ends.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient(to right, {inactive} {min}% , {active} {min}% , {active} {max}%, {inactive} {max}%)",
            inactive = Self::INACTIVE,
            active = Self::ACTIVE,
            min = self.min_percent,
            max = self.max_percent,
        )
    }

    /// Whether cell `index` of a track `width` cells wide falls inside the
    /// active span (sampled at the cell centre).
    pub fn is_active_cell(&self, index: usize, width: usize) -> bool {
        if width == 0 {
            return false;
        }
        let centre = (index as f64 + 0.5) / width as f64 * 100.0;
        self.min_percent <= centre && centre <= self.max_percent
    }

    /// Track cell that holds the thumb at `percent`.
    pub fn thumb_cell(percent: f64, width: usize) -> usize {
        if width == 0 {
            return 0;
        }
        let cell = (percent / 100.0 * width as f64).floor() as usize;
        cell.min(width - 1)
    }
}

/// Read-only copy of all five ranges, taken once per filter pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSnapshot {
    ranges: [Range; ScoreDimension::COUNT],
}

impl RangeSnapshot {
    pub fn get(&self, dimension: ScoreDimension) -> Range {
        self.ranges[dimension.index()]
    }
}

impl Default for RangeSnapshot {
    fn default() -> Self {
        RangeFilterSet::new().snapshot()
    }
}

/// The five range filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilterSet {
    ranges: [Range; ScoreDimension::COUNT],
}

impl RangeFilterSet {
    /// All ranges at their full span.
    pub fn new() -> Self {
        Self {
            ranges: (*ScoreDimension::all()).map(Range::full),
        }
    }

    pub fn range(&self, dimension: ScoreDimension) -> Range {
        self.ranges[dimension.index()]
    }

    /// Store new bounds for `dimension`, swapping them when `min > max`, and
    /// return the slider positions for the corrected values.
    pub fn set_bounds(&mut self, dimension: ScoreDimension, min: f64, max: f64) -> SliderPositions {
        let slider_max = dimension.slider_max();
        let mut min = clamp_to_track(min, slider_max, 0.0);
        let mut max = clamp_to_track(max, slider_max, slider_max);

        if min > max {
            std::mem::swap(&mut min, &mut max);
        }

        self.ranges[dimension.index()] = Range { min, max };
        tracing::trace!(
            dimension = dimension.short_name(),
            min,
            max,
            "range bounds updated"
        );
        self.positions(dimension)
    }

    /// Move one thumb by `delta`, as a drag on the slider would.
    ///
    /// The moved value and the untouched one are fed back through
    /// [`set_bounds`](Self::set_bounds), so dragging past the other thumb
    /// swaps the pair.
    pub fn nudge(&mut self, dimension: ScoreDimension, thumb: Thumb, delta: f64) -> SliderPositions {
        let Range { min, max } = self.range(dimension);
        match thumb {
            Thumb::Min => self.set_bounds(dimension, min + delta, max),
            Thumb::Max => self.set_bounds(dimension, min, max + delta),
        }
    }

    /// Slider positions for the current bounds of `dimension`.
    pub fn positions(&self, dimension: ScoreDimension) -> SliderPositions {
        SliderPositions::of(self.range(dimension), dimension.slider_max())
    }

    /// Whether `dimension` still spans its whole slider.
    pub fn is_full_span(&self, dimension: ScoreDimension) -> bool {
        self.range(dimension) == Range::full(dimension)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> RangeSnapshot {
        RangeSnapshot {
            ranges: self.ranges,
        }
    }
}

impl Default for RangeFilterSet {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_to_track(value: f64, slider_max: f64, nan_fallback: f64) -> f64 {
    if value.is_nan() {
        nan_fallback
    } else {
        value.clamp(0.0, slider_max)
    }
}
