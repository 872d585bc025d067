//! Filter model: five score ranges, four missing-feature flags, and the
//! predicate that combines them.

pub mod flags;
pub mod predicate;
pub mod range;

pub use flags::{BooleanFilterSet, BooleanFlag, BooleanSnapshot};
pub use predicate::is_visible;
pub use range::{Range, RangeFilterSet, RangeSnapshot, SliderPositions, Thumb, TrackGradient};
