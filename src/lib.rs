// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod filter;
pub mod format;
pub mod ingest;
pub mod observability;
pub mod point;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use crate::encoding::{color_for_score, radius, ColorScale, Rgb};
pub use crate::errors::{Result, TownmapError};
pub use crate::filter::{
    is_visible, BooleanFilterSet, BooleanFlag, BooleanSnapshot, Range, RangeFilterSet,
    RangeSnapshot, SliderPositions, Thumb,
};
pub use crate::point::{PointRecord, ScoreDimension, MISSING_ID};
pub use crate::store::{
    CommandOutcome, DetailSink, MapCommand, MapSession, MapSurface, MarkerId, MarkerSpec,
    MarkerStyle, PointStore, RecordingSurface, SyncReport,
};
