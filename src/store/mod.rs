//! Marker store, map surface seam and command orchestration.

pub mod point_store;
pub mod session;
pub mod surface;

pub use point_store::{DetailSink, MarkerEntry, PointStore, SyncReport};
pub use session::{CommandOutcome, MapCommand, MapSession};
pub use surface::{MapSurface, MarkerId, MarkerSpec, MarkerStyle, RecordingSurface};
