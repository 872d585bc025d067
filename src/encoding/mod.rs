//! Visual encoding of points: fill colour from score, radius from zoom.

pub mod color;
pub mod radius;

pub use color::{color_for_score, ColorScale, ColorStop, Rgb};
pub use radius::{is_drawable, radius, BASE_RADIUS};
