//! Score to colour mapping.
//!
//! Scores are coloured by piecewise-linear interpolation over five fixed stops,
//! running dark red → orange → amber → green → blue from low to high
//! completeness.

use serde::Serialize;
use std::fmt;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// A fixed `(score, colour)` anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub score: f64,
    pub color: Rgb,
}

const STOPS: [ColorStop; 5] = [
    ColorStop { score: 0.0, color: Rgb::new(180, 0, 0) },
    ColorStop { score: 20.0, color: Rgb::new(255, 100, 0) },
    ColorStop { score: 40.0, color: Rgb::new(200, 160, 0) },
    ColorStop { score: 60.0, color: Rgb::new(40, 140, 40) },
    ColorStop { score: 100.0, color: Rgb::new(0, 80, 200) },
];

/// Piecewise-linear colour scale over the completeness score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorScale;

impl ColorScale {
    pub fn stops(&self) -> &'static [ColorStop] {
        &STOPS
    }

    /// Colour for `score`.
    ///
    /// # Precondition
    ///
    /// `score` must be a finite value in `[0, 100]`. Ingestion rejects rows
    /// that violate this. Out-of-range or NaN input trips a debug assertion.
    /// In release builds the returned colour is arbitrary: it is neither
    /// clamped to an end stop nor a meaningful extrapolation, and callers must
    /// not depend on it.
    pub fn color(&self, score: f64) -> Rgb {
        debug_assert!(
            (0.0..=100.0).contains(&score),
            "color scale input {score} outside [0, 100]"
        );

        let (c1, c2) = bracket(score);
        let t = (score - c1.score) / (c2.score - c1.score);

        Rgb {
            r: lerp_channel(c1.color.r, c2.color.r, t),
            g: lerp_channel(c1.color.g, c2.color.g, t),
            b: lerp_channel(c1.color.b, c2.color.b, t),
        }
    }
}

/// Convenience wrapper around [`ColorScale::color`].
pub fn color_for_score(score: f64) -> Rgb {
    ColorScale.color(score)
}

/// First adjacent pair with `c1.score <= score <= c2.score`; a score sitting
/// exactly on a stop resolves to the lower-indexed bracket.
fn bracket(score: f64) -> (ColorStop, ColorStop) {
    STOPS
        .windows(2)
        .find(|pair| score >= pair[0].score && score <= pair[1].score)
        .map(|pair| (pair[0], pair[1]))
        .unwrap_or_else(|| {
            if score < STOPS[0].score {
                (STOPS[0], STOPS[1])
            } else {
                (STOPS[STOPS.len() - 2], STOPS[STOPS.len() - 1])
            }
        })
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + t * (f64::from(to) - f64::from(from));
    // Half rounds up; `as` saturates anything the extrapolated path produces.
    (value + 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stop_values_are_exact() {
        let scale = ColorScale;
        assert_eq!(scale.color(0.0), Rgb::new(180, 0, 0));
        assert_eq!(scale.color(20.0), Rgb::new(255, 100, 0));
        assert_eq!(scale.color(40.0), Rgb::new(200, 160, 0));
        assert_eq!(scale.color(60.0), Rgb::new(40, 140, 40));
        assert_eq!(scale.color(100.0), Rgb::new(0, 80, 200));
    }

    #[test]
    fn test_midpoint_is_channel_average_rounded_half_up() {
        // (180 + 255) / 2 = 217.5 rounds half up to 218. Hand-worked tables
        // that list 217 truncate instead; 218 is the intended value.
        assert_eq!(color_for_score(10.0), Rgb::new(218, 50, 0));
    }

    #[test]
    fn test_interpolation_within_last_bracket() {
        // t = 0.5 between green and blue
        assert_eq!(color_for_score(80.0), Rgb::new(20, 110, 120));
    }

    #[test]
    fn test_stop_boundary_uses_lower_bracket() {
        let (c1, c2) = bracket(20.0);
        assert_eq!(c1.score, 0.0);
        assert_eq!(c2.score, 20.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 100]")]
    fn test_score_above_range_trips_debug_assertion() {
        color_for_score(100.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 100]")]
    fn test_nan_score_trips_debug_assertion() {
        color_for_score(f64::NAN);
    }

    #[test]
    fn test_css_display() {
        assert_eq!(Rgb::new(40, 140, 40).to_string(), "rgb(40,140,40)");
    }

    #[test]
    fn test_stops_are_ascending() {
        assert!(ColorScale
            .stops()
            .windows(2)
            .all(|pair| pair[0].score < pair[1].score));
    }
}
