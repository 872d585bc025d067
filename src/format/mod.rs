//! Text formatting for the detail panel and the list command.
//!
//! These helpers only present a [`PointRecord`]; they play no part in
//! filtering.

pub mod links;

pub use links::{boundary_link, coordinate_link, node_link, OsmLink};

use crate::point::{PointRecord, ScoreDimension};

/// Report the dataset was published with.
pub const DATA_SOURCE_TITLE: &str = "2025 OSM feature completeness of mainland China townships";
pub const DATA_SOURCE_URL: &str = "https://www.openstreetmap.org/user/Higashimado/diary/407990";

/// One decimal place, as shown everywhere a score is displayed.
pub fn fmt1(value: f64) -> String {
    format!("{value:.1}")
}

/// One line of the score breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub dimension: ScoreDimension,
    pub value: f64,
    pub text: String,
}

/// `label: value / max` for each of the four sub-scores.
pub fn score_breakdown(point: &PointRecord) -> Vec<BreakdownLine> {
    ScoreDimension::all()[1..]
        .iter()
        .map(|&dimension| {
            let value = point.score_for(dimension);
            BreakdownLine {
                dimension,
                value,
                text: format!(
                    "{}: {} / {}",
                    dimension.display_name(),
                    fmt1(value),
                    dimension.slider_max()
                ),
            }
        })
        .collect()
}

/// The three links shown under a point's name, in display order.
pub fn point_links(point: &PointRecord) -> [OsmLink; 3] {
    [
        boundary_link(point.boundary),
        node_link(point.node, point.lat, point.lon),
        coordinate_link(point.lat, point.lon),
    ]
}

/// Single-line summary: name, total score and link availability.
pub fn popup_summary(point: &PointRecord) -> String {
    let links: Vec<String> = point_links(point)
        .iter()
        .map(|link| match link {
            OsmLink::Link { label, .. } => (*label).to_string(),
            OsmLink::Missing { warning } => format!("!{warning}"),
        })
        .collect();
    format!(
        "{}  score {}  [{}]",
        point.display_name(),
        fmt1(point.score),
        links.join(" | ")
    )
}

/// Link most useful to copy: the node when it exists, else the coordinates.
pub fn preferred_link(point: &PointRecord) -> String {
    node_link(point.node, point.lat, point.lon)
        .url()
        .map(str::to_string)
        .unwrap_or_else(|| {
            coordinate_link(point.lat, point.lon)
                .url()
                .map(str::to_string)
                .unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::test_support::sample_point;

    #[test]
    fn test_fmt1() {
        assert_eq!(fmt1(55.0), "55.0");
        assert_eq!(fmt1(12.34), "12.3");
        assert_eq!(fmt1(0.0), "0.0");
    }

    #[test]
    fn test_breakdown_lines() {
        let lines = score_breakdown(&sample_point());
        let text: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            text,
            vec![
                "Admin nodes & boundaries: 10.0 / 20",
                "Roads & transport: 15.0 / 30",
                "Public & commercial facilities: 20.0 / 30",
                "Buildings & land use: 10.0 / 20",
            ]
        );
    }

    #[test]
    fn test_popup_summary_marks_missing_links() {
        let summary = popup_summary(&sample_point());
        assert_eq!(
            summary,
            "广东省广州市天河区  score 55.0  [Boundary | !Node missing | OSM coordinates]"
        );
    }

    #[test]
    fn test_preferred_link_falls_back_to_coordinates() {
        let mut p = sample_point();
        assert!(preferred_link(&p).contains("mlat=23.13"));
        p.node = 7;
        assert!(preferred_link(&p).contains("/node/7"));
    }
}
