//! Point records and the five score dimensions.
//!
//! A [`PointRecord`] is one settlement (township, town or sub-district) with its
//! aggregate completeness score and the four sub-scores it is built from.
//! Records are produced once by the ingestion layer and treated as read-only
//! by everything else.

use serde::{Deserialize, Serialize};

/// Sentinel used by the dataset for "no matching OSM entity".
pub const MISSING_ID: i64 = -1;

/// One settlement on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub lat: f64,
    pub lon: f64,
    /// Aggregate completeness score in `[0, 100]`.
    pub score: f64,
    /// Administrative nodes and boundaries, `[0, 20]`.
    pub score_1: f64,
    /// Roads and transport, `[0, 30]`.
    pub score_2: f64,
    /// Public and commercial facilities, `[0, 30]`.
    pub score_3: f64,
    /// Buildings and land use, `[0, 20]`.
    pub score_4: f64,
    /// OSM node id of the settlement place, or `-1`.
    pub node: i64,
    /// OSM relation id of the administrative boundary, or `-1`.
    pub boundary: i64,
    #[serde(default)]
    pub addr2: String,
    #[serde(default)]
    pub addr3: String,
    #[serde(default)]
    pub addr4: String,
}

impl PointRecord {
    /// Score value along one dimension.
    pub fn score_for(&self, dimension: ScoreDimension) -> f64 {
        match dimension {
            ScoreDimension::Total => self.score,
            ScoreDimension::Admin => self.score_1,
            ScoreDimension::Roads => self.score_2,
            ScoreDimension::Facilities => self.score_3,
            ScoreDimension::Buildings => self.score_4,
        }
    }

    pub fn node_id(&self) -> Option<i64> {
        (self.node != MISSING_ID).then_some(self.node)
    }

    pub fn boundary_id(&self) -> Option<i64> {
        (self.boundary != MISSING_ID).then_some(self.boundary)
    }

    /// Administrative hierarchy joined without separators, e.g. `广东省广州市天河区`.
    pub fn display_name(&self) -> String {
        [&self.addr2, &self.addr3, &self.addr4]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect()
    }
}

/// One of the five filterable score axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Total,
    Admin,
    Roads,
    Facilities,
    Buildings,
}

impl ScoreDimension {
    pub const COUNT: usize = 5;

    /// All dimensions in slider order (index 0..4).
    pub fn all() -> &'static [ScoreDimension; Self::COUNT] {
        &[
            ScoreDimension::Total,
            ScoreDimension::Admin,
            ScoreDimension::Roads,
            ScoreDimension::Facilities,
            ScoreDimension::Buildings,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            ScoreDimension::Total => 0,
            ScoreDimension::Admin => 1,
            ScoreDimension::Roads => 2,
            ScoreDimension::Facilities => 3,
            ScoreDimension::Buildings => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Upper bound of the slider, equal to the maximum the sub-score can reach.
    pub fn slider_max(self) -> f64 {
        match self {
            ScoreDimension::Total => 100.0,
            ScoreDimension::Admin => 20.0,
            ScoreDimension::Roads => 30.0,
            ScoreDimension::Facilities => 30.0,
            ScoreDimension::Buildings => 20.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScoreDimension::Total => "Total",
            ScoreDimension::Admin => "Admin nodes & boundaries",
            ScoreDimension::Roads => "Roads & transport",
            ScoreDimension::Facilities => "Public & commercial facilities",
            ScoreDimension::Buildings => "Buildings & land use",
        }
    }

    /// Short label used in narrow layouts and CLI flags.
    pub fn short_name(self) -> &'static str {
        match self {
            ScoreDimension::Total => "score",
            ScoreDimension::Admin => "admin",
            ScoreDimension::Roads => "roads",
            ScoreDimension::Facilities => "facilities",
            ScoreDimension::Buildings => "buildings",
        }
    }
}
