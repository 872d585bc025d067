//! OpenStreetMap links for a point.

use serde::Serialize;
use std::fmt;

const OSM_BASE: &str = "https://www.openstreetmap.org";

/// Zoom level the node and coordinate links open at.
const LINK_ZOOM: u8 = 13;

/// A link to an OSM object, or a warning when the object does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OsmLink {
    Link { label: &'static str, url: String },
    Missing { warning: &'static str },
}

impl OsmLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            OsmLink::Link { url, .. } => Some(url),
            OsmLink::Missing { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, OsmLink::Missing { .. })
    }
}

impl fmt::Display for OsmLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsmLink::Link { label, url } => write!(f, "{label}: {url}"),
            OsmLink::Missing { warning } => write!(f, "{warning}"),
        }
    }
}

/// Relation link for the administrative boundary.
pub fn boundary_link(boundary: i64) -> OsmLink {
    if boundary == crate::point::MISSING_ID {
        return OsmLink::Missing {
            warning: "Boundary missing",
        };
    }
    OsmLink::Link {
        label: "Boundary",
        url: format!("{OSM_BASE}/relation/{boundary}"),
    }
}

/// Node link centred on the point.
pub fn node_link(node: i64, lat: f64, lon: f64) -> OsmLink {
    if node == crate::point::MISSING_ID {
        return OsmLink::Missing {
            warning: "Node missing",
        };
    }
    OsmLink::Link {
        label: "Node",
        url: format!("{OSM_BASE}/node/{node}#map={LINK_ZOOM}/{lat}/{lon}"),
    }
}

/// Marker link for the bare coordinates.
pub fn coordinate_link(lat: f64, lon: f64) -> OsmLink {
    OsmLink::Link {
        label: "OSM coordinates",
        url: format!("{OSM_BASE}/?mlat={lat}&mlon={lon}#map={LINK_ZOOM}/{lat}/{lon}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_link() {
        assert_eq!(
            boundary_link(123456).url(),
            Some("https://www.openstreetmap.org/relation/123456")
        );
        assert!(boundary_link(-1).is_missing());
    }

    #[test]
    fn test_node_link_includes_map_fragment() {
        assert_eq!(
            node_link(42, 23.13, 113.26).url(),
            Some("https://www.openstreetmap.org/node/42#map=13/23.13/113.26")
        );
        assert_eq!(node_link(-1, 0.0, 0.0).to_string(), "Node missing");
    }

    #[test]
    fn test_coordinate_link() {
        assert_eq!(
            coordinate_link(30.5, 114.0).url(),
            Some("https://www.openstreetmap.org/?mlat=30.5&mlon=114#map=13/30.5/114")
        );
    }
}
