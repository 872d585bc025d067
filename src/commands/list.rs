//! Headless listing of the points that pass a filter set.
//!
//! The filters go through the same [`MapSession`] the interactive map uses,
//! drawn on a [`RecordingSurface`]; whatever is attached afterwards is what
//! the map would show.

use super::{load_dataset, resolve_config, resolve_data_paths};
use crate::cli::{FilterArgs, OutputFormat};
use crate::filter::BooleanFlag;
use crate::format::{fmt1, point_links, OsmLink, DATA_SOURCE_URL};
use crate::point::{PointRecord, ScoreDimension};
use crate::store::{MapCommand, MapSession, MarkerStyle, RecordingSurface};
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub filters: FilterArgs,
    pub format: OutputFormat,
    pub limit: Option<usize>,
}

/// One visible point as printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub score: f64,
    pub admin: f64,
    pub roads: f64,
    pub facilities: f64,
    pub buildings: f64,
    pub color: String,
    pub links: Vec<OsmLink>,
}

impl From<&PointRecord> for ListedPoint {
    fn from(point: &PointRecord) -> Self {
        Self {
            name: point.display_name(),
            lat: point.lat,
            lon: point.lon,
            score: point.score,
            admin: point.score_1,
            roads: point.score_2,
            facilities: point.score_3,
            buildings: point.score_4,
            color: crate::encoding::color_for_score(point.score).to_string(),
            links: point_links(point).into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    total: usize,
    visible: usize,
    source: &'static str,
    points: &'a [ListedPoint],
}

/// Commands equivalent to setting the sliders and checkboxes by hand.
pub fn filter_commands(filters: &FilterArgs) -> Vec<MapCommand> {
    let ranges = ScoreDimension::all().iter().filter_map(|&dimension| {
        filters.range(dimension).map(|arg| {
            let (min, max) = arg.resolve(dimension);
            MapCommand::SetBounds {
                dimension,
                min,
                max,
            }
        })
    });
    let flags = BooleanFlag::all()
        .iter()
        .filter(|&&flag| filters.flag(flag))
        .map(|&flag| MapCommand::SetFlag { flag, on: true });
    ranges.chain(flags).collect()
}

/// Visible points, highest score first, plus the total loaded.
pub fn collect_visible(
    points: Vec<PointRecord>,
    filters: &FilterArgs,
    limit: Option<usize>,
) -> (Vec<ListedPoint>, usize) {
    let mut surface = RecordingSurface::new();
    let mut session = MapSession::load(points, 5.0, &MarkerStyle::default(), &mut surface);
    let total = session.store().len();

    for command in filter_commands(filters) {
        session.dispatch(command, &mut surface, &mut |_: &PointRecord| {});
    }

    let mut visible: Vec<ListedPoint> = session
        .store()
        .visible_entries(&surface)
        .map(|entry| ListedPoint::from(&entry.point))
        .collect();
    visible.reverse();
    if let Some(limit) = limit {
        visible.truncate(limit);
    }
    (visible, total)
}

pub fn render_table(points: &[ListedPoint]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Name",
            "Score",
            ScoreDimension::Admin.short_name(),
            ScoreDimension::Roads.short_name(),
            ScoreDimension::Facilities.short_name(),
            ScoreDimension::Buildings.short_name(),
            "Lat",
            "Lon",
            "Missing",
        ]);

    for p in points {
        let missing: Vec<&str> = p
            .links
            .iter()
            .filter_map(|link| match link {
                OsmLink::Missing { warning } => Some(*warning),
                OsmLink::Link { .. } => None,
            })
            .collect();
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(fmt1(p.score)),
            Cell::new(fmt1(p.admin)),
            Cell::new(fmt1(p.roads)),
            Cell::new(fmt1(p.facilities)),
            Cell::new(fmt1(p.buildings)),
            Cell::new(format!("{:.4}", p.lat)),
            Cell::new(format!("{:.4}", p.lon)),
            Cell::new(missing.join(", ")),
        ]);
    }
    table
}

pub fn render_json(points: &[ListedPoint], total: usize) -> Result<String> {
    let output = ListOutput {
        total,
        visible: points.len(),
        source: DATA_SOURCE_URL,
        points,
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize points")
}

pub fn list_points(config: ListConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let paths = resolve_data_paths(&config.paths, &settings)?;
    let (points, report) = load_dataset(&paths)?;
    if report.skipped > 0 {
        eprintln!(
            "{} skipped {} invalid rows",
            "warning:".yellow(),
            report.skipped
        );
    }

    let (visible, total) = collect_visible(points, &config.filters, config.limit);

    match config.format {
        OutputFormat::Json => println!("{}", render_json(&visible, total)?),
        OutputFormat::Table => {
            println!("{}", render_table(&visible));
            println!(
                "{} of {} points shown",
                visible.len().to_string().bold(),
                total
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_range_arg;
    use crate::point::test_support::{point_with_score, sample_point};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_filters_lists_everything_highest_first() {
        let points = vec![point_with_score(10.0), point_with_score(90.0)];
        let (visible, total) = collect_visible(points, &FilterArgs::default(), None);
        assert_eq!(total, 2);
        let scores: Vec<f64> = visible.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![90.0, 10.0]);
    }

    #[test]
    fn test_score_range_and_flag() {
        let filters = FilterArgs {
            score: Some(parse_range_arg("50:60").unwrap()),
            no_node: true,
            ..FilterArgs::default()
        };
        let mut with_node = sample_point();
        with_node.node = 99;
        let points = vec![sample_point(), with_node, point_with_score(80.0)];

        let (visible, total) = collect_visible(points, &filters, None);

        assert_eq!(total, 3);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "广东省广州市天河区");
    }

    #[test]
    fn test_limit() {
        let points = (0..10).map(|i| point_with_score(i as f64 * 10.0)).collect();
        let (visible, _) = collect_visible(points, &FilterArgs::default(), Some(3));
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].score, 90.0);
    }

    #[test]
    fn test_filter_commands_skip_unset_arguments() {
        let filters = FilterArgs {
            roads: Some(parse_range_arg(":10").unwrap()),
            no_building: true,
            ..FilterArgs::default()
        };
        assert_eq!(
            filter_commands(&filters),
            vec![
                MapCommand::SetBounds {
                    dimension: ScoreDimension::Roads,
                    min: 0.0,
                    max: 10.0
                },
                MapCommand::SetFlag {
                    flag: BooleanFlag::NoBuilding,
                    on: true
                },
            ]
        );
    }

    #[test]
    fn test_json_output_shape() {
        let (visible, total) = collect_visible(vec![sample_point()], &FilterArgs::default(), None);
        let json: serde_json::Value = serde_json::from_str(&render_json(&visible, total).unwrap()).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["visible"], 1);
        assert_eq!(json["points"][0]["color"], "rgb(80,145,30)");
        assert_eq!(json["points"][0]["links"][1]["kind"], "missing");
    }
}
