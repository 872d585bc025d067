//! CSV loading of point records.
//!
//! Each data file is a headered CSV with one row per settlement. Columns are
//! matched by name, so column order does not matter and unknown columns are
//! ignored. Rows that cannot be used are skipped with a warning instead of
//! failing the whole file.

use crate::errors::{Result, TownmapError};
use crate::point::{PointRecord, ScoreDimension, MISSING_ID};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Row counts from one or more files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files: usize,
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadReport {
    fn merge(&mut self, other: LoadReport) {
        self.files += other.files;
        self.loaded += other.loaded;
        self.skipped += other.skipped;
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    lat: f64,
    lon: f64,
    score: f64,
    score_1: f64,
    score_2: f64,
    score_3: f64,
    score_4: f64,
    // Exports sometimes write ids as floats ("123456.0").
    #[serde(default, deserialize_with = "csv::invalid_option")]
    node: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    boundary: Option<f64>,
    #[serde(default)]
    addr2: String,
    #[serde(default)]
    addr3: String,
    #[serde(default)]
    addr4: String,
}

impl From<RawRow> for PointRecord {
    fn from(raw: RawRow) -> Self {
        PointRecord {
            lat: raw.lat,
            lon: raw.lon,
            score: raw.score,
            score_1: raw.score_1,
            score_2: raw.score_2,
            score_3: raw.score_3,
            score_4: raw.score_4,
            node: osm_id(raw.node),
            boundary: osm_id(raw.boundary),
            addr2: raw.addr2,
            addr3: raw.addr3,
            addr4: raw.addr4,
        }
    }
}

fn osm_id(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v as i64,
        _ => MISSING_ID,
    }
}

/// Check the numeric contract the rest of the crate relies on: finite
/// coordinates and every score inside its dimension's range.
pub fn validate_record(point: &PointRecord) -> std::result::Result<(), String> {
    if !point.lat.is_finite() || !(-90.0..=90.0).contains(&point.lat) {
        return Err(format!("latitude {} out of range", point.lat));
    }
    if !point.lon.is_finite() || !(-180.0..=180.0).contains(&point.lon) {
        return Err(format!("longitude {} out of range", point.lon));
    }
    for &dim in ScoreDimension::all() {
        let value = point.score_for(dim);
        if !value.is_finite() || !(0.0..=dim.slider_max()).contains(&value) {
            return Err(format!(
                "{} {} outside [0, {}]",
                dim.short_name(),
                value,
                dim.slider_max()
            ));
        }
    }
    Ok(())
}

/// Load every valid row of one CSV file.
pub fn load_csv(path: &Path) -> Result<(Vec<PointRecord>, LoadReport)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| TownmapError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| TownmapError::csv(path, e))?
        .clone();

    let mut points = Vec::new();
    let mut report = LoadReport {
        files: 1,
        ..LoadReport::default()
    };

    for result in reader.records() {
        let record = result.map_err(|e| TownmapError::csv(path, e))?;
        let line = record.position().map_or(0, |p| p.line());

        let point: PointRecord = match record.deserialize::<RawRow>(Some(&headers)) {
            Ok(raw) => raw.into(),
            Err(e) => {
                warn!(file = %path.display(), line, error = %e, "skipping unreadable row");
                report.skipped += 1;
                continue;
            }
        };

        if let Err(reason) = validate_record(&point) {
            warn!(file = %path.display(), line, %reason, "skipping invalid row");
            report.skipped += 1;
            continue;
        }

        points.push(point);
    }

    report.loaded = points.len();
    if points.is_empty() && report.skipped > 0 {
        return Err(TownmapError::NoValidRows {
            path: path.to_path_buf(),
            skipped: report.skipped,
        });
    }

    debug!(file = %path.display(), loaded = report.loaded, skipped = report.skipped, "csv loaded");
    Ok((points, report))
}

/// Expand the given paths into data files: files are kept as given,
/// directories contribute their `*.csv` entries sorted by name.
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(path)
                .map_err(|e| TownmapError::io(path, e))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_csv_extension(p))
                .collect();
            if found.is_empty() {
                return Err(TownmapError::NoDataFiles(path.clone()));
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load all files under `paths`; the whole set is materialised before
/// returning.
///
/// A file whose rows are all invalid is skipped and counted. The load only
/// fails on it when no other file contributed a point.
pub fn load_all(paths: &[PathBuf]) -> Result<(Vec<PointRecord>, LoadReport)> {
    let files = expand_paths(paths)?;
    let mut points = Vec::new();
    let mut report = LoadReport::default();
    let mut first_rejected = None;

    for file in &files {
        match load_csv(file) {
            Ok((mut batch, file_report)) => {
                points.append(&mut batch);
                report.merge(file_report);
            }
            Err(TownmapError::NoValidRows { path, skipped }) => {
                warn!(file = %path.display(), skipped, "no valid rows, skipping file");
                report.merge(LoadReport {
                    files: 1,
                    loaded: 0,
                    skipped,
                });
                if first_rejected.is_none() {
                    first_rejected = Some(TownmapError::NoValidRows { path, skipped });
                }
            }
            Err(e) => return Err(e),
        }
    }

    if points.is_empty() {
        if let Some(err) = first_rejected {
            return Err(err);
        }
    }

    info!(
        files = report.files,
        loaded = report.loaded,
        skipped = report.skipped,
        "dataset loaded"
    );
    Ok((points, report))
}
