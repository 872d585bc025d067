//! Command implementations behind the `townmap` binary.
//!
//! - **view**: load the dataset and open the interactive map
//! - **list**: run the same filters headlessly and print the visible points
//! - **init**: write a default `.townmap.toml`

pub mod init;
pub mod list;
pub mod view;

pub use init::init_config;
pub use list::{list_points, ListConfig, ListedPoint};
pub use view::{view_map, ViewConfig};

use crate::config::{load_config, load_config_from, TownmapConfig};
use crate::errors::TownmapError;
use crate::ingest::{load_all, normalize_addresses, LoadReport};
use crate::point::PointRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Explicit `--config` wins; otherwise search the usual locations.
pub fn resolve_config(explicit: Option<&Path>) -> Result<TownmapConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Command-line paths, or the configured ones when none were given.
pub fn resolve_data_paths(cli_paths: &[PathBuf], config: &TownmapConfig) -> Result<Vec<PathBuf>> {
    if !cli_paths.is_empty() {
        return Ok(cli_paths.to_vec());
    }
    if config.data.paths.is_empty() {
        return Err(TownmapError::invalid_argument(
            "paths",
            "no data files given and no [data] paths configured",
        )
        .into());
    }
    Ok(config.data.paths.clone())
}

/// Load and normalise every point under `paths`.
pub fn load_dataset(paths: &[PathBuf]) -> Result<(Vec<PointRecord>, LoadReport)> {
    let (mut points, report) = load_all(paths).context("Failed to load dataset")?;
    normalize_addresses(&mut points);
    Ok((points, report))
}
