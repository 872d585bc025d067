//! Configuration loaded from `.townmap.toml`.
//!
//! Lookup order: an explicit `--config` path, then `.townmap.toml` in the
//! current directory and its ancestors, then `townmap/config.toml` under the
//! user config directory. Missing files mean defaults. Sections with invalid
//! values are replaced by their defaults with a warning.

use crate::errors::TownmapError;
use crate::store::MarkerStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".townmap.toml";

/// Zoom range the map accepts.
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 18.0;

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TownmapConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub marker: MarkerStyle,
    #[serde(default)]
    pub data: DataConfig,
}

/// Initial view of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
        }
    }
}

fn default_center_lat() -> f64 {
    35.0
}

fn default_center_lon() -> f64 {
    105.0
}

fn default_zoom() -> f64 {
    5.0
}

/// Data files loaded when none are given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.center_lat) {
            return Err(format!("center_lat {} out of range", self.center_lat));
        }
        if !(-180.0..=180.0).contains(&self.center_lon) {
            return Err(format!("center_lon {} out of range", self.center_lon));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(format!(
                "zoom {} outside [{MIN_ZOOM}, {MAX_ZOOM}]",
                self.zoom
            ));
        }
        Ok(())
    }
}

fn validate_marker(style: &MarkerStyle) -> Result<(), String> {
    for (name, value) in [
        ("fill_opacity", style.fill_opacity),
        ("opacity", style.opacity),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("{name} {value} outside [0, 1]"));
        }
    }
    if !(style.weight >= 0.0) {
        return Err(format!("weight {} must be non-negative", style.weight));
    }
    Ok(())
}

/// Parse TOML and replace any invalid section with its defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<TownmapConfig, String> {
    let mut config = toml::from_str::<TownmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.map.validate() {
        log::warn!("Invalid [map] settings: {}. Using defaults.", e);
        config.map = MapConfig::default();
    }
    if let Err(e) = validate_marker(&config.marker) {
        log::warn!("Invalid [marker] settings: {}. Using defaults.", e);
        config.marker = MarkerStyle::default();
    }

    Ok(config)
}

/// Load an explicitly requested file; any failure is an error.
pub fn load_config_from(path: &Path) -> Result<TownmapConfig, TownmapError> {
    let contents = fs::read_to_string(path).map_err(|e| TownmapError::io(path, e))?;
    let mut config =
        parse_and_validate_config(&contents).map_err(|e| TownmapError::config(path, e))?;
    resolve_data_paths(&mut config, path);
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Data paths in a config file are relative to that file.
fn resolve_data_paths(config: &mut TownmapConfig, config_path: &Path) {
    let Some(base) = config_path.parent() else {
        return;
    };
    for p in &mut config.data.paths {
        if p.is_relative() {
            *p = base.join(&*p);
        }
    }
}

fn try_load_config_from_path(config_path: &Path) -> Option<TownmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(mut config) => {
            resolve_data_paths(&mut config, config_path);
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` and up to `max_depth - 1` of its ancestors.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("townmap").join("config.toml"))
}

/// Search the usual locations, falling back to defaults.
pub fn load_config() -> TownmapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TownmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config found. Using default config.");
            TownmapConfig::default()
        })
}

/// Contents written by `townmap init`.
pub fn default_config_toml() -> String {
    r#"# townmap configuration

[map]
# Initial view: centre of mainland China
center_lat = 35.0
center_lon = 105.0
zoom = 5

[marker]
fill_opacity = 0.9
opacity = 1.0
weight = 0.6

[data]
# CSV files or directories of CSV files, relative to this file
paths = []
"#
    .to_string()
}

/// Write a default config into `dir`. Refuses to overwrite unless `force`.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf, TownmapError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(TownmapError::config(
            &path,
            "configuration file already exists. Use --force to overwrite.",
        ));
    }
    fs::write(&path, default_config_toml()).map_err(|e| TownmapError::io(&path, e))?;
    Ok(path)
}
