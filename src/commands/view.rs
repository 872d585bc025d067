use super::{load_dataset, resolve_config, resolve_data_paths};
use crate::tui::MapExplorer;
use crate::tui::viewport::clamp_zoom;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    /// Overrides `[map] zoom`.
    pub zoom: Option<f64>,
}

pub fn view_map(config: ViewConfig) -> Result<()> {
    let mut settings = resolve_config(config.config.as_deref())?;
    if let Some(zoom) = config.zoom {
        let clamped = clamp_zoom(zoom);
        if clamped != zoom {
            warn!(requested = zoom, used = clamped, "zoom out of range");
        }
        settings.map.zoom = clamped;
    }

    let paths = resolve_data_paths(&config.paths, &settings)?;
    let (points, report) = load_dataset(&paths)?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        "opening map"
    );

    let mut explorer = MapExplorer::new(points, &settings.map, &settings.marker)?;
    explorer.run()
}
