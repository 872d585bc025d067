use crate::errors::TownmapError;
use crate::filter::BooleanFlag;
use crate::point::ScoreDimension;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "townmap")]
#[command(about = "Terminal map of OSM feature completeness for townships", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive map
    View {
        /// CSV files or directories of CSV files (defaults to [data] paths in config)
        paths: Vec<PathBuf>,

        /// Configuration file (defaults to searching for .townmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Initial zoom level (1-18)
        #[arg(short, long, value_parser = parse_zoom)]
        zoom: Option<f64>,

        /// Write logs here while the map owns the terminal
        #[arg(long = "log-file", env = "TOWNMAP_LOG_FILE")]
        log_file: Option<PathBuf>,
    },

    /// Print the points that pass the given filters
    List {
        /// CSV files or directories of CSV files (defaults to [data] paths in config)
        paths: Vec<PathBuf>,

        /// Configuration file (defaults to searching for .townmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show only the first N visible points
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Initialize a default .townmap.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// `MIN:MAX` bounds for one score dimension. Either side may be omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeArg {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeArg {
    /// Fill omitted sides from the dimension's full span.
    pub fn resolve(self, dimension: ScoreDimension) -> (f64, f64) {
        (
            self.min.unwrap_or(0.0),
            self.max.unwrap_or_else(|| dimension.slider_max()),
        )
    }
}

pub fn parse_range_arg(s: &str) -> Result<RangeArg, TownmapError> {
    let (lo, hi) = s
        .split_once(':')
        .ok_or_else(|| TownmapError::invalid_argument("range", format!("'{s}' is not MIN:MAX")))?;
    Ok(RangeArg {
        min: parse_bound(lo)?,
        max: parse_bound(hi)?,
    })
}

fn parse_bound(s: &str) -> Result<Option<f64>, TownmapError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| TownmapError::invalid_argument("range", format!("'{s}' is not a number")))
}

/// Zoom must be a finite number; range clamping happens in the view command.
pub fn parse_zoom(s: &str) -> Result<f64, TownmapError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TownmapError::invalid_argument("zoom", format!("'{s}' is not a number")))
}

/// Filter arguments shared by headless commands.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Total score range, e.g. 40:80
    #[arg(long, value_parser = parse_range_arg)]
    pub score: Option<RangeArg>,

    /// Admin nodes & boundaries range (0-20)
    #[arg(long, value_parser = parse_range_arg)]
    pub admin: Option<RangeArg>,

    /// Roads & transport range (0-30)
    #[arg(long, value_parser = parse_range_arg)]
    pub roads: Option<RangeArg>,

    /// Public & commercial facilities range (0-30)
    #[arg(long, value_parser = parse_range_arg)]
    pub facilities: Option<RangeArg>,

    /// Buildings & land use range (0-20)
    #[arg(long, value_parser = parse_range_arg)]
    pub buildings: Option<RangeArg>,

    /// Only points without an OSM node
    #[arg(long)]
    pub no_node: bool,

    /// Only points without an administrative boundary
    #[arg(long)]
    pub no_boundary: bool,

    /// Only points without roads
    #[arg(long)]
    pub no_road: bool,

    /// Only points without buildings
    #[arg(long)]
    pub no_building: bool,
}

impl FilterArgs {
    pub fn range(&self, dimension: ScoreDimension) -> Option<RangeArg> {
        match dimension {
            ScoreDimension::Total => self.score,
            ScoreDimension::Admin => self.admin,
            ScoreDimension::Roads => self.roads,
            ScoreDimension::Facilities => self.facilities,
            ScoreDimension::Buildings => self.buildings,
        }
    }

    pub fn flag(&self, flag: BooleanFlag) -> bool {
        match flag {
            BooleanFlag::NoNode => self.no_node,
            BooleanFlag::NoBoundary => self.no_boundary,
            BooleanFlag::NoRoad => self.no_road,
            BooleanFlag::NoBuilding => self.no_building,
        }
    }
}
