//! Error types for townmap operations.
//!
//! The library reports failures through [`TownmapError`]. The binary and the
//! terminal front end wrap these in `anyhow` with extra context at the edges.
//!
//! Only loading and configuration can fail. Filtering, colouring and marker
//! synchronisation are infallible: an inverted range is corrected in place and
//! never reported.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TownmapError {
    /// Reading a data or configuration file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer could not read a file (bad quoting, invalid UTF-8,
    /// missing header row).
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A file parsed but contributed no usable rows.
    #[error("no valid points in {path} ({skipped} rows rejected)")]
    NoValidRows { path: PathBuf, skipped: usize },

    /// No data files were found for the given arguments.
    #[error("no CSV files found under {0}")]
    NoDataFiles(PathBuf),

    /// A configuration file exists but cannot be used.
    #[error("configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A command-line filter argument is malformed.
    #[error("invalid {arg}: {message}")]
    InvalidArgument { arg: String, message: String },
}

impl TownmapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(arg: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg: arg.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this by changing input files or arguments.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Csv { .. }
            | Self::NoValidRows { .. }
            | Self::NoDataFiles(_)
            | Self::Config { .. }
            | Self::InvalidArgument { .. } => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, TownmapError>;
