//! Loading point records from the CSV dataset.

pub mod csv_loader;
pub mod normalize;

pub use csv_loader::{expand_paths, load_all, load_csv, validate_record, LoadReport};
pub use normalize::normalize_addresses;
