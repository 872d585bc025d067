use crate::config;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    let path = config::init_config(Path::new("."), force)?;
    println!(
        "{} {} configuration file",
        "Created".green(),
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    Ok(())
}
