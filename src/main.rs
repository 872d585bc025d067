use anyhow::Result;
use clap::Parser;
use townmap::cli::{Cli, Commands};
use townmap::commands::{init_config, list_points, view_map, ListConfig, ViewConfig};
use townmap::observability::{init_logging, install_panic_hook, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_panic_hook();

    match cli.command {
        Commands::View {
            paths,
            config,
            zoom,
            log_file,
        } => {
            init_logging(&LogTarget::for_command(true, log_file.as_deref()))?;
            view_map(ViewConfig {
                paths,
                config,
                zoom,
            })
        }
        Commands::List {
            paths,
            config,
            filters,
            format,
            limit,
        } => {
            init_logging(&LogTarget::Stderr)?;
            list_points(ListConfig {
                paths,
                config,
                filters,
                format,
                limit,
            })
        }
        Commands::Init { force } => {
            init_logging(&LogTarget::Stderr)?;
            init_config(force)
        }
    }
}
