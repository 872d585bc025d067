//! Interactive terminal map of the loaded points.
//!
//! Markers are painted on a braille canvas over a world outline. The side
//! panel holds the score sliders, the missing-feature checkboxes and the
//! details of the selected point.
//!
//! # Usage
//!
//! ```rust,no_run
//! use townmap::config::TownmapConfig;
//! use townmap::tui::MapExplorer;
//!
//! let config = TownmapConfig::default();
//! let mut explorer = MapExplorer::new(Vec::new(), &config.map, &config.marker)?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod clipboard;
pub mod detail_panel;
pub mod filter_panel;
pub mod layout;
pub mod map_view;
pub mod navigation;
pub mod surface;
pub mod theme;
pub mod viewport;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::MapConfig;
use crate::point::PointRecord;
use crate::store::MarkerStyle;
pub use app::MapApp;
pub use surface::CanvasSurface;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the terminal while the map is open.
pub struct MapExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: MapApp,
    restored: bool,
}

impl MapExplorer {
    /// Render `points` and take over the terminal.
    pub fn new(points: Vec<PointRecord>, map: &MapConfig, style: &MarkerStyle) -> Result<Self> {
        let app = MapApp::new(points, map, style);

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app,
            restored: false,
        })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(POLL_INTERVAL)? && self.app.handle_event(event::read()?) {
                break;
            }
        }

        self.cleanup()
    }

    /// Restore the terminal.
    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for MapExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
