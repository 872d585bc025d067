//! Responsive layout for different terminal sizes.

use super::filter_panel::panel_height;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the side panel in columns.
const SIDE_PANEL_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Map with filter and detail panels (>= 90 cols)
    Full,
    /// Map only; panels hidden (< 90 cols)
    MapOnly,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=89 => Self::MapOnly,
            _ => Self::Full,
        }
    }

    pub fn shows_panels(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Screen regions of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerLayout {
    pub map: Rect,
    pub filters: Option<Rect>,
    pub detail: Option<Rect>,
    pub status: Rect,
}

pub fn calculate_layout(area: Rect) -> ExplorerLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);
    let (body, status) = (rows[0], rows[1]);

    if !LayoutMode::from_terminal_width(area.width).shows_panels() {
        return ExplorerLayout {
            map: body,
            filters: None,
            detail: None,
            status,
        };
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(body);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(panel_height()), Constraint::Min(3)])
        .split(columns[1]);

    ExplorerLayout {
        map: columns[0],
        filters: Some(side[0]),
        detail: Some(side[1]),
        status,
    }
}
