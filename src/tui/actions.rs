//! Pure action determination for explorer input.
//!
//! - Pure core: `determine_key_action` / `determine_mouse_action` map an input
//!   event plus context to an action
//! - Imperative shell: `navigation::execute_action` performs the mutations

use super::viewport::{contains, PanDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Nudge step for one Left/Right press; Shift multiplies it.
pub const NUDGE_STEP: f64 = 1.0;
pub const COARSE_NUDGE_FACTOR: f64 = 5.0;

/// Everything the user can ask the explorer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerAction {
    Quit,

    /// Move filter-panel focus to the previous row.
    FocusPrev,
    /// Move filter-panel focus to the next row.
    FocusNext,
    /// Move the active thumb of the focused slider.
    Nudge(f64),
    /// Switch which thumb Left/Right moves.
    SwapThumb,
    /// Flip the focused checkbox.
    ToggleFlag,
    ResetFilters,

    ZoomIn,
    ZoomOut,
    Pan(PanDirection),

    /// Select the marker nearest to a clicked cell.
    SelectAt { column: u16, row: u16 },
    SelectPrev,
    SelectNext,
    ClearSelection,

    /// Copy the selected point's link.
    CopyLink,
}

/// Which kind of filter row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    Slider,
    Checkbox,
}

/// State the guards need, copied out of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub focus: FocusKind,
    pub has_selection: bool,
    pub has_visible: bool,
    /// Drawing area of the map, for mouse hit-testing.
    pub map_area: Rect,
}

impl ActionContext {
    #[cfg(test)]
    pub fn slider() -> Self {
        Self {
            focus: FocusKind::Slider,
            has_selection: false,
            has_visible: true,
            map_area: Rect::new(0, 0, 80, 40),
        }
    }

    #[cfg(test)]
    pub fn checkbox() -> Self {
        Self {
            focus: FocusKind::Checkbox,
            ..Self::slider()
        }
    }
}

/// Pure function: which action does `key` trigger?
pub fn determine_key_action(key: KeyEvent, ctx: ActionContext) -> Option<ExplorerAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ExplorerAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(ExplorerAction::Quit),

        // Filter panel
        KeyCode::Up => Some(ExplorerAction::FocusPrev),
        KeyCode::Down => Some(ExplorerAction::FocusNext),
        KeyCode::Left | KeyCode::Right if ctx.focus == FocusKind::Slider => {
            let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
                NUDGE_STEP * COARSE_NUDGE_FACTOR
            } else {
                NUDGE_STEP
            };
            let delta = if key.code == KeyCode::Left { -step } else { step };
            Some(ExplorerAction::Nudge(delta))
        }
        KeyCode::Tab | KeyCode::BackTab if ctx.focus == FocusKind::Slider => {
            Some(ExplorerAction::SwapThumb)
        }
        KeyCode::Char(' ') | KeyCode::Enter if ctx.focus == FocusKind::Checkbox => {
            Some(ExplorerAction::ToggleFlag)
        }
        KeyCode::Char('r') => Some(ExplorerAction::ResetFilters),

        // Map
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ExplorerAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(ExplorerAction::ZoomOut),
        KeyCode::Char('h') => Some(ExplorerAction::Pan(PanDirection::Left)),
        KeyCode::Char('l') => Some(ExplorerAction::Pan(PanDirection::Right)),
        KeyCode::Char('k') => Some(ExplorerAction::Pan(PanDirection::Up)),
        KeyCode::Char('j') => Some(ExplorerAction::Pan(PanDirection::Down)),

        // Selection - needs something to select
        KeyCode::Char('[') if ctx.has_visible => Some(ExplorerAction::SelectPrev),
        KeyCode::Char(']') if ctx.has_visible => Some(ExplorerAction::SelectNext),
        KeyCode::Esc if ctx.has_selection => Some(ExplorerAction::ClearSelection),
        KeyCode::Char('c') if ctx.has_selection => Some(ExplorerAction::CopyLink),

        _ => None,
    }
}

/// Pure function: which action does a mouse event trigger?
///
/// Only events inside the map area count.
pub fn determine_mouse_action(mouse: MouseEvent, ctx: ActionContext) -> Option<ExplorerAction> {
    if !contains(ctx.map_area, mouse.column, mouse.row) {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ExplorerAction::SelectAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(ExplorerAction::ZoomIn),
        MouseEventKind::ScrollDown => Some(ExplorerAction::ZoomOut),
        _ => None,
    }
}
