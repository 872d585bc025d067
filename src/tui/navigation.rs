//! Input handling: the imperative shell around the pure action functions.
//!
//! Every state change goes through [`MapSession::dispatch`], which finishes
//! re-synchronising the markers before it returns, so the next event always
//! sees a consistent map.
//!
//! [`MapSession::dispatch`]: crate::store::MapSession::dispatch

use super::actions::{determine_key_action, determine_mouse_action, ExplorerAction};
use super::app::MapApp;
use super::clipboard::copy_to_clipboard;
use super::filter_panel::FilterRow;
use super::viewport::DOTS_PER_CELL_X;
use crate::filter::Thumb;
use crate::format::{popup_summary, preferred_link};
use crate::store::{CommandOutcome, MapCommand, MarkerId};
use crossterm::event::{Event, KeyEventKind};
use tracing::debug;

/// How far from a click (in cells) a marker may be and still be picked.
const PICK_TOLERANCE_CELLS: f64 = 2.0;

/// Handle one event and return true if the explorer should quit.
pub fn handle_event(app: &mut MapApp, event: Event) -> bool {
    let ctx = app.action_context();
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.clear_status_message();
            determine_key_action(key, ctx)
        }
        Event::Mouse(mouse) => determine_mouse_action(mouse, ctx),
        _ => None,
    };

    match action {
        Some(action) => execute_action(app, action),
        None => false,
    }
}

/// Execute an action (imperative shell).
pub fn execute_action(app: &mut MapApp, action: ExplorerAction) -> bool {
    match action {
        ExplorerAction::Quit => return true,

        ExplorerAction::FocusPrev => move_focus(app, FilterRow::COUNT - 1),
        ExplorerAction::FocusNext => move_focus(app, 1),
        ExplorerAction::SwapThumb => app.active_thumb = app.active_thumb.other(),

        ExplorerAction::Nudge(delta) => {
            if let FilterRow::Slider(dimension) = app.focus_row() {
                let thumb = app.active_thumb;
                dispatch(
                    app,
                    MapCommand::NudgeThumb {
                        dimension,
                        thumb,
                        delta,
                    },
                );
            }
        }
        ExplorerAction::ToggleFlag => {
            if let FilterRow::Checkbox(flag) = app.focus_row() {
                dispatch(app, MapCommand::ToggleFlag(flag));
            }
        }
        ExplorerAction::ResetFilters => {
            dispatch(app, MapCommand::ResetFilters);
            app.set_status_message("Filters reset");
        }

        ExplorerAction::ZoomIn => zoom(app, 1.0),
        ExplorerAction::ZoomOut => zoom(app, -1.0),
        ExplorerAction::Pan(direction) => {
            let area = app.map_area;
            app.viewport.pan(direction, area);
        }

        ExplorerAction::SelectAt { column, row } => select_at(app, column, row),
        ExplorerAction::SelectPrev => step_selection(app, false),
        ExplorerAction::SelectNext => step_selection(app, true),
        ExplorerAction::ClearSelection => {
            app.detail.clear();
            app.cursor = None;
        }

        ExplorerAction::CopyLink => {
            if let Some(point) = app.detail.point() {
                let message = copy_to_clipboard(&preferred_link(point), "link");
                app.set_status_message(message);
            }
        }
    }
    false
}

fn move_focus(app: &mut MapApp, step: usize) {
    app.focus = (app.focus + step) % FilterRow::COUNT;
    app.active_thumb = Thumb::Min;
}

fn dispatch(app: &mut MapApp, command: MapCommand) -> CommandOutcome {
    let outcome = app
        .session
        .dispatch(command, &mut app.surface, &mut app.detail);
    if let CommandOutcome::Filtered { report, .. } = outcome {
        if !report.is_noop() {
            app.cursor = None;
        }
    }
    outcome
}

fn zoom(app: &mut MapApp, delta: f64) {
    let before = app.viewport.zoom;
    let after = app.viewport.zoom_by(delta);
    if after != before {
        dispatch(app, MapCommand::Zoom(after));
    }
}

fn select(app: &mut MapApp, handle: MarkerId) -> bool {
    let found = matches!(
        dispatch(app, MapCommand::Select(handle)),
        CommandOutcome::Selected { found: true }
    );
    if found {
        if let Some(summary) = app.detail.point().map(popup_summary) {
            app.set_status_message(summary);
        }
    }
    found
}

fn select_at(app: &mut MapApp, column: u16, row: u16) {
    let Some((lon, lat)) = app.viewport.cell_to_geo(app.map_area, column, row) else {
        return;
    };
    let tolerance = PICK_TOLERANCE_CELLS * DOTS_PER_CELL_X * app.viewport.degrees_per_dot();
    match app.surface.nearest_drawn(lon, lat, tolerance) {
        Some(handle) => {
            debug!(?handle, lon, lat, "marker picked");
            select(app, handle);
        }
        None => app.set_status_message("No marker here"),
    }
}

/// Step through drawn markers in paint order, wrapping at either end.
fn step_selection(app: &mut MapApp, forward: bool) {
    let handles: Vec<MarkerId> = app
        .session
        .store()
        .visible_entries(&app.surface)
        .map(|entry| entry.handle)
        .filter(|&handle| app.surface.is_drawn(handle))
        .collect();
    if handles.is_empty() {
        return;
    }

    let n = handles.len();
    let next = match (app.cursor, forward) {
        (None, true) => 0,
        (None, false) => n - 1,
        (Some(i), true) => (i + 1) % n,
        (Some(i), false) => (i + n - 1) % n,
    };
    app.cursor = Some(next);

    if select(app, handles[next]) {
        if let Some(point) = app.detail.point() {
            let (lon, lat) = (point.lon, point.lat);
            app.viewport.center_on(lon, lat);
        }
    }
}
