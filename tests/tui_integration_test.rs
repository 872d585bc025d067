//! Drives the map explorer state with synthetic terminal events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use townmap::config::MapConfig;
use townmap::filter::{BooleanFlag, Thumb};
use townmap::tui::filter_panel::FilterRow;
use townmap::tui::MapApp;
use townmap::{MarkerStyle, PointRecord, ScoreDimension};

fn point(score: f64, lon: f64, lat: f64, node: i64) -> PointRecord {
    PointRecord {
        lat,
        lon,
        score,
        score_1: score * 0.2,
        score_2: score * 0.3,
        score_3: score * 0.3,
        score_4: score * 0.2,
        node,
        boundary: 10,
        addr2: "四川省".to_string(),
        addr3: "成都市".to_string(),
        addr4: format!("镇{score}"),
    }
}

fn app() -> MapApp {
    let map = MapConfig {
        center_lat: 30.0,
        center_lon: 110.0,
        zoom: 5.0,
    };
    let points = vec![
        point(0.5, 108.0, 29.0, -1),
        point(50.0, 110.0, 30.0, 7),
        point(90.0, 112.0, 31.0, -1),
    ];
    let mut app = MapApp::new(points, &map, &MarkerStyle::default());
    app.set_map_area(Rect::new(0, 0, 80, 40));
    app
}

fn press(app: &mut MapApp, code: KeyCode) -> bool {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn click(app: &mut MapApp, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

#[test]
fn test_initial_state() {
    let app = app();
    assert_eq!(app.surface().attached_count(), 3);
    assert_eq!(app.focus_row(), FilterRow::Slider(ScoreDimension::Total));
    assert_eq!(app.active_thumb(), Thumb::Min);
    assert!(app.selected_point().is_none());
}

#[test]
fn test_nudging_min_thumb_hides_low_scores() {
    let mut app = app();
    press(&mut app, KeyCode::Right);

    let range = app.session().ranges().range(ScoreDimension::Total);
    assert_eq!((range.min, range.max), (1.0, 100.0));
    assert_eq!(app.surface().attached_count(), 2);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.surface().attached_count(), 3);
}

#[test]
fn test_tab_moves_max_thumb() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_thumb(), Thumb::Max);

    for _ in 0..15 {
        press(&mut app, KeyCode::Left);
    }
    let range = app.session().ranges().range(ScoreDimension::Total);
    assert_eq!(range.max, 85.0);
    assert_eq!(app.surface().attached_count(), 2);
}

#[test]
fn test_checkbox_toggle_and_reset() {
    let mut app = app();
    for _ in 0..ScoreDimension::COUNT {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.focus_row(), FilterRow::Checkbox(BooleanFlag::NoNode));

    press(&mut app, KeyCode::Char(' '));
    assert!(app.session().flags().is_set(BooleanFlag::NoNode));
    assert_eq!(app.surface().attached_count(), 2);

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.session().flags().is_set(BooleanFlag::NoNode));
    assert_eq!(app.surface().attached_count(), 3);
    assert_eq!(app.status_message(), Some("Filters reset"));
}

#[test]
fn test_focus_wraps_upwards() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.focus_row(), FilterRow::Checkbox(BooleanFlag::NoBuilding));
}

#[test]
fn test_zoom_keys_resize_markers() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.viewport().zoom, 6.0);
    assert_eq!(app.session().zoom(), 6.0);

    let handle = app.session().store().entries()[0].handle;
    let radius = app.surface().spec(handle).map(|s| s.radius);
    assert_eq!(radius, Some(2.7 * 3.0 / 2.0));

    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.session().zoom(), 3.0);
    assert_eq!(app.surface().spec(handle).map(|s| s.radius), Some(0.0));
}

#[test]
fn test_step_selection_centres_map() {
    let mut app = app();
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.selected_point().map(|p| p.score), Some(0.5));
    assert_eq!(app.viewport().center_lon, 108.0);

    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.selected_point().map(|p| p.score), Some(90.0));

    press(&mut app, KeyCode::Esc);
    assert!(app.selected_point().is_none());
}

#[test]
fn test_click_selects_nearest_marker() {
    let mut app = app();
    // Centre cell of the 80x40 map is over (110, 30)
    click(&mut app, 40, 20);
    assert_eq!(app.selected_point().map(|p| p.score), Some(50.0));
    assert!(app
        .status_message()
        .is_some_and(|s| s.contains("score 50.0")));

    // Far corner has nothing nearby
    click(&mut app, 0, 0);
    assert_eq!(app.status_message(), Some("No marker here"));
}

#[test]
fn test_hidden_markers_cannot_be_clicked() {
    let mut app = app();
    for _ in 0..ScoreDimension::COUNT {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char(' '));
    click(&mut app, 40, 20);
    assert!(app.selected_point().is_none());
}

#[test]
fn test_quit() {
    let mut app = app();
    assert!(!press(&mut app, KeyCode::Char('x')));
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    ))));
}

#[test]
fn test_render_full_layout() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Filters"));
    assert!(text.contains("Total"));
    assert!(text.contains("No place node"));
    assert!(text.contains("3 / 3 shown"));
    // The map area is remembered for mouse hit-testing
    assert!(app.map_area().width > 0);
    assert!(app.map_area().width < 140);
}

fn app_at_zoom(zoom: f64) -> MapApp {
    let map = MapConfig {
        center_lat: 30.0,
        center_lon: 110.0,
        zoom,
    };
    let mut app = MapApp::new(vec![point(50.0, 110.0, 30.0, 7)], &map, &MarkerStyle::default());
    app.set_map_area(Rect::new(0, 0, 80, 40));
    app
}

#[test]
fn test_undrawn_markers_cannot_be_selected() {
    // Radius is negative below zoom 3, so nothing is painted
    let mut app = app_at_zoom(2.0);
    let handle = app.session().store().entries()[0].handle;
    assert!(app.surface().spec(handle).is_some_and(|s| s.radius < 0.0));
    assert_eq!(app.surface().attached_count(), 1);
    assert_eq!(app.surface().drawn_count(), 0);

    press(&mut app, KeyCode::Char(']'));
    assert!(app.selected_point().is_none());

    click(&mut app, 40, 20);
    assert!(app.selected_point().is_none());
    assert_eq!(app.status_message(), Some("No marker here"));

    // Zooming in makes it drawable again
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.selected_point().map(|p| p.score), Some(50.0));
}

#[test]
fn test_title_counts_only_drawn_markers() {
    let mut app = app_at_zoom(2.0);
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("0 / 1 shown"));
}
