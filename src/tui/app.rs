//! Application state for the map explorer.

use super::actions::{ActionContext, FocusKind};
use super::detail_panel::{render_detail_panel, DetailPanel};
use super::filter_panel::{render_filter_panel, FilterPanelState, FilterRow};
use super::layout::calculate_layout;
use super::map_view::{render_map, MapViewState};
use super::navigation;
use super::surface::CanvasSurface;
use super::theme::Theme;
use super::viewport::Viewport;
use crate::config::MapConfig;
use crate::filter::Thumb;
use crate::point::{PointRecord, ScoreDimension};
use crate::store::{MapSession, MarkerStyle};
use crossterm::event::Event;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str =
    "↑↓ filter  ←→ move  tab thumb  space toggle  r reset  +/- zoom  hjkl pan  [ ] step  c copy  q quit";

/// Main application state.
pub struct MapApp {
    pub(super) session: MapSession,
    pub(super) surface: CanvasSurface,
    pub(super) viewport: Viewport,
    pub(super) detail: DetailPanel,
    /// Focused filter-panel row.
    pub(super) focus: usize,
    pub(super) active_thumb: Thumb,
    /// Position among visible markers for `[` / `]`.
    pub(super) cursor: Option<usize>,
    pub(super) status_message: Option<String>,
    /// Inner map area from the last render.
    pub(super) map_area: Rect,
    theme: Theme,
}

impl MapApp {
    pub fn new(points: Vec<PointRecord>, map: &MapConfig, style: &MarkerStyle) -> Self {
        let viewport = Viewport::new(map.center_lon, map.center_lat, map.zoom);
        let mut surface = CanvasSurface::new();
        let session = MapSession::load(points, viewport.zoom, style, &mut surface);

        Self {
            session,
            surface,
            viewport,
            detail: DetailPanel::new(),
            focus: 0,
            active_thumb: Thumb::Min,
            cursor: None,
            status_message: None,
            map_area: Rect::new(0, 0, 80, 24),
            theme: Theme::default_theme(),
        }
    }

    /// Handle one terminal event; returns true when the user asked to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        navigation::handle_event(self, event)
    }

    pub fn session(&self) -> &MapSession {
        &self.session
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selected_point(&self) -> Option<&PointRecord> {
        self.detail.point()
    }

    pub fn focus_row(&self) -> FilterRow {
        FilterRow::from_index(self.focus).unwrap_or(FilterRow::Slider(ScoreDimension::Total))
    }

    pub fn active_thumb(&self) -> Thumb {
        self.active_thumb
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn map_area(&self) -> Rect {
        self.map_area
    }

    pub fn set_map_area(&mut self, area: Rect) {
        self.map_area = area;
    }

    /// Guard inputs for the pure action functions.
    pub fn action_context(&self) -> ActionContext {
        ActionContext {
            focus: match self.focus_row() {
                FilterRow::Slider(_) => FocusKind::Slider,
                FilterRow::Checkbox(_) => FocusKind::Checkbox,
            },
            has_selection: self.detail.point().is_some(),
            has_visible: self.surface.drawn_count() > 0,
            map_area: self.map_area,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let layout = calculate_layout(frame.area());

        let title = format!(
            " townmap  zoom {:.0}  {} / {} shown ",
            self.viewport.zoom,
            self.surface.drawn_count(),
            self.surface.marker_count()
        );
        let map_state = MapViewState {
            surface: &self.surface,
            viewport: &self.viewport,
            selected: self.detail.point().map(|p| (p.lon, p.lat)),
            title,
        };
        self.map_area = render_map(frame, layout.map, &map_state, &self.theme);

        if let Some(area) = layout.filters {
            let state = FilterPanelState {
                ranges: self.session.ranges(),
                flags: self.session.flags(),
                focus: self.focus,
                active_thumb: self.active_thumb,
            };
            render_filter_panel(frame, area, &state, &self.theme);
        }
        if let Some(area) = layout.detail {
            render_detail_panel(frame, area, &self.detail, &self.theme);
        }

        let status = match &self.status_message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(self.theme.success),
            )),
            None => Line::from(Span::styled(KEY_HINTS, self.theme.hint_style())),
        };
        frame.render_widget(Paragraph::new(status), layout.status);
    }
}
