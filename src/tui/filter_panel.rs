//! Filter panel: five dual-thumb sliders and four checkboxes.

use super::theme::Theme;
use crate::filter::{BooleanFilterSet, BooleanFlag, RangeFilterSet, Thumb, TrackGradient};
use crate::format::fmt1;
use crate::point::ScoreDimension;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TRACK_ACTIVE: &str = "━";
const TRACK_INACTIVE: &str = "─";
const THUMB: &str = "●";

/// One focusable row of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Slider(ScoreDimension),
    Checkbox(BooleanFlag),
}

impl FilterRow {
    pub const COUNT: usize = ScoreDimension::COUNT + BooleanFlag::COUNT;

    /// Rows top to bottom.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ScoreDimension::COUNT {
            ScoreDimension::from_index(index).map(FilterRow::Slider)
        } else {
            BooleanFlag::all()
                .get(index - ScoreDimension::COUNT)
                .copied()
                .map(FilterRow::Checkbox)
        }
    }
}

/// Lines the panel needs: two per slider, one per checkbox, one gap, borders.
pub fn panel_height() -> u16 {
    (ScoreDimension::COUNT * 2 + BooleanFlag::COUNT + 1 + 2) as u16
}

/// What the panel draws from.
pub struct FilterPanelState<'a> {
    pub ranges: &'a RangeFilterSet,
    pub flags: &'a BooleanFilterSet,
    pub focus: usize,
    pub active_thumb: Thumb,
}

/// Track cells for one slider, thumbs included.
pub fn track_spans(
    gradient: TrackGradient,
    width: usize,
    active_thumb: Option<Thumb>,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let min_cell = TrackGradient::thumb_cell(gradient.min_percent, width);
    let max_cell = TrackGradient::thumb_cell(gradient.max_percent, width);

    (0..width)
        .map(|i| {
            if i == max_cell {
                Span::styled(THUMB, theme.thumb_style(active_thumb == Some(Thumb::Max)))
            } else if i == min_cell {
                Span::styled(THUMB, theme.thumb_style(active_thumb == Some(Thumb::Min)))
            } else if gradient.is_active_cell(i, width) {
                Span::styled(TRACK_ACTIVE, Style::default().fg(theme.track_active))
            } else {
                Span::styled(TRACK_INACTIVE, Style::default().fg(theme.track_inactive))
            }
        })
        .collect()
}

pub fn panel_lines(state: &FilterPanelState, track_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(FilterRow::COUNT * 2);

    for index in 0..FilterRow::COUNT {
        let focused = index == state.focus;
        match FilterRow::from_index(index) {
            Some(FilterRow::Slider(dimension)) => {
                let range = state.ranges.range(dimension);
                lines.push(Line::from(vec![
                    Span::styled(dimension.display_name(), theme.row_style(focused)),
                    Span::styled(
                        format!("  {} - {}", fmt1(range.min), fmt1(range.max)),
                        theme.hint_style(),
                    ),
                ]));
                let gradient = state.ranges.positions(dimension).gradient();
                let thumb = focused.then_some(state.active_thumb);
                lines.push(Line::from(track_spans(gradient, track_width, thumb, theme)));
            }
            Some(FilterRow::Checkbox(flag)) => {
                if index == ScoreDimension::COUNT {
                    lines.push(Line::from(""));
                }
                let mark = if state.flags.is_set(flag) { "[x] " } else { "[ ] " };
                let mark_style = if state.flags.is_set(flag) {
                    Style::default().fg(theme.success)
                } else {
                    theme.hint_style()
                };
                lines.push(Line::from(vec![
                    Span::styled(mark, mark_style),
                    Span::styled(flag.display_name(), theme.row_style(focused)),
                ]));
            }
            None => {}
        }
    }
    lines
}

pub fn render_filter_panel(frame: &mut Frame, area: Rect, state: &FilterPanelState, theme: &Theme) {
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let track_width = usize::from(block.inner(area).width);
    let paragraph = Paragraph::new(panel_lines(state, track_width, theme)).block(block);
    frame.render_widget(paragraph, area);
}
