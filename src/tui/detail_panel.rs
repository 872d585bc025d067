//! Side panel describing the selected point.

use super::theme::Theme;
use crate::format::{fmt1, point_links, score_breakdown, OsmLink, DATA_SOURCE_TITLE, DATA_SOURCE_URL};
use crate::point::PointRecord;
use crate::store::DetailSink;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Holds the last point a marker click delivered.
#[derive(Debug, Default, Clone)]
pub struct DetailPanel {
    point: Option<PointRecord>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(&self) -> Option<&PointRecord> {
        self.point.as_ref()
    }

    pub fn clear(&mut self) {
        self.point = None;
    }
}

impl DetailSink for DetailPanel {
    fn show(&mut self, point: &PointRecord) {
        self.point = Some(point.clone());
    }
}

/// Lines shown for `point`.
pub fn detail_lines(point: &PointRecord, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            point.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for link in point_links(point) {
        let line = match link {
            OsmLink::Link { label, url } => Line::from(vec![
                Span::styled(format!("{label}: "), theme.hint_style()),
                Span::raw(url),
            ]),
            OsmLink::Missing { warning } => {
                Line::from(Span::styled(warning, Style::default().fg(theme.warning())))
            }
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            fmt1(point.score),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.extend(
        score_breakdown(point)
            .into_iter()
            .map(|b| Line::from(format!("  {}", b.text))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(DATA_SOURCE_TITLE, theme.hint_style())));
    lines.push(Line::from(Span::styled(DATA_SOURCE_URL, theme.hint_style())));
    lines
}

pub fn render_detail_panel(frame: &mut Frame, area: Rect, panel: &DetailPanel, theme: &Theme) {
    let block = Block::default()
        .title(" Point ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(panel.point.is_some()));

    let lines = match &panel.point {
        Some(point) => detail_lines(point, theme),
        None => vec![Line::from(Span::styled(
            "Click a marker or press ] to select one",
            theme.hint_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
