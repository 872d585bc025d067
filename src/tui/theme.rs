//! Colors and styles for the map explorer.

use crate::encoding::Rgb;
use crate::filter::TrackGradient;
use ratatui::style::{Color, Modifier, Style};

/// Muted chrome around a colourful map.
pub struct Theme {
    /// Focused panel rows and borders
    pub primary: Color,
    /// Checked boxes and success messages
    pub success: Color,
    /// Unfocused labels and hints
    pub muted: Color,
    pub text: Color,
    /// World outline on the canvas
    pub coastline: Color,
    /// Selected span of a slider track
    pub track_active: Color,
    /// Track outside the selected span
    pub track_inactive: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            coastline: Color::Gray,
            track_active: hex_color(TrackGradient::ACTIVE).unwrap_or(Color::Blue),
            track_inactive: hex_color(TrackGradient::INACTIVE).unwrap_or(Color::Gray),
        }
    }

    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    /// Label of a filter row, highlighted when focused.
    pub fn row_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn thumb_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(self.text).add_modifier(Modifier::BOLD)
        }
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Terminal colour for a marker fill.
pub fn marker_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Parse `#rrggbb`.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
