//! Styling utilities and color schemes

use crate::types::Method;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn get_method_color(method: Method) -> Color {
    match method {
        Method::Get => Color::Green,
        Method::Post => Color::Blue,
        Method::Put => Color::Yellow,
        Method::Delete => Color::Red,
        Method::Patch => Color::Cyan,
        Method::Head => Color::Magenta,
    }
}

/// Status line color: green for 2xx/3xx, red otherwise
pub fn status_color(status_ok: bool) -> Color {
    if status_ok {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Placeholder labels are bold, as in an empty form
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub fn header_name_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn error_banner_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
