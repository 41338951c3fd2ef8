//! Reusable UI components
//!
//! - Header (title and request phase)
//! - Footer (key help and flash notices)
//! - Single-line text field with cursor

use super::styling::border_style;
use crate::editor::TextInput;
use crate::types::Phase;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with the current request phase
pub fn render_header(frame: &mut Frame, area: Rect, phase: Phase, spinner_index: usize) {
    let status_text = match phase {
        Phase::Idle => "Ready".to_string(),
        Phase::Submitting => format!("{} Sending...", SPINNER[spinner_index % SPINNER.len()]),
        Phase::DisplayingSuccess => "Done".to_string(),
        Phase::DisplayingError => "Failed".to_string(),
    };

    let header = Paragraph::new(format!("HTTP Client [{status_text}]"))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help, or a flash notice if one is set
pub fn render_footer(frame: &mut Frame, area: Rect, flash: Option<&str>) {
    let (text, color) = match flash {
        Some(flash) => (flash, Color::Green),
        None => (
            "Tab:Focus ←/→:Select Enter:Send PgUp/PgDn:Scroll C-↑/C-↓:Headers C-y:Copy C-c:Quit",
            Color::Yellow,
        ),
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render a bordered single-line input. Long content scrolls horizontally
/// so the cursor stays visible; the terminal cursor is placed when focused.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(title.to_string());
    let inner = block.inner(area);

    let column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
    let offset = column.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = if input.content().is_empty() && !focused {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(input.content().to_string()).scroll((0, offset))
    };

    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + column - offset, inner.y));
    }
}
