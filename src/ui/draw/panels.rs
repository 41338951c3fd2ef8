//! Main panels
//!
//! - Request row: method selector, URL input, GO button
//! - Body row: content-type selector and body input (body-bearing methods only)
//! - Response view: request line, status, headers and content regions

use super::components::render_text_field;
use super::styling::{
    border_style, error_banner_style, get_method_color, header_name_style, placeholder_style,
    status_color,
};
use crate::format::ERROR_BANNER;
use crate::state::AppState;
use crate::types::{ContentType, DisplayState, Focus, Outcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the method selector, URL input and GO button
pub fn render_request_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(area);

    let method_focused = state.focus == Focus::Method;
    let method = Paragraph::new(Line::from(vec![
        Span::styled(
            if method_focused { "◀ " } else { "  " },
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            state.method.as_str(),
            Style::default()
                .fg(get_method_color(state.method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if method_focused { " ▶" } else { "" },
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(method_focused))
            .title("Method"),
    );
    frame.render_widget(method, chunks[0]);

    render_text_field(
        frame,
        chunks[1],
        "URL",
        &state.url_input,
        "https://example.com/api",
        state.focus == Focus::Url,
    );

    let go_focused = state.focus == Focus::Go;
    let go_style = if go_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    };
    let go = Paragraph::new(Span::styled(" GO ", go_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(go_focused)),
        );
    frame.render_widget(go, chunks[2]);
}

/// Render the content-type selector (when offered) and the body input
pub fn render_body_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let body_area = if state.offer_content_type {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(10)])
            .split(area);

        render_content_type_selector(frame, chunks[0], state);
        chunks[1]
    } else {
        area
    };

    render_text_field(
        frame,
        body_area,
        "Request Body",
        &state.body_input,
        "key=value&other=1 or {\"json\": true}",
        state.focus == Focus::Body,
    );
}

fn render_content_type_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::ContentType;
    let spans: Vec<Span> = ContentType::ALL
        .iter()
        .flat_map(|choice| {
            let selected = *choice == state.content_type;
            let marker = if selected { "(•) " } else { "( ) " };
            let label = match choice {
                ContentType::Form => "form-urlencoded",
                ContentType::Json => "json",
            };
            let style = if selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!("{marker}{label}"), style), Span::raw("  ")]
        })
        .collect();

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title("Content-Type"),
    );
    frame.render_widget(selector, area);
}

/// Render the response regions from the published display state
pub fn render_response_view(frame: &mut Frame, area: Rect, state: &AppState) {
    let display = &state.display;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Request line
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Headers | Content
        ])
        .split(area);

    let request_line = match display.outcome {
        Outcome::Success => Line::from(display.request_line.as_str()),
        Outcome::Empty | Outcome::Error => {
            Line::from(Span::styled(display.request_line.as_str(), placeholder_style()))
        }
    };
    frame.render_widget(
        Paragraph::new(request_line).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let status_line = match display.outcome {
        Outcome::Success => Line::from(Span::styled(
            display.status_line.as_str(),
            Style::default()
                .fg(status_color(display.status_ok))
                .add_modifier(Modifier::BOLD),
        )),
        Outcome::Empty | Outcome::Error => {
            Line::from(Span::styled(display.status_line.as_str(), placeholder_style()))
        }
    };
    frame.render_widget(
        Paragraph::new(status_line).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    let headers = Paragraph::new(header_text(display))
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(state.headers_scroll), 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(headers, body_chunks[0]);

    let content = Paragraph::new(content_text(display))
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(state.content_scroll), 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, body_chunks[1]);
}

/// Line offset for a paragraph, saturating at what ratatui can address
fn scroll_offset(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Header lines with the name in bold
fn header_text(display: &DisplayState) -> Text<'_> {
    if display.outcome != Outcome::Success {
        return Text::from(Span::styled(
            display.header_block.as_str(),
            placeholder_style(),
        ));
    }

    display
        .header_block
        .lines()
        .map(|line| match line.split_once(": ") {
            Some((name, value)) => Line::from(vec![
                Span::styled(name, header_name_style()),
                Span::raw(": "),
                Span::raw(value),
            ]),
            None => Line::from(line),
        })
        .collect::<Vec<_>>()
        .into()
}

fn content_text(display: &DisplayState) -> Text<'_> {
    match display.outcome {
        Outcome::Success => Text::raw(display.content_block.as_str()),
        Outcome::Empty => Text::from(Span::styled(
            display.content_block.as_str(),
            placeholder_style(),
        )),
        Outcome::Error => {
            let message = display
                .content_block
                .strip_prefix(ERROR_BANNER)
                .unwrap_or(display.content_block.as_str())
                .trim_start_matches('\n');

            let mut lines = vec![
                Line::from(Span::styled(ERROR_BANNER, error_banner_style())),
                Line::default(),
            ];
            lines.extend(
                message
                    .lines()
                    .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Red)))),
            );
            Text::from(lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(0), 0);
        assert_eq!(scroll_offset(42), 42);
        assert_eq!(scroll_offset(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(scroll_offset(70_000), u16::MAX);
    }
}
