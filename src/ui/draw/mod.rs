//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, text field)
//! - `panels`: Request row, body row and response view
//! - `styling`: Color schemes and style constants

mod components;
mod panels;
mod styling;

pub use components::{render_footer, render_header, render_text_field};
pub use panels::{render_body_row, render_request_row, render_response_view};

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the whole screen from one consistent snapshot of the state
pub fn render(frame: &mut Frame, state: &AppState, spinner_index: usize) {
    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Method | URL | GO
    ];
    if state.body_visible {
        constraints.push(Constraint::Length(3)); // Content type | Body
    }
    constraints.push(Constraint::Min(9)); // Response view
    constraints.push(Constraint::Length(3)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, chunks[0], state.phase, spinner_index);
    render_request_row(frame, chunks[1], state);

    let mut next = 2;
    if state.body_visible {
        render_body_row(frame, chunks[next], state);
        next += 1;
    }

    render_response_view(frame, chunks[next], state);
    render_footer(frame, chunks[next + 1], state.flash.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{CONTENT_PLACEHOLDER, STATUS_PLACEHOLDER};
    use crate::types::Method;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen_shows_placeholders() {
        let text = screen(&AppState::default());
        assert!(text.contains("GO"));
        assert!(text.contains(STATUS_PLACEHOLDER));
        assert!(text.contains(CONTENT_PLACEHOLDER));
        assert!(!text.contains("Request Body"));
    }

    #[test]
    fn test_body_row_follows_method() {
        let mut state = AppState::default();
        state.method = Method::Post;
        state.body_visible = true;

        let text = screen(&state);
        assert!(text.contains("Request Body"));
        assert!(text.contains("form-urlencoded"));
    }
}
