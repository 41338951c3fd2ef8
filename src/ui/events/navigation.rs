//! Focus-specific key handling
//!
//! Keys that were not claimed globally go to the focused widget. Selector
//! and submit keys become controller events; everything else on a text
//! field is editing.

use super::helpers::{apply, has_ctrl};
use crate::actions::AppAction;
use crate::controller::UiEvent;
use crate::state::{self, AppState};
use crate::types::Focus;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::{Arc, RwLock};

/// Handle a key for the focused widget. Returns the controller event it
/// produced, if any.
pub fn handle_focused_key(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> Option<UiEvent> {
    let (focus, next_method, prev_method, toggled) = {
        let s = state::read(state);
        (
            s.focus,
            s.cycle_method(true),
            s.cycle_method(false),
            s.content_type.toggled(),
        )
    };

    match (focus, key.code) {
        (Focus::Method, KeyCode::Right | KeyCode::Down | KeyCode::Char(' ')) => {
            Some(UiEvent::MethodChanged(next_method))
        }
        (Focus::Method, KeyCode::Left | KeyCode::Up) => Some(UiEvent::MethodChanged(prev_method)),

        (
            Focus::ContentType,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' '),
        ) => Some(UiEvent::ContentTypeChanged(toggled)),

        (Focus::Go, KeyCode::Enter | KeyCode::Char(' ')) => Some(UiEvent::ActionActivated),

        (Focus::Url | Focus::Body, KeyCode::Enter) if !has_ctrl(&key) => {
            Some(UiEvent::TextSubmitted)
        }
        (Focus::Url | Focus::Body, _) => {
            apply(state, AppAction::EditInput(key));
            None
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentType, Method};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shared(focus: Focus) -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.focus = focus;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_method_selector_cycles() {
        let state = shared(Focus::Method);
        assert_eq!(
            handle_focused_key(key(KeyCode::Right), &state),
            Some(UiEvent::MethodChanged(Method::Post))
        );
        assert_eq!(
            handle_focused_key(key(KeyCode::Left), &state),
            Some(UiEvent::MethodChanged(Method::Delete))
        );
    }

    #[test]
    fn test_content_type_selector_toggles() {
        let state = shared(Focus::ContentType);
        assert_eq!(
            handle_focused_key(key(KeyCode::Char(' ')), &state),
            Some(UiEvent::ContentTypeChanged(ContentType::Json))
        );
    }

    #[test]
    fn test_enter_submits_from_text_fields_and_go() {
        assert_eq!(
            handle_focused_key(key(KeyCode::Enter), &shared(Focus::Url)),
            Some(UiEvent::TextSubmitted)
        );
        assert_eq!(
            handle_focused_key(key(KeyCode::Enter), &shared(Focus::Go)),
            Some(UiEvent::ActionActivated)
        );
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let state = shared(Focus::Url);
        assert_eq!(handle_focused_key(key(KeyCode::Char('a')), &state), None);
        assert_eq!(state::read(&state).url_input.content(), "a");

        // Space is text in a field, not an activation
        assert_eq!(handle_focused_key(key(KeyCode::Char(' ')), &state), None);
        assert_eq!(state::read(&state).url_input.content(), "a ");
    }
}
