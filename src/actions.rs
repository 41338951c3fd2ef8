use crate::state::AppState;
use crate::types::{ContentType, Focus, Method};
use crossterm::event::KeyEvent;

/// Lines moved per scroll action
pub const SCROLL_STEP: usize = 5;

/// Every UI-local state change goes through an action. Submitting is not an
/// action; the controller owns that.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Selection
    SelectMethod(Method),
    SelectContentType(ContentType),

    // Focus
    FocusNext,
    FocusPrev,
    SetFocus(Focus),

    // Text input (applies to the focused URL or body input)
    EditInput(KeyEvent),
    PasteInput(String),

    // Scrolling
    ScrollContentUp,
    ScrollContentDown,
    ScrollHeadersUp,
    ScrollHeadersDown,

    SetFlash(Option<String>),
    Quit,
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SelectMethod(method) => {
            state.method = method;
            state.body_visible = method.is_body_bearing();
            // Hiding the body row keeps its text but cannot keep its focus
            if !state.body_visible && state.focus.is_body_row() {
                state.focus = Focus::Method;
            }
        }
        AppAction::SelectContentType(content_type) => {
            state.content_type = content_type;
        }

        AppAction::FocusNext => {
            state.focus = skip_hidden_selector(state.focus.next(state.body_visible), state, true);
        }
        AppAction::FocusPrev => {
            state.focus = skip_hidden_selector(state.focus.prev(state.body_visible), state, false);
        }
        AppAction::SetFocus(focus) => {
            if state.body_visible || !focus.is_body_row() {
                state.focus = focus;
            }
        }

        AppAction::EditInput(key) => {
            if let Some(input) = focused_input(state) {
                input.handle_key_event(key);
            }
        }
        AppAction::PasteInput(text) => {
            if let Some(input) = focused_input(state) {
                input.insert_str_normalized(&text);
            }
        }

        AppAction::ScrollContentUp => {
            state.content_scroll = state.content_scroll.saturating_sub(SCROLL_STEP);
        }
        AppAction::ScrollContentDown => {
            let max = state.display.content_block.lines().count().saturating_sub(1);
            state.content_scroll = (state.content_scroll + SCROLL_STEP).min(max);
        }
        AppAction::ScrollHeadersUp => {
            state.headers_scroll = state.headers_scroll.saturating_sub(SCROLL_STEP);
        }
        AppAction::ScrollHeadersDown => {
            let max = state.display.header_block.lines().count().saturating_sub(1);
            state.headers_scroll = (state.headers_scroll + SCROLL_STEP).min(max);
        }

        AppAction::SetFlash(flash) => {
            state.flash = flash;
        }
        AppAction::Quit => {
            state.should_quit = true;
        }
    }
}

/// The content-type selector is not a focus stop when it is not offered
fn skip_hidden_selector(focus: Focus, state: &AppState, forward: bool) -> Focus {
    if focus == Focus::ContentType && !state.offer_content_type {
        if forward {
            focus.next(state.body_visible)
        } else {
            focus.prev(state.body_visible)
        }
    } else {
        focus
    }
}

fn focused_input(state: &mut AppState) -> Option<&mut crate::editor::TextInput> {
    match state.focus {
        Focus::Url => Some(&mut state.url_input),
        Focus::Body if state.body_visible => Some(&mut state.body_input),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextInput;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_select_method_reveals_and_hides_body_row() {
        let mut state = AppState::default();
        assert!(!state.body_visible);

        apply_action(AppAction::SelectMethod(Method::Post), &mut state);
        assert_eq!(state.method, Method::Post);
        assert!(state.body_visible);

        apply_action(AppAction::SelectMethod(Method::Delete), &mut state);
        assert!(!state.body_visible);
    }

    #[test]
    fn test_hiding_body_row_keeps_text() {
        let mut state = AppState::default();
        apply_action(AppAction::SelectMethod(Method::Post), &mut state);
        apply_action(AppAction::SetFocus(Focus::Body), &mut state);
        apply_action(AppAction::PasteInput("a=1".to_string()), &mut state);

        apply_action(AppAction::SelectMethod(Method::Get), &mut state);
        assert_eq!(state.focus, Focus::Method);
        assert_eq!(state.body_input.content(), "a=1");

        apply_action(AppAction::SelectMethod(Method::Post), &mut state);
        assert_eq!(state.body_input.content(), "a=1");
    }

    #[test]
    fn test_select_content_type_has_no_side_effect() {
        let mut state = AppState::default();
        let before = state.clone();
        apply_action(AppAction::SelectContentType(ContentType::Json), &mut state);

        assert_eq!(state.content_type, ContentType::Json);
        assert_eq!(state.method, before.method);
        assert_eq!(state.body_visible, before.body_visible);
        assert_eq!(state.display, before.display);
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Focus::Url);

        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Go);
        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Method);

        apply_action(AppAction::SelectMethod(Method::Post), &mut state);
        apply_action(AppAction::FocusPrev, &mut state);
        assert_eq!(state.focus, Focus::Body);
        apply_action(AppAction::FocusPrev, &mut state);
        assert_eq!(state.focus, Focus::ContentType);
    }

    #[test]
    fn test_focus_skips_selector_when_not_offered() {
        let mut state = AppState::default();
        state.offer_content_type = false;
        apply_action(AppAction::SelectMethod(Method::Post), &mut state);
        apply_action(AppAction::SetFocus(Focus::Go), &mut state);

        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.focus, Focus::Body);
        apply_action(AppAction::FocusPrev, &mut state);
        assert_eq!(state.focus, Focus::Go);
    }

    #[test]
    fn test_set_focus_ignores_hidden_row() {
        let mut state = AppState::default();
        apply_action(AppAction::SetFocus(Focus::Body), &mut state);
        assert_eq!(state.focus, Focus::Url);
    }

    #[test]
    fn test_edit_input_routes_to_focused_field() {
        let mut state = AppState::default();
        apply_action(AppAction::EditInput(key(KeyCode::Char('h'))), &mut state);
        apply_action(AppAction::EditInput(key(KeyCode::Char('i'))), &mut state);
        assert_eq!(state.url_input.content(), "hi");

        apply_action(AppAction::EditInput(key(KeyCode::Backspace)), &mut state);
        assert_eq!(state.url_input.content(), "h");

        // Go button is not a text field
        apply_action(AppAction::SetFocus(Focus::Go), &mut state);
        apply_action(AppAction::EditInput(key(KeyCode::Char('x'))), &mut state);
        assert_eq!(state.url_input.content(), "h");
        assert_eq!(state.body_input, TextInput::new());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::default();
        state.display.content_block = (0..12).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");

        apply_action(AppAction::ScrollContentDown, &mut state);
        assert_eq!(state.content_scroll, 5);
        apply_action(AppAction::ScrollContentDown, &mut state);
        apply_action(AppAction::ScrollContentDown, &mut state);
        assert_eq!(state.content_scroll, 11);

        apply_action(AppAction::ScrollContentUp, &mut state);
        assert_eq!(state.content_scroll, 6);

        apply_action(AppAction::ScrollHeadersUp, &mut state);
        assert_eq!(state.headers_scroll, 0);
    }

    #[test]
    fn test_flash_and_quit() {
        let mut state = AppState::default();
        apply_action(AppAction::SetFlash(Some("Copied".to_string())), &mut state);
        assert_eq!(state.flash.as_deref(), Some("Copied"));
        apply_action(AppAction::Quit, &mut state);
        assert!(state.should_quit);
    }
}
