//! Event handling
//!
//! Turns terminal input into state changes. Global keys (quit, scroll, copy,
//! focus movement) are handled here; everything else goes to the focused
//! widget in `navigation`. Local changes are applied as `AppAction`s, while
//! selector changes and submits go through the `InteractionController`.
//!
//! # Lock Management
//!
//! Handlers take the state lock only for the duration of a single action and
//! never hold it across a controller call.

mod helpers;
mod navigation;
mod yank;

pub use helpers::apply;
pub use yank::clipboard_text;

use crate::actions::AppAction;
use crate::controller::InteractionController;
use crate::state::AppState;
use crate::transport::Transport;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use helpers::has_ctrl;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Event handler for managing user input and state updates
pub struct EventHandler<T: Transport> {
    state: Arc<RwLock<AppState>>,
    controller: InteractionController<T>,
}

impl<T: Transport> EventHandler<T> {
    pub fn new(state: Arc<RwLock<AppState>>, controller: InteractionController<T>) -> Self {
        Self { state, controller }
    }

    /// Wait briefly for one terminal event and handle it
    pub fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // The request task runs detached; its result lands in the state
                    let _ = self.handle_key(key);
                }
                Event::Paste(text) => apply(&self.state, AppAction::PasteInput(text)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Dispatch a key press. Returns the request task handle when the key
    /// started a submission.
    pub fn handle_key(&self, key: KeyEvent) -> Option<JoinHandle<()>> {
        let ctrl = has_ctrl(&key);

        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => apply(&self.state, AppAction::Quit),
            KeyCode::Char('y') if ctrl => yank::handle_yank_content(&self.state),

            KeyCode::PageUp => apply(&self.state, AppAction::ScrollContentUp),
            KeyCode::PageDown => apply(&self.state, AppAction::ScrollContentDown),
            KeyCode::Char('k') if ctrl => apply(&self.state, AppAction::ScrollContentUp),
            KeyCode::Char('j') if ctrl => apply(&self.state, AppAction::ScrollContentDown),
            KeyCode::Up if ctrl => apply(&self.state, AppAction::ScrollHeadersUp),
            KeyCode::Down if ctrl => apply(&self.state, AppAction::ScrollHeadersDown),

            KeyCode::Tab => apply(&self.state, AppAction::FocusNext),
            KeyCode::BackTab => apply(&self.state, AppAction::FocusPrev),

            _ => {
                let event = navigation::handle_focused_key(key, &self.state)?;
                return self.controller.handle(event);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::state;
    use crate::types::{EncodedRequest, Focus, Method, Outcome, Phase, TransportResponse};
    use crossterm::event::KeyModifiers;

    struct RefusingTransport;

    impl Transport for RefusingTransport {
        async fn execute(&self, _request: EncodedRequest) -> Result<TransportResponse, AppError> {
            Err(AppError::Transport("connection refused".to_string()))
        }
    }

    fn handler() -> (Arc<RwLock<AppState>>, EventHandler<RefusingTransport>) {
        let state = Arc::new(RwLock::new(AppState::default()));
        let controller = InteractionController::new(Arc::clone(&state), RefusingTransport);
        (Arc::clone(&state), EventHandler::new(state, controller))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let (state, handler) = handler();
        assert!(handler.handle_key(ctrl('c')).is_none());
        assert!(state::read(&state).should_quit);
    }

    #[tokio::test]
    async fn test_plain_q_is_text() {
        let (state, handler) = handler();
        handler.handle_key(key(KeyCode::Char('q')));
        let s = state::read(&state);
        assert!(!s.should_quit);
        assert_eq!(s.url_input.content(), "q");
    }

    #[tokio::test]
    async fn test_tab_moves_focus() {
        let (state, handler) = handler();
        handler.handle_key(key(KeyCode::Tab));
        assert_eq!(state::read(&state).focus, Focus::Go);
        handler.handle_key(key(KeyCode::BackTab));
        assert_eq!(state::read(&state).focus, Focus::Url);
    }

    #[tokio::test]
    async fn test_method_change_goes_through_controller() {
        let (state, handler) = handler();
        handler.handle_key(key(KeyCode::BackTab));
        handler.handle_key(key(KeyCode::Right));

        let s = state::read(&state);
        assert_eq!(s.method, Method::Post);
        assert!(s.body_visible);
    }

    #[tokio::test]
    async fn test_enter_submits_and_publishes_error() {
        let (state, handler) = handler();
        for c in "http://localhost:1".chars() {
            handler.handle_key(key(KeyCode::Char(c)));
        }

        let task = handler.handle_key(key(KeyCode::Enter)).expect("request task");
        task.await.unwrap();

        let s = state::read(&state);
        assert_eq!(s.phase, Phase::DisplayingError);
        assert_eq!(s.display.outcome, Outcome::Error);
        assert!(s.display.content_block.contains("connection refused"));
    }
}
