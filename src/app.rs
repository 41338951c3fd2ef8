use crate::config::Config;
use crate::controller::InteractionController;
use crate::state::{self, AppState};
use crate::transport::ReqwestTransport;
use crate::ui;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io::Write;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::warn;

pub struct App {
    state: Arc<RwLock<AppState>>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler<ReqwestTransport>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let state = Arc::new(RwLock::new(AppState::new(&config.request)));
        let transport = ReqwestTransport::new(config.request.timeout())?;
        let controller = InteractionController::new(Arc::clone(&state), transport);

        Ok(Self {
            event_handler: ui::EventHandler::new(Arc::clone(&state), controller),
            state,
            spinner_index: 0,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !state::read(&self.state).should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| {
                let state = state::read(&self.state);
                ui::render(frame, &state, self.spinner_index);
            })?;

            self.event_handler.handle_events()?;

            // Let request tasks publish between polls
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}

/// Toggle bracketed paste on `out`. Without it a paste arrives as single key
/// presses, so failure is logged and the app keeps running.
pub fn set_bracketed_paste(out: &mut impl Write, enabled: bool) -> bool {
    let result = if enabled {
        execute!(out, EnableBracketedPaste)
    } else {
        execute!(out, DisableBracketedPaste)
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(enabled, error = %e, "failed to toggle bracketed paste");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedTerminal;

    impl Write for ClosedTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bracketed_paste_sequences() {
        let mut out = Vec::new();
        assert!(set_bracketed_paste(&mut out, true));
        assert!(set_bracketed_paste(&mut out, false));
        assert_eq!(out, b"\x1b[?2004h\x1b[?2004l");
    }

    #[test]
    fn test_bracketed_paste_failure_is_reported() {
        assert!(!set_bracketed_paste(&mut ClosedTerminal, true));
    }
}
