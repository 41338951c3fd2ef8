//! Yank (copy) handler
//!
//! Copies the content region to the system clipboard and flashes a notice
//! in the footer.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::format::ERROR_BANNER;
use crate::state::{self, AppState};
use crate::types::{DisplayState, Outcome};
use anyhow::Context;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, warn};

const FLASH_DURATION: Duration = Duration::from_millis(1500);

/// Copy the content region to the clipboard
pub fn handle_yank_content(state: &Arc<RwLock<AppState>>) {
    let Some(text) = clipboard_text(&state::read(state).display) else {
        debug!("nothing to yank");
        return;
    };

    let notice = match copy_to_clipboard(&text) {
        Ok(()) => {
            debug!(bytes = text.len(), "yanked response content");
            "Copied response content".to_string()
        }
        Err(e) => {
            warn!(error = format!("{e:#}"), "yank failed");
            format!("Copy failed: {e}")
        }
    };

    apply(state, AppAction::SetFlash(Some(notice.clone())));

    // Clear the notice unless something newer replaced it
    let state = Arc::clone(state);
    tokio::spawn(async move {
        tokio::time::sleep(FLASH_DURATION).await;
        let mut s = state::write(&state);
        if s.flash.as_deref() == Some(notice.as_str()) {
            s.flash = None;
        }
    });
}

/// Text a yank should copy. Errors copy the message without the banner.
pub fn clipboard_text(display: &DisplayState) -> Option<String> {
    match display.outcome {
        Outcome::Empty => None,
        Outcome::Success => Some(display.content_block.clone()),
        Outcome::Error => Some(
            display
                .content_block
                .strip_prefix(ERROR_BANNER)
                .unwrap_or(display.content_block.as_str())
                .trim_start()
                .to_string(),
        ),
    }
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to copy to clipboard")
}
