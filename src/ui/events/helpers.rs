//! Helper functions for event handling
//!
//! - State locking helpers (apply actions)
//! - Key classification

use crate::actions::{apply_action, AppAction};
use crate::state::{self, AppState};
use crossterm::event::{KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = state::write(state);
    apply_action(action, &mut s);
}

pub fn has_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}
