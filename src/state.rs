use crate::config::RequestSettings;
use crate::editor::TextInput;
use crate::types::{ContentType, DisplayState, Focus, Method, Phase, RequestDraft};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Methods the selector cycles through
    pub methods: Vec<Method>,
    pub method: Method,
    pub content_type: ContentType,
    /// When false the body row has no selector and drafts carry no content type
    pub offer_content_type: bool,

    pub url_input: TextInput,
    /// Kept while the body row is hidden
    pub body_input: TextInput,
    /// Mirrors `method.is_body_bearing()`
    pub body_visible: bool,

    pub focus: Focus,
    pub phase: Phase,

    /// Id of the most recent submission; only its outcome may be published
    pub latest_submission: u64,
    pub display: DisplayState,

    /// Scroll offset for the content region (lines)
    pub content_scroll: usize,
    /// Scroll offset for the headers region (lines)
    pub headers_scroll: usize,

    /// Short-lived footer notice (e.g. after copying to the clipboard)
    pub flash: Option<String>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&RequestSettings::default())
    }
}

impl AppState {
    pub fn new(settings: &RequestSettings) -> Self {
        let methods = if settings.methods.is_empty() {
            vec![Method::Get]
        } else {
            settings.methods.clone()
        };
        let method = methods[0];

        Self {
            methods,
            method,
            content_type: settings.default_content_type,
            offer_content_type: settings.offer_content_type,
            url_input: settings
                .default_url
                .as_deref()
                .map(TextInput::with_content)
                .unwrap_or_default(),
            body_input: TextInput::new(),
            body_visible: method.is_body_bearing(),
            focus: Focus::Url,
            phase: Phase::Idle,
            latest_submission: 0,
            display: DisplayState::default(),
            content_scroll: 0,
            headers_scroll: 0,
            flash: None,
            should_quit: false,
        }
    }

    /// Snapshot the live input fields
    pub fn draft(&self) -> RequestDraft {
        RequestDraft {
            method: self.method,
            url: self.url_input.content().to_string(),
            content_type: self.offer_content_type.then_some(self.content_type),
            raw_body: self.body_input.content().to_string(),
        }
    }

    /// Neighbouring method in the configured list, wrapping around
    pub fn cycle_method(&self, forward: bool) -> Method {
        let len = self.methods.len();
        let idx = self
            .methods
            .iter()
            .position(|m| *m == self.method)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.methods[next]
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Read the shared state, recovering from a poisoned lock
pub fn read(state: &RwLock<AppState>) -> RwLockReadGuard<'_, AppState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write the shared state, recovering from a poisoned lock
pub fn write(state: &RwLock<AppState>) -> RwLockWriteGuard<'_, AppState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}
