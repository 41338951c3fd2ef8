//! Interaction controller
//!
//! Owns the submit cycle: snapshot the inputs, build the request, hand it to
//! the transport on a background task, and publish the rendered outcome.
//!
//! # Last submit wins
//!
//! Every submission takes a fresh id from `AppState::latest_submission`. A
//! finished task publishes only if its id is still the latest, so a slow
//! request that returns after a newer one was issued is dropped. Publishing
//! replaces the whole `DisplayState` under one write lock.

use crate::actions::{apply_action, AppAction};
use crate::error::AppError;
use crate::format::{format_response, present_error};
use crate::request::build_request;
use crate::state::{self, AppState};
use crate::transport::Transport;
use crate::types::{
    ContentType, DisplayState, EncodedRequest, Method, Outcome, Phase, TransportResponse,
};
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The closed set of events the controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MethodChanged(Method),
    ContentTypeChanged(ContentType),
    /// Enter pressed in the URL or body input
    TextSubmitted,
    /// GO button activated
    ActionActivated,
}

pub struct InteractionController<T: Transport> {
    state: Arc<RwLock<AppState>>,
    transport: Arc<T>,
}

impl<T: Transport> InteractionController<T> {
    pub fn new(state: Arc<RwLock<AppState>>, transport: T) -> Self {
        Self {
            state,
            transport: Arc::new(transport),
        }
    }

    /// React to a UI event. Returns the handle of the request task when one
    /// was started.
    pub fn handle(&self, event: UiEvent) -> Option<JoinHandle<()>> {
        match event {
            UiEvent::MethodChanged(method) => {
                debug!(%method, "method changed");
                apply_action(AppAction::SelectMethod(method), &mut state::write(&self.state));
                None
            }
            UiEvent::ContentTypeChanged(content_type) => {
                debug!(content_type = content_type.header_value(), "content type changed");
                apply_action(
                    AppAction::SelectContentType(content_type),
                    &mut state::write(&self.state),
                );
                None
            }
            UiEvent::TextSubmitted | UiEvent::ActionActivated => self.submit(),
        }
    }

    fn submit(&self) -> Option<JoinHandle<()>> {
        let (id, request) = {
            let mut s = state::write(&self.state);
            begin_submission(&mut s)?
        };

        let state = Arc::clone(&self.state);
        let transport = Arc::clone(&self.transport);

        Some(tokio::spawn(async move {
            let method = request.method;
            let url = request.url.clone();

            let result = transport.execute(request).await;
            let display = render_outcome(result, method, &url);

            let mut s = state::write(&state);
            publish(&mut s, id, display);
        }))
    }
}

/// Start a submission: take a new id and build the request from the current
/// inputs. A body that fails to encode is published as an error right away
/// and yields `None`, so nothing reaches the network.
pub fn begin_submission(state: &mut AppState) -> Option<(u64, EncodedRequest)> {
    state.latest_submission += 1;
    let id = state.latest_submission;
    let draft = state.draft();

    match build_request(&draft) {
        Ok(request) => {
            info!(id, method = %request.method, url = %request.url, "submitting request");
            state.phase = Phase::Submitting;
            Some((id, request))
        }
        Err(err) => {
            warn!(id, kind = err.kind(), error = %err, "request not sent");
            publish(state, id, present_error(&err));
            None
        }
    }
}

/// Map a transport result to what the response view shows
pub fn render_outcome(
    result: Result<TransportResponse, AppError>,
    method: Method,
    url: &str,
) -> DisplayState {
    let formatted = result.and_then(|response| format_response(&response, method, url));
    match formatted {
        Ok(display) => display,
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "request failed");
            present_error(&err)
        }
    }
}

/// Replace the display if `id` is still the latest submission.
/// Returns false when the outcome was stale and dropped.
pub fn publish(state: &mut AppState, id: u64, display: DisplayState) -> bool {
    if id != state.latest_submission {
        debug!(
            id,
            latest = state.latest_submission,
            "dropping superseded response"
        );
        return false;
    }

    state.phase = match display.outcome {
        Outcome::Error => Phase::DisplayingError,
        Outcome::Success | Outcome::Empty => Phase::DisplayingSuccess,
    };
    state.display = display;
    state.content_scroll = 0;
    state.headers_scroll = 0;
    true
}
