//! Suggestion controller state machine
//!
//! All mutation happens on the owner's thread through `&mut self`. Fetches
//! run elsewhere and come back through `tick`, which applies an outcome only
//! if it carries the current request id.

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::ControllerOptions;
use super::debouncer::Debouncer;
use super::selection::Selection;
use super::worker::{FetchOutcome, FetchRequest, spawn_fetch};
use crate::source::{SourceError, SuggestionSource};

/// Lifecycle of the live request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing requested for the current query
    #[default]
    Idle,
    /// Waiting for the debounce deadline or for the source to answer
    Pending,
    /// The latest request succeeded (possibly with zero results)
    Resolved,
    /// The latest request failed
    Failed(SourceError),
}

/// Phase of the widget as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Debouncing,
    Loading,
    OpenResults,
    OpenEmpty,
    OpenError,
}

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl FromStr for NavKey {
    type Err = Infallible;

    /// Parse a DOM-style key name; unknown names map to `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowUp" => NavKey::ArrowUp,
            "Enter" => NavKey::Enter,
            "Escape" => NavKey::Escape,
            _ => NavKey::Other,
        })
    }
}

/// Side effects observable by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestEvent {
    /// A suggestion was committed as the new query
    Selected(String),
}

/// What happened to a fetch outcome handed to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeDisposition {
    Applied,
    /// Superseded by a newer request and dropped
    Stale,
}

/// Suggestion state for one input field
pub struct SuggestionController<S: SuggestionSource> {
    query: String,
    suggestions: Vec<String>,
    request: RequestState,
    selection: Selection,
    open: bool,
    options: ControllerOptions,
    debouncer: Debouncer,
    source: Arc<S>,
    runtime: Handle,
    /// Current request id, incremented whenever earlier requests become stale
    request_id: u64,
    response_tx: UnboundedSender<FetchOutcome>,
    response_rx: UnboundedReceiver<FetchOutcome>,
    /// Shared by every fetch task, cancelled on drop
    cancel_token: CancellationToken,
    events: Vec<SuggestEvent>,
}

impl<S: SuggestionSource> SuggestionController<S> {
    /// Create a controller fetching from `source` on `runtime`
    ///
    /// A zero result limit is raised to one.
    pub fn new(source: S, options: ControllerOptions, runtime: Handle) -> Self {
        let options = ControllerOptions {
            result_limit: options.result_limit.max(1),
            ..options
        };
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        Self {
            query: String::new(),
            suggestions: Vec::new(),
            request: RequestState::Idle,
            selection: Selection::new(),
            open: false,
            options,
            debouncer: Debouncer::new(options.debounce),
            source: Arc::new(source),
            runtime,
            request_id: 0,
            response_tx,
            response_rx,
            cancel_token: CancellationToken::new(),
            events: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Pending
    }

    pub fn error(&self) -> Option<&SourceError> {
        match &self.request {
            RequestState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected(&self.suggestions)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn phase(&self) -> Phase {
        if self.debouncer.is_pending() {
            return Phase::Debouncing;
        }
        if self.request == RequestState::Pending {
            return Phase::Loading;
        }
        if !self.open {
            return Phase::Closed;
        }
        match self.request {
            RequestState::Failed(_) => Phase::OpenError,
            _ if self.suggestions.is_empty() => Phase::OpenEmpty,
            _ => Phase::OpenResults,
        }
    }

    /// Time left before the pending debounce fires, if one is armed
    pub fn time_until_due(&self) -> Option<Duration> {
        self.debouncer.time_until_due(Instant::now())
    }

    /// Replace the query text
    ///
    /// A blank query clears everything synchronously. Anything else re-arms
    /// the debounce deadline; loading becomes observable immediately.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.selection.clear();
        self.debouncer.cancel();
        self.supersede_in_flight();

        if text.trim().is_empty() {
            self.suggestions.clear();
            self.request = RequestState::Idle;
            self.open = false;
            return;
        }

        self.debouncer.schedule(Instant::now());
        self.request = RequestState::Pending;
    }

    /// Handle a navigation key. Returns true if the key was consumed.
    ///
    /// Does nothing while the panel is closed.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.open {
            return false;
        }

        match key {
            NavKey::ArrowDown => {
                self.selection.move_down(self.suggestions.len());
                true
            }
            NavKey::ArrowUp => {
                self.selection.move_up(self.suggestions.len());
                true
            }
            NavKey::Enter => {
                if let Some(text) = self.selected().map(str::to_string) {
                    self.commit(text);
                }
                true
            }
            NavKey::Escape => {
                self.open = false;
                true
            }
            NavKey::Other => false,
        }
    }

    /// Commit a suggestion picked with the pointer
    pub fn select_suggestion(&mut self, text: &str) {
        self.commit(text.to_string());
    }

    /// Dismiss the panel and drop the current suggestions, keeping the query
    pub fn clear_all(&mut self) {
        self.suggestions.clear();
        self.open = false;
        self.selection.clear();
        self.abandon_request();
    }

    /// Drain selection events queued since the last call
    pub fn take_events(&mut self) -> Vec<SuggestEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the controller
    ///
    /// Fires an expired debounce deadline and applies any finished fetches.
    /// Returns true if visible state may have changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.debouncer.fire_if_due(Instant::now()) {
            self.issue_fetch();
            changed = true;
        }

        while let Ok(outcome) = self.response_rx.try_recv() {
            if self.apply_outcome(outcome) == OutcomeDisposition::Applied {
                changed = true;
            }
        }

        changed
    }

    /// Apply a finished fetch, unless a newer request has superseded it
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> OutcomeDisposition {
        if outcome.request_id != self.request_id {
            log::debug!(
                "Discarding stale response for {:?} (request {}, current {})",
                outcome.query,
                outcome.request_id,
                self.request_id
            );
            return OutcomeDisposition::Stale;
        }

        self.selection.clear();

        match outcome.result {
            Ok(mut suggestions) => {
                suggestions.truncate(self.options.result_limit);
                log::debug!(
                    "Request {} resolved with {} suggestions",
                    outcome.request_id,
                    suggestions.len()
                );
                self.suggestions = suggestions;
                self.request = RequestState::Resolved;
                // Open even for zero results so the empty state is shown
                self.open = !self.query.trim().is_empty();
            }
            Err(e) => {
                log::debug!("Request {} failed: {}", outcome.request_id, e);
                self.suggestions.clear();
                self.request = RequestState::Failed(e);
                self.open = false;
            }
        }

        OutcomeDisposition::Applied
    }

    fn issue_fetch(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        self.request = RequestState::Pending;

        let request = FetchRequest {
            request_id: self.request_id,
            query: self.query.clone(),
            limit: self.options.result_limit,
        };
        log::debug!(
            "Fetching suggestions for {:?} (request {})",
            request.query,
            request.request_id
        );

        spawn_fetch(
            &self.runtime,
            Arc::clone(&self.source),
            request,
            self.cancel_token.clone(),
            self.response_tx.clone(),
        );
    }

    /// Make every in-flight fetch stale without issuing a new one
    fn supersede_in_flight(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
    }

    /// Stop waiting for suggestions: no pending fire, no live fetch
    fn abandon_request(&mut self) {
        self.debouncer.cancel();
        self.supersede_in_flight();
        if self.request == RequestState::Pending {
            self.request = RequestState::Idle;
        }
    }

    fn commit(&mut self, text: String) {
        log::info!("Selected: {}", text);
        self.query = text.clone();
        self.open = false;
        self.selection.clear();
        self.abandon_request();
        self.events.push(SuggestEvent::Selected(text));
    }
}

impl<S: SuggestionSource> Drop for SuggestionController<S> {
    fn drop(&mut self) {
        self.debouncer.cancel();
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
