//! Suggestion controller
//!
//! Owns the query, the suggestion list, request/selection/open state and the
//! debounce deadline for a single input field.

use std::time::Duration;

use crate::source::DEFAULT_RESULT_LIMIT;

pub mod debouncer;
pub mod selection;
pub mod suggest_state;
pub mod worker;

// Re-export public types
pub use debouncer::Debouncer;
pub use selection::Selection;
pub use suggest_state::{
    NavKey, OutcomeDisposition, Phase, RequestState, SuggestEvent, SuggestionController,
};

/// Default quiet period before a query is sent
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Tunables injected into a controller at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Quiet period after the last keystroke before fetching
    pub debounce: Duration,
    /// Upper bound on requested and displayed suggestions
    pub result_limit: usize,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}
