//! Suggestion source abstraction
//!
//! Defines the SuggestionSource trait the controller fetches through, the
//! SourceError type, and the HTTP implementation.

use std::future::Future;

use thiserror::Error;

mod http;

pub use http::{DEFAULT_ENDPOINT, HttpSource};

/// Default number of suggestions requested per query
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The endpoint answered with a non-2xx status
    #[error("request failed with status: {code}")]
    Status { code: u16 },

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not a JSON array of strings
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Anything that can turn a query into an ordered list of suggestions.
///
/// One call is one request: implementations must not retry or cache, the
/// controller bounds request rate itself.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
