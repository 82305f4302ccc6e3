//! Fetch tasks
//!
//! Each issued fetch runs as its own task on the injected runtime. Tasks
//! never touch controller state: they report back over a channel that the
//! controller drains on its own thread. Outcomes carry the request id they
//! were issued with so superseded responses can be recognised.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::source::{SourceError, SuggestionSource};

/// One fetch to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation this fetch belongs to, used to filter stale responses
    pub request_id: u64,
    pub query: String,
    pub limit: usize,
}

/// Result of one fetch, tagged with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub query: String,
    pub result: Result<Vec<String>, SourceError>,
}

/// Spawn a fetch task
///
/// The task ends early without reporting if `cancel_token` fires before the
/// source answers. A closed channel is not an error: it means the controller
/// is gone.
pub fn spawn_fetch<S: SuggestionSource>(
    runtime: &Handle,
    source: Arc<S>,
    request: FetchRequest,
    cancel_token: CancellationToken,
    response_tx: UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let FetchRequest {
            request_id,
            query,
            limit,
        } = request;

        let result = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                log::debug!("Fetch {} cancelled before completion", request_id);
                return;
            }
            result = source.fetch(&query, limit) => result,
        };

        if response_tx
            .send(FetchOutcome {
                request_id,
                query,
                result,
            })
            .is_err()
        {
            log::debug!("Controller dropped, discarding response for request {}", request_id);
        }
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
