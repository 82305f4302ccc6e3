// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::controller::ControllerOptions;
use crate::error::SuggestError;
use crate::source::{DEFAULT_ENDPOINT, DEFAULT_RESULT_LIMIT};

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_timeout_secs() -> u64 {
    10
}

/// Suggestion configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            result_limit: default_result_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SuggestConfig {
    /// Reject values the controller and HTTP source cannot work with
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.result_limit == 0 {
            return Err(SuggestError::InvalidConfig(
                "result_limit must be a positive integer".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SuggestError::InvalidConfig(
                "timeout_secs must be a positive integer".to_string(),
            ));
        }
        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SuggestError::InvalidConfig(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        Ok(())
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            result_limit: self.result_limit,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
}
