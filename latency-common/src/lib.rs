use std::time::Duration;
use thiserror::Error;

/// Delay between two consecutive requests when none is given.
pub const DEFAULT_SLEEP_MS: u64 = 500;

/// Error types for a single measured request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatencyError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type for latency operations
pub type Result<T> = std::result::Result<T, LatencyError>;

/// One timed round-trip.
///
/// `elapsed` is always present: a request that failed still took time, and
/// that time is a valid sample. `outcome` carries the HTTP status on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: Duration,
    pub outcome: Result<u16>,
}

impl Measurement {
    pub fn ok(elapsed: Duration, status: u16) -> Self {
        Self { elapsed, outcome: Ok(status) }
    }

    pub fn failed(elapsed: Duration, err: LatencyError) -> Self {
        Self { elapsed, outcome: Err(err) }
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}
