//! Execution service abstraction.
//!
//! The coordinator never runs code itself; it forwards the current buffer to
//! an external execution service and relays the response. The trait lives in
//! the domain layer so the UseCase layer does not depend on the HTTP client
//! implementation.

use async_trait::async_trait;
use thiserror::Error;

/// A single code execution request forwarded to the execution service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Language identifier understood by the execution service
    pub language: String,
    /// Version spec for the language runtime, e.g. `"3.10"`
    pub version: String,
    /// Snapshot of the code to run
    pub code: String,
}

/// Result of a successful execution service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Textual output of the run (`run.output` in the service response)
    pub output: String,
    /// The service's full JSON response, relayed verbatim to clients so
    /// richer execution metadata survives the round trip
    pub payload: serde_json::Value,
}

/// Errors from the execution service call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Transport failure, timeout or non-success status
    #[error("execution service unavailable: {0}")]
    Unavailable(String),

    /// Response body did not have the expected `{run:{output}}` shape
    #[error("malformed execution service response: {0}")]
    MalformedResponse(String),
}

/// Outbound call to the external code execution service.
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Execute the request against the external service.
    ///
    /// Failures are never retried; the caller decides how to surface them.
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionOutcome, ExecutionError>;
}
