//! Piston execution service client.
//!
//! Issues one `POST {url}` per request with the payload
//! `{language, version, files:[{content}]}` and expects a response of the
//! shape `{run:{output, ...}}`. The full response body is kept so it can be
//! relayed to clients verbatim.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{ExecutionError, ExecutionOutcome, ExecutionRequest, ExecutionService},
    infrastructure::dto::http::{ExecuteFileDto, ExecuteRequestDto},
};

/// reqwest-backed client for a Piston-compatible execution service.
pub struct PistonClient {
    http: reqwest::Client,
    url: String,
}

impl PistonClient {
    /// Create a new client against the given execute endpoint.
    ///
    /// The timeout bounds the whole request so a hung service cannot
    /// accumulate unbounded in-flight executions.
    pub fn new(url: String, timeout: Duration) -> Result<Self, ExecutionError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExecutionError::Unavailable(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl ExecutionService for PistonClient {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionOutcome, ExecutionError> {
        let body = ExecuteRequestDto {
            language: request.language,
            version: request.version,
            files: vec![ExecuteFileDto {
                content: request.code,
            }],
        };

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecutionError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExecutionError::Unavailable(format!(
                "execution service returned status {status}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ExecutionError::MalformedResponse(e.to_string()))?;

        let output = payload
            .pointer("/run/output")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ExecutionError::MalformedResponse("missing run.output field".to_string())
            })?
            .to_string();

        Ok(ExecutionOutcome { output, payload })
    }
}
