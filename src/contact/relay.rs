use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::submission::{ContactFields, SubmissionEvent, GENERIC_FAILURE, NETWORK_FAILURE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl RelayPayload {
    pub fn new(access_key: &str, fields: &ContactFields) -> Self {
        Self {
            access_key: access_key.to_string(),
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            message: fields.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_event(self) -> SubmissionEvent {
        if self.success {
            return SubmissionEvent::Succeed;
        }
        let message = self
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        SubmissionEvent::Fail(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("failed to encode submission: {0}")]
    Encode(String),
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("unreadable relay response: {0}")]
    Malformed(String),
}

impl RelayError {
    /// Every transport-level problem looks the same to the visitor.
    pub fn into_event(self) -> SubmissionEvent {
        SubmissionEvent::Fail(NETWORK_FAILURE.to_string())
    }
}

pub fn outcome(result: Result<RelayResponse, RelayError>) -> SubmissionEvent {
    match result {
        Ok(response) => response.into_event(),
        Err(e) => e.into_event(),
    }
}

/// The third-party service that accepts contact submissions.
pub trait FormRelay {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        payload: &'a RelayPayload,
    ) -> LocalBoxFuture<'a, Result<RelayResponse, RelayError>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HttpRelay;

impl FormRelay for HttpRelay {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        payload: &'a RelayPayload,
    ) -> LocalBoxFuture<'a, Result<RelayResponse, RelayError>> {
        Box::pin(async move {
            let request = Request::post(endpoint)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| RelayError::Encode(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            // rejections come back with a non-2xx status and a JSON body,
            // so the body is read either way
            if !response.ok() {
                log::info!("Relay answered with status {}", response.status());
            }

            response
                .json::<RelayResponse>()
                .await
                .map_err(|e| RelayError::Malformed(e.to_string()))
        })
    }
}
