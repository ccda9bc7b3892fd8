// ABOUTME: Client for the remote sleep analysis backend
// ABOUTME: Single bounded POST per request with typed failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Backend Client
//!
//! The backend owns the authoritative algorithm; this module only knows its
//! contract: `POST {base}/analyze` with the caller's payload as JSON, answered
//! by a JSON analysis record. The call is made exactly once, with no retries.
//!
//! Both documents cross this module as [`RawValue`]: the payload goes out as
//! the caller wrote it and the answer comes back as the backend wrote it.

use crate::config::AnalysisServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::value::RawValue;
use thiserror::Error;

/// Ways a backend call can fail
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status
    #[error("analysis service returned HTTP {status}")]
    Status {
        /// Status the backend answered with
        status: StatusCode,
    },
    /// No answer within the configured timeout
    #[error("analysis service timed out")]
    Timeout(#[source] reqwest::Error),
    /// Connection refused, DNS failure, reset, or similar
    #[error("analysis service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    /// The backend answered 2xx with a body that is not JSON
    #[error("analysis service returned an unreadable body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl BackendError {
    /// Whether this failure means the backend is unavailable
    ///
    /// Unavailability is recovered with the fallback estimator. A 2xx answer
    /// with an unreadable body is not: the backend did respond.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::Timeout(_) | Self::Transport(_)
        )
    }

    /// Backend status code, when the backend answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(status.as_u16()),
            Self::Timeout(_) | Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Transport(error)
        }
    }
}

impl From<BackendError> for AppError {
    fn from(error: BackendError) -> Self {
        let message = error.to_string();
        if error.is_unavailable() {
            Self::backend_unavailable(message).with_source(error)
        } else {
            Self::internal(message).with_source(error)
        }
    }
}

/// Remote sleep analysis service
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Submit `payload` for analysis and return the backend's JSON answer verbatim
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] describing why no usable answer arrived
    async fn analyze(&self, payload: &RawValue) -> Result<Box<RawValue>, BackendError>;
}

/// HTTP implementation of [`AnalysisBackend`]
pub struct HttpAnalysisBackend {
    analyze_url: String,
    http_client: Client,
}

impl HttpAnalysisBackend {
    /// Create a backend client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &AnalysisServiceConfig) -> AppResult<Self> {
        let http_client = create_client_with_timeout(config.timeout(), config.connect_timeout())
            .map_err(|e| {
                AppError::internal(format!("Failed to build analysis service client: {e}"))
                    .with_source(e)
            })?;

        Ok(Self {
            analyze_url: config.analyze_url(),
            http_client,
        })
    }

    /// Endpoint this client posts to
    #[must_use]
    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn analyze(&self, payload: &RawValue) -> Result<Box<RawValue>, BackendError> {
        let response = self
            .http_client
            .post(&self.analyze_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(BackendError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { status });
        }

        let body = response.bytes().await.map_err(BackendError::from_reqwest)?;
        serde_json::from_slice(&body).map_err(BackendError::Decode)
    }
}
