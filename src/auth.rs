// ABOUTME: Caller identity verification against the external identity service
// ABOUTME: Defines the IdentityVerifier seam and its HTTP-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Identity Verification
//!
//! The gateway does not issue or decode tokens itself. It hands the caller's
//! bearer credential to an external identity service and accepts whatever
//! principal comes back.
//!
//! ## Security Model
//!
//! - Any failure to verify (rejection, timeout, unreachable service, or a
//!   response without a user id) is reported as `AUTH_INVALID`
//! - The credential is forwarded only to the configured identity service
//! - The resolved principal is logged by id only

use crate::config::IdentityServiceConfig;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Verified caller identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable user identifier issued by the identity service
    pub id: String,
    /// Email on record, when the identity service shares it
    #[serde(default)]
    pub email: Option<String>,
}

/// Verifies a bearer credential and resolves it to a principal
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` and identify its owner
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` if the credential cannot be verified
    async fn verify(&self, token: &str) -> AppResult<Principal>;
}

/// Identity verifier backed by the identity service's user endpoint
///
/// Issues `GET {base_url}/auth/v1/user` with the caller's credential and the
/// service's public API key.
pub struct RemoteIdentityVerifier {
    user_url: String,
    api_key: Option<String>,
    http_client: Client,
}

impl RemoteIdentityVerifier {
    /// Create a verifier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &IdentityServiceConfig) -> AppResult<Self> {
        let http_client = create_client_with_timeout(config.timeout(), config.timeout())
            .map_err(|e| {
                AppError::internal(format!("Failed to build identity service client: {e}"))
                    .with_source(e)
            })?;

        Ok(Self {
            user_url: format!("{}{}", config.base_url, endpoints::IDENTITY_USER),
            api_key: config.api_key.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl IdentityVerifier for RemoteIdentityVerifier {
    async fn verify(&self, token: &str) -> AppResult<Principal> {
        let mut request = self
            .http_client
            .get(&self.user_url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"));
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request.send().await.map_err(|e| {
            debug!(error = %e, "Identity service request failed");
            AppError::auth_invalid("Unauthorized").with_source(e)
        })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Identity service rejected credential");
            return Err(AppError::auth_invalid("Unauthorized"));
        }

        let principal: Principal = response.json().await.map_err(|e| {
            debug!(error = %e, "Identity service returned an unreadable user");
            AppError::auth_invalid("Unauthorized").with_source(e)
        })?;

        if principal.id.trim().is_empty() {
            return Err(AppError::auth_invalid("Unauthorized"));
        }

        Ok(principal)
    }
}
