// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, analysis backend, and identity service settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment
//!
//! The gateway reads nothing from disk. Every setting comes from the process
//! environment, with defaults from [`sleep_core::constants::defaults`].

use crate::constants::{defaults, endpoints, env_config};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Remote analysis backend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisServiceConfig {
    /// Base URL, without trailing slash; `/analyze` is appended per request
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl AnalysisServiceConfig {
    /// Full URL of the analysis endpoint
    #[must_use]
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, endpoints::ANALYZE)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for AnalysisServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::ANALYSIS_SERVICE_URL.to_owned(),
            timeout_secs: defaults::ANALYSIS_SERVICE_TIMEOUT_SECS,
            connect_timeout_secs: defaults::ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Identity verification service settings
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityServiceConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Public API key sent alongside the caller's credential, if any
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl IdentityServiceConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for IdentityServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityServiceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Inbound request body limit in bytes
    pub max_request_body_bytes: usize,
    /// Remote analysis backend
    pub analysis_service: AnalysisServiceConfig,
    /// Identity verification service
    pub identity_service: IdentityServiceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when `IDENTITY_SERVICE_URL` is unset and
    /// `CONFIG_INVALID` when a numeric value does not parse or a timeout is zero.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let identity_base_url = env_var_non_empty(env_config::IDENTITY_SERVICE_URL)
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} must be set to verify caller credentials",
                    env_config::IDENTITY_SERVICE_URL
                ))
            })?;

        let analysis_service = AnalysisServiceConfig {
            base_url: trim_base_url(
                &env_var_non_empty(env_config::ANALYSIS_SERVICE_URL)
                    .unwrap_or_else(|| defaults::ANALYSIS_SERVICE_URL.to_owned()),
            ),
            timeout_secs: parse_timeout(
                env_config::ANALYSIS_SERVICE_TIMEOUT_SECS,
                defaults::ANALYSIS_SERVICE_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_timeout(
                env_config::ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS,
                defaults::ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let identity_service = IdentityServiceConfig {
            base_url: trim_base_url(&identity_base_url),
            api_key: env_var_non_empty(env_config::IDENTITY_SERVICE_API_KEY),
            timeout_secs: parse_timeout(
                env_config::IDENTITY_SERVICE_TIMEOUT_SECS,
                defaults::IDENTITY_SERVICE_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            host: env_var_non_empty(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port: parse_env_or(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(
                &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
            max_request_body_bytes: parse_env_or(
                env_config::MAX_REQUEST_BODY_BYTES,
                defaults::MAX_REQUEST_BODY_BYTES,
            )?,
            analysis_service,
            identity_service,
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Sleep Gateway Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Analysis Service: {} (timeout {}s, connect {}s)\n\
             - Identity Service: {} (api key {})\n\
             - Max Body: {} bytes",
            self.host,
            self.http_port,
            self.environment,
            self.analysis_service.base_url,
            self.analysis_service.timeout_secs,
            self.analysis_service.connect_timeout_secs,
            self.identity_service.base_url,
            if self.identity_service.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.max_request_body_bytes,
        )
    }
}

/// Read an env var, treating empty or whitespace-only values as unset
fn env_var_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse an env var, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env_var_non_empty(key).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}

/// Parse a timeout in seconds; zero would disable the bound, so it is rejected
fn parse_timeout(key: &str, default: u64) -> AppResult<u64> {
    let secs = parse_env_or(key, default)?;
    if secs == 0 {
        return Err(AppError::config_invalid(format!(
            "{key} must be greater than zero"
        )));
    }
    Ok(secs)
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://svc:8000/"), "http://svc:8000");
        assert_eq!(trim_base_url("http://svc:8000//"), "http://svc:8000");
        assert_eq!(trim_base_url("http://svc:8000"), "http://svc:8000");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_analyze_url() {
        let config = AnalysisServiceConfig {
            base_url: "http://localhost:9000".to_owned(),
            ..AnalysisServiceConfig::default()
        };
        assert_eq!(config.analyze_url(), "http://localhost:9000/analyze");
    }

    #[test]
    fn test_identity_config_debug_redacts_key() {
        let config = IdentityServiceConfig {
            base_url: "http://id".to_owned(),
            api_key: Some("secret-key".to_owned()),
            timeout_secs: 5,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
