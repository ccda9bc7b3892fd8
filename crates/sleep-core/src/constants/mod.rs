// ABOUTME: Application constants for fallback policy, configuration keys, and defaults
// ABOUTME: Central place for values that must stay stable across deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fixed values reported by the local fallback estimator
///
/// These are policy, not measurements. Callers compare against them, so they
/// must not drift.
pub mod fallback {
    /// Efficiency reported whenever any sleep was recorded
    pub const EFFICIENCY: f64 = 85.0;
    /// Awake share reported regardless of input
    pub const AWAKE_PERCENTAGE: f64 = 15.0;
    /// Conservative overall score reported regardless of input
    pub const SLEEP_SCORE: f64 = 75.0;
    /// Note attached to every fallback result
    pub const NOTE: &str = "Fallback analysis - analysis service unavailable";
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Analysis backend base URL
    pub const ANALYSIS_SERVICE_URL: &str = "ANALYSIS_SERVICE_URL";
    /// Analysis backend request timeout in seconds
    pub const ANALYSIS_SERVICE_TIMEOUT_SECS: &str = "ANALYSIS_SERVICE_TIMEOUT_SECS";
    /// Analysis backend connect timeout in seconds
    pub const ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS: &str = "ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS";
    /// Identity service base URL
    pub const IDENTITY_SERVICE_URL: &str = "IDENTITY_SERVICE_URL";
    /// Identity service public API key
    pub const IDENTITY_SERVICE_API_KEY: &str = "IDENTITY_SERVICE_API_KEY";
    /// Identity service request timeout in seconds
    pub const IDENTITY_SERVICE_TIMEOUT_SECS: &str = "IDENTITY_SERVICE_TIMEOUT_SECS";
    /// Inbound request body limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default analysis backend base URL
    pub const ANALYSIS_SERVICE_URL: &str = "http://analysis-service:8000";
    /// Default analysis backend request timeout
    pub const ANALYSIS_SERVICE_TIMEOUT_SECS: u64 = 10;
    /// Default analysis backend connect timeout
    pub const ANALYSIS_SERVICE_CONNECT_TIMEOUT_SECS: u64 = 3;
    /// Default identity service request timeout
    pub const IDENTITY_SERVICE_TIMEOUT_SECS: u64 = 10;
    /// Default inbound body limit (1 MiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}

/// HTTP paths
pub mod endpoints {
    /// Inbound analysis route, also the path appended to the backend base URL
    pub const ANALYZE: &str = "/analyze";
    /// Identity service user lookup, appended to its base URL
    pub const IDENTITY_USER: &str = "/auth/v1/user";
}

/// CORS header values
pub mod cors {
    /// Allowed origin on every response
    pub const ALLOW_ORIGIN: &str = "*";
    /// Methods advertised on preflight
    pub const ALLOW_METHODS: &str = "POST, OPTIONS";
    /// Headers advertised on preflight
    pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
}

/// Service names used in logs and health output
pub mod service_names {
    /// This gateway
    pub const SLEEP_GATEWAY: &str = "sleep-gateway";
}
