// ABOUTME: HTTP client construction with bounded timeouts for outbound service calls
// ABOUTME: Every outbound call the gateway makes goes through a client built here

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// The request timeout bounds the whole exchange, body included, so a hung
/// upstream surfaces as a timeout error instead of stalling the caller.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialized. There is no
/// silent fallback to an unbounded default client.
pub fn create_client_with_timeout(
    timeout: Duration,
    connect_timeout: Duration,
) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
}
