// ABOUTME: Shared test utilities for the Fitbit client integration tests
// ABOUTME: Provides quiet logging setup and clients pointed at a wiremock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitbit_api_client`

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fitbit_api_client::{ClientConfig, FitbitApiClient};
use std::sync::Once;
use wiremock::MockServer;

pub const TEST_CLIENT_ID: &str = "22ABCD";
pub const TEST_CLIENT_SECRET: &str = "test_client_secret";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Client whose API base URL is the mock server
pub fn mock_client(server: &MockServer) -> FitbitApiClient {
    init_test_logging();
    let config =
        ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET).with_api_base_url(server.uri());
    FitbitApiClient::with_config(config).unwrap()
}

/// Mock server client with a short connect timeout and the default (absent) request timeout
pub fn short_connect_client(server: &MockServer) -> FitbitApiClient {
    init_test_logging();
    let config = ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
        .with_api_base_url(server.uri())
        .with_connect_timeout(1);
    FitbitApiClient::with_config(config).unwrap()
}

/// Mock server client whose calls give up after `secs` seconds
pub fn request_timeout_client(server: &MockServer, secs: u64) -> FitbitApiClient {
    init_test_logging();
    let config = ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
        .with_api_base_url(server.uri())
        .with_request_timeout(secs);
    FitbitApiClient::with_config(config).unwrap()
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> FitbitApiClient {
    init_test_logging();
    let config = ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
        .with_api_base_url("http://127.0.0.1:1")
        .with_connect_timeout(2);
    FitbitApiClient::with_config(config).unwrap()
}

/// Expected `Authorization` value for HTTP Basic client authentication
pub fn basic_auth_header() -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{TEST_CLIENT_ID}:{TEST_CLIENT_SECRET}"))
    )
}
