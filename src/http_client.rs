// ABOUTME: HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the reqwest client shared by the OAuth and resource calls of FitbitApiClient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Create a new HTTP client with custom timeout settings
///
/// Only the connection phase is bounded unless `timeout` is given; a slow
/// but successful response is otherwise waited for.
///
/// Falls back to a default client if the builder fails (TLS backend init).
#[must_use]
pub fn create_client_with_timeout(timeout: Option<Duration>, connect_timeout: Duration) -> Client {
    let mut builder = ClientBuilder::new()
        .connect_timeout(connect_timeout)
        .user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

/// Client for OAuth and resource calls
#[must_use]
pub fn shared_client(config: &ClientConfig) -> Client {
    create_client_with_timeout(config.request_timeout(), config.connect_timeout())
}
