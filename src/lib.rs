// ABOUTME: Main library entry point for the Fitbit Web API client
// ABOUTME: Exposes OAuth 2.0 authorization-code helpers and authenticated REST verbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit API Client
//!
//! A thin async client for the Fitbit Web API.
//!
//! ## Features
//!
//! - **`OAuth2` authorization-code flow**: authorize URL, code exchange,
//!   token refresh and revocation, with HTTP Basic client authentication
//! - **Generic REST verbs**: `get`, `post`, `put`, `delete` against
//!   `https://api.fitbit.com/{version}/user/{user}{path}` with a bearer token
//! - **No hidden state**: tokens are passed in and handed back; storing and
//!   refreshing them is the caller's business
//!
//! Resource calls resolve for every HTTP status Fitbit answers with. A 401 or
//! 429 is an [`ApiResult`] with that status, not an error; only failing to get
//! a response at all is a [`TransportError`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbit_api_client::{FitbitApiClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FitbitApiClient::new("CLIENT_ID", "CLIENT_SECRET");
//!
//!     let url = client.authorize_url(
//!         "activity profile",
//!         "https://example.com/callback",
//!         Some("consent"),
//!         Some("csrf-state"),
//!     );
//!     println!("Send the user to {url}");
//!
//!     let token = client
//!         .exchange_code_for_token("CODE", "https://example.com/callback")
//!         .await?;
//!
//!     let result = client
//!         .get("/profile.json", &token.access_token, &RequestOptions::new())
//!         .await?;
//!     if result.response.is_success() {
//!         println!("{}", result.body);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// OAuth 2.0 authorization-code flow
pub mod auth;
/// Client construction and shared state
pub mod client;
/// Client configuration and credentials
pub mod config;
/// Endpoint, header, and environment variable constants
pub mod constants;
/// Error types
pub mod errors;
/// HTTP client construction
pub mod http_client;
/// Tracing subscriber setup
pub mod logging;
/// URL builder, header merger, and per-call options
pub mod request;
/// Authenticated REST verbs
pub mod resource;

pub use auth::Token;
pub use client::FitbitApiClient;
pub use config::{ClientConfig, Credentials};
pub use errors::{AuthError, ClientError, ClientResult, ConfigError, TransportError};
pub use request::{
    build_url, merge_headers, Endpoints, FormData, Headers, RequestOptions, WriteOptions,
};
pub use resource::{ApiResult, ResponseMeta};
