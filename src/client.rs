// ABOUTME: FitbitApiClient construction and shared state for the OAuth and resource façades
// ABOUTME: Holds immutable credentials, endpoints, and a pooled HTTP client; safe to share across tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{ClientConfig, Credentials};
use crate::errors::ConfigError;
use crate::http_client::shared_client;
use crate::request::Endpoints;
use reqwest::Client;
use tracing::debug;

/// Client for the Fitbit Web API
///
/// Covers the OAuth 2.0 authorization-code flow (see the `auth` module) and
/// authenticated GET/POST/PUT/DELETE calls against the user-scoped REST
/// namespace (see the `resource` module).
///
/// The client never stores tokens. Every resource call takes the access
/// token explicitly, and all state held here is immutable, so one instance
/// can be shared (or cloned) freely between concurrent tasks.
#[derive(Debug, Clone)]
pub struct FitbitApiClient {
    pub(crate) credentials: Credentials,
    pub(crate) endpoints: Endpoints,
    pub(crate) http: Client,
}

impl FitbitApiClient {
    /// Create a client for the public Fitbit API
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::from_parts(ClientConfig::new(client_id, client_secret))
    }

    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    /// Create a client from `FITBIT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    fn from_parts(config: ClientConfig) -> Self {
        debug!(
            client_id = %config.credentials.client_id,
            api_base_url = %config.api_base_url,
            "Creating Fitbit API client"
        );

        Self {
            http: shared_client(&config),
            endpoints: Endpoints::new(config.api_base_url),
            credentials: config.credentials,
        }
    }

    /// OAuth client id this client authenticates as
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    /// Endpoints this client targets
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
