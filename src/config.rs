// ABOUTME: Client configuration with environment variable loading and validation
// ABOUTME: Holds OAuth credentials, endpoint base URL overrides, and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{endpoints, env_vars, timeouts};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// OAuth client credentials issued by Fitbit for a registered application
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// OAuth client ID from provider
    pub client_id: String,
    /// OAuth client secret from provider
    #[serde(skip_serializing)]
    pub client_secret: String,
}

impl Credentials {
    /// Create credentials from a client id and secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Full configuration of a [`FitbitApiClient`](crate::FitbitApiClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application credentials
    pub credentials: Credentials,
    /// Base URL for the REST API and the OAuth token/revoke endpoints
    pub api_base_url: String,
    /// Whole-request timeout in seconds; `None` lets a call wait as long as the server takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Connection timeout, in seconds
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration targeting the public Fitbit API, with no request timeout
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(client_id, client_secret),
            api_base_url: endpoints::FITBIT_API_BASE_URL.to_owned(),
            request_timeout_secs: None,
            connect_timeout_secs: timeouts::CONNECT_TIMEOUT_SECS,
        }
    }

    /// Point the client at another API base URL (a local mock server, typically)
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Bound every OAuth and resource call to `secs` seconds
    #[must_use]
    pub const fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Override the connection timeout
    #[must_use]
    pub const fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Load configuration from environment variables and defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id =
            env::var(env_vars::CLIENT_ID).map_err(|_| ConfigError::Missing(env_vars::CLIENT_ID))?;
        let client_secret = env::var(env_vars::CLIENT_SECRET)
            .map_err(|_| ConfigError::Missing(env_vars::CLIENT_SECRET))?;

        let mut config = Self::new(client_id, client_secret);

        if let Ok(base) = env::var(env_vars::API_BASE_URL) {
            config.api_base_url = base;
        }
        config.request_timeout_secs = secs_from_env(env_vars::HTTP_TIMEOUT_SECS)?;
        if let Some(secs) = secs_from_env(env_vars::HTTP_CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout_secs = secs;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error on empty credentials, zero timeouts, or an unparseable base URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.client_id.is_empty() {
            return Err(ConfigError::Invalid {
                var: env_vars::CLIENT_ID,
                reason: "client id cannot be empty".to_owned(),
            });
        }

        if self.credentials.client_secret.is_empty() {
            return Err(ConfigError::Invalid {
                var: env_vars::CLIENT_SECRET,
                reason: "client secret cannot be empty".to_owned(),
            });
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                var: env_vars::HTTP_TIMEOUT_SECS,
                reason: "timeout must be greater than 0".to_owned(),
            });
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                reason: "timeout must be greater than 0".to_owned(),
            });
        }

        Url::parse(&self.api_base_url).map_err(|e| ConfigError::Invalid {
            var: env_vars::API_BASE_URL,
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Request timeout as a `Duration`, if one is set
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Connection timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn secs_from_env(var: &'static str) -> Result<Option<u64>, ConfigError> {
    env::var(var).map_or(Ok(None), |raw| {
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var,
                reason: format!("'{raw}' is not a number of seconds"),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("", "");

        // Should fail with empty client credentials
        assert!(config.validate().is_err());

        // Should pass with valid credentials
        config.credentials = Credentials::new("test_client", "test_secret");
        assert!(config.validate().is_ok());

        // Should fail with zero timeout
        config.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        // A missing request timeout is valid
        config.request_timeout_secs = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new("id", "secret").with_api_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                var: env_vars::API_BASE_URL,
                ..
            })
        ));
    }

    #[test]
    fn test_defaults_target_public_api() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.api_base_url, "https://api.fitbit.com");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_request_timeout_names_its_variable() {
        let config = ClientConfig::new("id", "secret").with_request_timeout(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                var: env_vars::HTTP_TIMEOUT_SECS,
                ..
            })
        ));
        assert_eq!(
            ClientConfig::new("id", "secret")
                .with_request_timeout(30)
                .request_timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("my_client", "super_secret_value");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("my_client"));
        assert!(!debug.contains("super_secret_value"));
    }
}
