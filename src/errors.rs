// ABOUTME: Error types for OAuth calls, resource transport, and configuration loading
// ABOUTME: Non-2xx resource responses are results, not errors; only transport failures surface here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two error kinds cover the network surface of the client:
//!
//! - [`AuthError`] for anything the OAuth provider rejects, or that fails
//!   while talking to it, during code exchange, refresh or revocation.
//! - [`TransportError`] for resource calls that never produced an HTTP
//!   response.
//!
//! A resource call that reaches Fitbit and gets a 401, 404 or 429 back is
//! *not* an error at this layer. The status and error body are handed to the
//! caller in an [`ApiResult`](crate::resource::ApiResult).
//!
//! [`ConfigError`] covers loading a [`ClientConfig`](crate::config::ClientConfig)
//! from the environment, and [`ClientError`] wraps all three for callers that
//! want a single error type.

use serde_json::Value;
use thiserror::Error;

/// Failure signaled by the Fitbit OAuth endpoints
#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider answered with a non-success status
    #[error("OAuth provider rejected the request with HTTP {status}: {payload}")]
    Provider {
        /// HTTP status returned by the token or revoke endpoint
        status: u16,
        /// Error body as sent by the provider (JSON, or a JSON string of the raw text)
        payload: Value,
    },

    /// The token or revoke endpoint could not be reached
    #[error("OAuth request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Provider answered with success but the body is not a token response
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Provider error payload, when the provider answered at all
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Provider { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// HTTP status of the provider rejection
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure to complete a resource call at the HTTP layer
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS, connect, timeout, or body read failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A caller supplied header could not be put on the wire
    #[error("Invalid header '{name}'")]
    InvalidHeader {
        /// Header name as given by the caller
        name: String,
    },
}

impl TransportError {
    /// Whether the failure was a timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Whether the failure happened while connecting
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }
}

/// Invalid or missing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is absent
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    /// Value is present but unusable
    #[error("Invalid value for {var}: {reason}")]
    Invalid {
        /// Setting or environment variable name
        var: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Any error produced by this crate
#[derive(Debug, Error)]
pub enum ClientError {
    /// OAuth failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Resource transport failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for fallible client operations
pub type ClientResult<T> = Result<T, ClientError>;
