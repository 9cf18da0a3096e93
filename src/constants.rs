// ABOUTME: Fitbit endpoint, header, and environment variable constants
// ABOUTME: Single source for hosts, OAuth paths, request defaults, and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain, the same way the rest of the crate is.

/// Fitbit hosts and OAuth endpoint paths
pub mod endpoints {
    /// Base URL of the Fitbit REST and OAuth token API
    pub const FITBIT_API_BASE_URL: &str = "https://api.fitbit.com";

    /// Authorization endpoint path (relative to the API base)
    pub const AUTHORIZE_PATH: &str = "oauth2/authorize";

    /// Token endpoint path used for code exchange and refresh
    pub const TOKEN_PATH: &str = "oauth2/token";

    /// Token revocation endpoint path
    pub const REVOKE_PATH: &str = "oauth2/revoke";

    /// Substring replaced in the authorize URL to move it onto the web host
    pub const AUTHORIZE_HOST_FROM: &str = "api";

    /// Replacement for [`AUTHORIZE_HOST_FROM`]
    pub const AUTHORIZE_HOST_TO: &str = "www";
}

/// Defaults applied to resource requests
pub mod request_defaults {
    /// User id meaning "the user the access token belongs to"
    pub const CURRENT_USER_ID: &str = "-";

    /// Fitbit Web API version used when none is given
    pub const API_VERSION: &str = "1";

    /// Value of the `Accept` header sent with every resource call
    pub const ACCEPT_JSON: &str = "application/json";
}

/// HTTP header names used by the client
pub mod headers {
    /// Standard authorization header name
    pub const AUTHORIZATION: &str = "Authorization";

    /// Prefix for bearer credentials in the authorization header
    pub const BEARER_PREFIX: &str = "Bearer ";

    /// Prefix for HTTP Basic credentials in the authorization header
    pub const BASIC_PREFIX: &str = "Basic ";

    /// Fitbit header selecting the unit system of response values
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

    /// Fitbit header selecting the locale of response formatting
    pub const ACCEPT_LOCALE: &str = "Accept-Locale";
}

/// OAuth 2.0 grant and form field values
pub mod oauth {
    /// `response_type` for the authorization-code flow
    pub const RESPONSE_TYPE_CODE: &str = "code";

    /// `grant_type` for code exchange
    pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

    /// `grant_type` for refresh
    pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

    /// `token_type_hint` sent when revoking an access token
    pub const TOKEN_TYPE_HINT_ACCESS: &str = "access_token";

    /// Token type assumed when the provider omits one
    pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

    /// Minutes before expiry at which a token counts as expiring soon
    pub const EXPIRY_SOON_MINUTES: i64 = 5;
}

/// HTTP client timeouts in seconds
pub mod timeouts {
    /// Connection timeout; requests themselves are unbounded unless configured
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names read by [`crate::config::ClientConfig::from_env`]
pub mod env_vars {
    /// OAuth client id (required)
    pub const CLIENT_ID: &str = "FITBIT_CLIENT_ID";

    /// OAuth client secret (required)
    pub const CLIENT_SECRET: &str = "FITBIT_CLIENT_SECRET";

    /// Override for the API base URL
    pub const API_BASE_URL: &str = "FITBIT_API_BASE_URL";

    /// Optional whole-request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FITBIT_HTTP_TIMEOUT_SECS";

    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FITBIT_HTTP_CONNECT_TIMEOUT_SECS";
}

/// Name reported by the logging layer
pub const SERVICE_NAME: &str = "fitbit-api-client";
