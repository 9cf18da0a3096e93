// ABOUTME: OAuth 2.0 authorization-code flow against Fitbit: authorize URL, code exchange, refresh, revoke
// ABOUTME: Token endpoints use HTTP Basic client authentication; provider rejections become AuthError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::FitbitApiClient;
use crate::constants::{endpoints, headers, oauth};
use crate::errors::AuthError;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};
use url::form_urlencoded;

/// OAuth 2.0 token set as returned by the Fitbit token endpoint
///
/// This crate never persists tokens. Callers own storage and decide when to
/// refresh; [`Token::will_expire_soon`] is only a hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The access token string
    pub access_token: String,
    /// Refresh token for obtaining new access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds; `None` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Token type (usually "Bearer")
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Space-separated list of granted scopes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Fitbit user ID the token was issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Expiration timestamp (UTC), computed from `expires_in` on receipt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Any other fields the provider sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_token_type() -> String {
    oauth::DEFAULT_TOKEN_TYPE.to_owned()
}

impl Token {
    /// Rebuild a token handle from stored fields
    ///
    /// A missing or negative `expires_in` (the `-1` "unset" convention) is
    /// treated as unbounded rather than as already expired.
    pub fn from_parts(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in: Option<i64>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.filter(|token| !token.is_empty()),
            expires_in: expires_in.filter(|secs| *secs >= 0),
            token_type: default_token_type(),
            scope: None,
            user_id: None,
            expires_at: None,
            extra: Map::new(),
        }
        .stamp_expiry()
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= Utc::now())
    }

    /// Check if the token will expire within 5 minutes
    #[must_use]
    pub fn will_expire_soon(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            expires_at <= Utc::now() + Duration::minutes(oauth::EXPIRY_SOON_MINUTES)
        })
    }

    fn stamp_expiry(mut self) -> Self {
        self.expires_in = self.expires_in.filter(|secs| *secs >= 0);
        self.expires_at = self
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        self
    }
}

impl FitbitApiClient {
    /// Build the URL that sends the user to Fitbit's consent page
    ///
    /// The URL is first assembled on the API host and then moved to the web
    /// host by replacing the first `api` substring with `www`. On the default
    /// endpoints that occurrence is always the host label, so the result
    /// always points at `www.fitbit.com`.
    ///
    /// `prompt` and `state` are omitted from the query when `None`.
    #[must_use]
    pub fn authorize_url(
        &self,
        scope: &str,
        redirect_url: &str,
        prompt: Option<&str>,
        state: Option<&str>,
    ) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("response_type", oauth::RESPONSE_TYPE_CODE)
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("scope", scope)
            .append_pair("redirect_uri", redirect_url);
        if let Some(prompt) = prompt {
            query.append_pair("prompt", prompt);
        }
        if let Some(state) = state {
            query.append_pair("state", state);
        }

        format!("{}?{}", self.endpoints.authorize_url(), query.finish()).replacen(
            endpoints::AUTHORIZE_HOST_FROM,
            endpoints::AUTHORIZE_HOST_TO,
            1,
        )
    }

    /// Exchange an authorization code for a token set
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] with the provider's error body if the
    /// code is rejected, or [`AuthError::Transport`] if the endpoint is unreachable
    #[instrument(skip(self, code), fields(provider = "fitbit", api_call = "exchange_code"))]
    pub async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_url: &str,
    ) -> Result<Token, AuthError> {
        let params = [
            ("grant_type", oauth::GRANT_AUTHORIZATION_CODE),
            ("code", code),
            ("redirect_uri", redirect_url),
        ];

        let token = self.token_request(&params).await?;
        info!(user_id = ?token.user_id, "Exchanged Fitbit authorization code");
        Ok(token)
    }

    /// Refresh an access token
    ///
    /// `expires_in` is the remaining lifetime of the current token, if known.
    /// It only shapes the local token handle and is never sent to Fitbit.
    /// If the provider omits a new refresh token, the one passed in is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] if the refresh token is invalid or
    /// expired, or [`AuthError::Transport`] if the endpoint is unreachable
    #[instrument(
        skip(self, access_token, refresh_token),
        fields(provider = "fitbit", api_call = "refresh_token")
    )]
    pub async fn refresh_token(
        &self,
        access_token: &str,
        refresh_token: &str,
        expires_in: Option<i64>,
    ) -> Result<Token, AuthError> {
        let current = Token::from_parts(access_token, Some(refresh_token.to_owned()), expires_in);
        let refresh = current.refresh_token.as_deref().unwrap_or_default();

        let params = [
            ("grant_type", oauth::GRANT_REFRESH_TOKEN),
            ("refresh_token", refresh),
        ];

        let mut token = self.token_request(&params).await?;
        if token.refresh_token.is_none() {
            token.refresh_token = current.refresh_token;
        }

        info!("Refreshed Fitbit access token");
        Ok(token)
    }

    /// Revoke an access token (and the grant it belongs to)
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] if Fitbit rejects the revocation, or
    /// [`AuthError::Transport`] if the endpoint is unreachable
    #[instrument(skip(self, access_token), fields(provider = "fitbit", api_call = "revoke_token"))]
    pub async fn revoke_token(&self, access_token: &str) -> Result<(), AuthError> {
        let handle = Token::from_parts(access_token, None, None);
        let params = [
            ("token", handle.access_token.as_str()),
            ("token_type_hint", oauth::TOKEN_TYPE_HINT_ACCESS),
        ];

        let (status, body) = self
            .oauth_post(&self.endpoints.revoke_url(), &params)
            .await?;
        if !status.is_success() {
            return Err(Self::provider_error(status, body));
        }

        info!("Revoked Fitbit access token");
        Ok(())
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> Result<Token, AuthError> {
        let (status, body) = self.oauth_post(&self.endpoints.token_url(), params).await?;
        if !status.is_success() {
            return Err(Self::provider_error(status, body));
        }

        serde_json::from_str::<Token>(&body)
            .map(Token::stamp_expiry)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    /// POST a form to an OAuth endpoint with Basic client authentication
    async fn oauth_post(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<(reqwest::StatusCode, String), AuthError> {
        debug!("Making OAuth request to: {url}");

        // Fitbit requires Basic auth on the token and revoke endpoints
        let auth_value = Engine::encode(
            &BASE64_STANDARD,
            format!(
                "{}:{}",
                self.credentials.client_id, self.credentials.client_secret
            ),
        );

        let response = self
            .http
            .post(url)
            .header(
                headers::AUTHORIZATION,
                format!("{}{auth_value}", headers::BASIC_PREFIX),
            )
            .form(params)
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        debug!("Received OAuth response with status: {status}");

        let body = response.text().await.map_err(AuthError::Transport)?;
        Ok((status, body))
    }

    fn provider_error(status: reqwest::StatusCode, body: String) -> AuthError {
        let payload = serde_json::from_str(&body).unwrap_or(Value::String(body));
        warn!(status = status.as_u16(), error = %payload, "Fitbit OAuth request rejected");
        AuthError::Provider {
            status: status.as_u16(),
            payload,
        }
    }
}
