// ABOUTME: Authenticated GET/POST/PUT/DELETE against the user-scoped Fitbit REST namespace
// ABOUTME: Returns decoded body plus response metadata for every HTTP status; only transport failures error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::FitbitApiClient;
use crate::constants::request_defaults;
use crate::errors::TransportError;
use crate::request::{merge_headers, FormData, Headers, RequestOptions, WriteOptions};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Status, headers and final URL of a resource response
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status code as sent by Fitbit
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// URL the response came from
    pub url: String,
}

impl ResponseMeta {
    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Header value as text, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Decoded body and response metadata of a resource call
///
/// Produced for any status Fitbit answers with. A 401 or 429 arrives here
/// like a 200 does; check [`ResponseMeta::status`] before trusting `body`.
#[derive(Debug, Clone)]
pub struct ApiResult {
    /// JSON body; a JSON string of the raw text if it was not JSON, `null` if empty
    pub body: Value,
    /// Status, headers and URL
    pub response: ResponseMeta,
}

impl ApiResult {
    /// Split into `(body, response)`
    #[must_use]
    pub fn into_parts(self) -> (Value, ResponseMeta) {
        (self.body, self.response)
    }

    /// HTTP status code
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }
}

impl FitbitApiClient {
    /// GET a user-scoped resource, e.g. `/profile.json`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained
    #[instrument(skip(self, access_token, options), fields(provider = "fitbit", method = "GET"))]
    pub async fn get(
        &self,
        path: &str,
        access_token: &str,
        options: &RequestOptions,
    ) -> Result<ApiResult, TransportError> {
        self.send(Method::GET, path, access_token, options, None)
            .await
    }

    /// POST to a user-scoped resource, form-encoding `options.data`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained
    #[instrument(skip(self, access_token, options), fields(provider = "fitbit", method = "POST"))]
    pub async fn post(
        &self,
        path: &str,
        access_token: &str,
        options: &WriteOptions,
    ) -> Result<ApiResult, TransportError> {
        self.send(
            Method::POST,
            path,
            access_token,
            &options.request,
            options.data.as_ref(),
        )
        .await
    }

    /// PUT to a user-scoped resource, form-encoding `options.data`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained
    #[instrument(skip(self, access_token, options), fields(provider = "fitbit", method = "PUT"))]
    pub async fn put(
        &self,
        path: &str,
        access_token: &str,
        options: &WriteOptions,
    ) -> Result<ApiResult, TransportError> {
        self.send(
            Method::PUT,
            path,
            access_token,
            &options.request,
            options.data.as_ref(),
        )
        .await
    }

    /// DELETE a user-scoped resource
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained
    #[instrument(skip(self, access_token, options), fields(provider = "fitbit", method = "DELETE"))]
    pub async fn delete(
        &self,
        path: &str,
        access_token: &str,
        options: &RequestOptions,
    ) -> Result<ApiResult, TransportError> {
        self.send(Method::DELETE, path, access_token, options, None)
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        access_token: &str,
        options: &RequestOptions,
        data: Option<&FormData>,
    ) -> Result<ApiResult, TransportError> {
        let url = options.url(&self.endpoints, path);
        let headers = header_map(access_token, options.extra_headers.as_ref())?;

        debug!("Making HTTP {method} request to: {url}");

        let mut request = self.http.request(method, &url).headers(headers);
        if let Some(data) = data {
            request = request.form(data);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        debug!("Received HTTP response with status: {status}");

        let text = response.text().await?;

        Ok(ApiResult {
            body: decode_body(&text),
            response: ResponseMeta {
                status,
                headers,
                url,
            },
        })
    }
}

/// Turn merged string headers into a wire header map, defaulting `Accept` to JSON
fn header_map(access_token: &str, extra: Option<&Headers>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    map.insert(
        ACCEPT,
        HeaderValue::from_static(request_defaults::ACCEPT_JSON),
    );

    for (name, value) in merge_headers(access_token, extra) {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| TransportError::InvalidHeader {
                name: name.clone(),
            })?;
        let header_value =
            HeaderValue::from_str(&value).map_err(|_| TransportError::InvalidHeader { name })?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}
