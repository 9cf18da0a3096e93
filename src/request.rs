// ABOUTME: Pure request helpers: resource URL builder, bearer header merger, per-call options
// ABOUTME: Shared by the OAuth and resource façades; no I/O happens in this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{endpoints, headers, request_defaults};
use std::collections::{BTreeMap, HashMap};

/// Header name to value map
pub type Headers = HashMap<String, String>;

/// Form field name to value map for POST/PUT payloads
pub type FormData = BTreeMap<String, String>;

/// Build the absolute URL of a user-scoped Fitbit resource
///
/// Produces `https://api.fitbit.com/{api_version}/user/{user_id}{path}`.
/// `None` selects the defaults (`-` for the current user, version `1`).
/// The path is not validated or escaped and should start with `/`.
#[must_use]
pub fn build_url(path: &str, user_id: Option<&str>, api_version: Option<&str>) -> String {
    resource_url(endpoints::FITBIT_API_BASE_URL, path, user_id, api_version)
}

fn resource_url(
    base: &str,
    path: &str,
    user_id: Option<&str>,
    api_version: Option<&str>,
) -> String {
    let user_id = user_id.unwrap_or(request_defaults::CURRENT_USER_ID);
    let api_version = api_version.unwrap_or(request_defaults::API_VERSION);
    format!("{base}/{api_version}/user/{user_id}{path}")
}

/// Build request headers carrying the bearer token plus caller extras
///
/// `Authorization: Bearer <token>` is always present unless an extra header
/// replaces it. Header names compare case-insensitively, so an extra
/// `authorization` entry overrides the default one.
///
/// Extras are applied in byte order of their names. When two extras differ
/// only by case (`X-Foo` and `x-foo`) the one sorting last wins, whatever
/// the map's iteration order.
#[must_use]
pub fn merge_headers(access_token: &str, extra_headers: Option<&Headers>) -> Headers {
    let mut merged = Headers::new();
    merged.insert(
        headers::AUTHORIZATION.to_owned(),
        format!("{}{access_token}", headers::BEARER_PREFIX),
    );

    if let Some(extra) = extra_headers {
        let mut ordered: Vec<_> = extra.iter().collect();
        ordered.sort_unstable();

        for (name, value) in ordered {
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            merged.insert(name.clone(), value.clone());
        }
    }

    merged
}

/// Base URL the client talks to
///
/// The default reproduces [`build_url`] exactly. Overriding the base is only
/// meant for pointing the client at a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base_url: String,
}

impl Endpoints {
    /// Endpoints rooted at `api_base_url` (a trailing `/` is ignored)
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }

    /// API base URL without a trailing slash
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Resource URL under this base, same shape as [`build_url`]
    #[must_use]
    pub fn resource_url(
        &self,
        path: &str,
        user_id: Option<&str>,
        api_version: Option<&str>,
    ) -> String {
        resource_url(&self.api_base_url, path, user_id, api_version)
    }

    /// Authorization endpoint, on the API host before the web host rewrite
    #[must_use]
    pub fn authorize_url(&self) -> String {
        self.oauth_url(endpoints::AUTHORIZE_PATH)
    }

    /// Token endpoint
    #[must_use]
    pub fn token_url(&self) -> String {
        self.oauth_url(endpoints::TOKEN_PATH)
    }

    /// Revocation endpoint
    #[must_use]
    pub fn revoke_url(&self) -> String {
        self.oauth_url(endpoints::REVOKE_PATH)
    }

    fn oauth_url(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base_url)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(endpoints::FITBIT_API_BASE_URL)
    }
}

/// Options for `get` and `delete`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Target user; `None` means the token's own user (`-`)
    pub user_id: Option<String>,
    /// Headers merged over the default `Authorization` header
    pub extra_headers: Option<Headers>,
    /// API version segment; `None` means `1`
    pub api_version: Option<String>,
}

impl RequestOptions {
    /// Options with every field defaulted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target another user's resources
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Use another API version segment
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Add one extra header, replacing an earlier one of the same name
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace all extra headers
    #[must_use]
    pub fn extra_headers(mut self, extra_headers: Headers) -> Self {
        self.extra_headers = Some(extra_headers);
        self
    }

    /// Request values in the given unit system (`en_US`, `en_GB`, ...)
    #[must_use]
    pub fn accept_language(self, language: impl Into<String>) -> Self {
        self.header(headers::ACCEPT_LANGUAGE, language)
    }

    /// Request formatting for the given locale
    #[must_use]
    pub fn accept_locale(self, locale: impl Into<String>) -> Self {
        self.header(headers::ACCEPT_LOCALE, locale)
    }

    pub(crate) fn url(&self, endpoints: &Endpoints, path: &str) -> String {
        endpoints.resource_url(path, self.user_id.as_deref(), self.api_version.as_deref())
    }
}

/// Options for `post` and `put`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// User, headers, and version, as for reads
    pub request: RequestOptions,
    /// Form-encoded payload; `None` sends no body
    pub data: Option<FormData>,
}

impl WriteOptions {
    /// Options with every field defaulted and no payload
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole payload
    #[must_use]
    pub fn data(mut self, data: FormData) -> Self {
        self.data = Some(data);
        self
    }

    /// Add one form field to the payload
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.data
            .get_or_insert_with(FormData::new)
            .insert(name.into(), value.to_string());
        self
    }

    /// Replace the user, header and version options
    #[must_use]
    pub fn request(mut self, request: RequestOptions) -> Self {
        self.request = request;
        self
    }
}

impl From<RequestOptions> for WriteOptions {
    fn from(request: RequestOptions) -> Self {
        Self {
            request,
            data: None,
        }
    }
}
