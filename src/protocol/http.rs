// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! reqwest-based transport.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::error::TransportError;
use crate::protocol::{ApiResponse, Transport};

/// Production endpoint of the `SwitchBot` cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.switch-bot.com";

const JSON: &str = "application/json";
const JSON_UTF8: &str = "application/json; charset=utf8";

// ============================================================================
// ApiConfig - Connection parameters
// ============================================================================

/// Configuration for the `SwitchBot` API client.
///
/// # Examples
///
/// ```
/// use switchbot_lib::protocol::ApiConfig;
/// use std::time::Duration;
///
/// // Defaults: production endpoint, transport default timeout
/// let config = ApiConfig::new("my-token");
/// assert_eq!(config.base_url(), "https://api.switch-bot.com");
///
/// // Pointing at a local stub
/// let config = ApiConfig::new("my-token")
///     .with_base_url("http://127.0.0.1:8080/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    token: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Creates a configuration using the given access token.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token issued in the `SwitchBot` app
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Overrides the base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets a request timeout. Without one, the transport default applies.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout, if one was set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an `http(s)` URL, the token is
    /// not a valid header value, or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TransportError::InvalidAddress(self.base_url));
        }

        let mut auth =
            HeaderValue::from_str(&self.token).map_err(|_| TransportError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
        })
    }
}

// ============================================================================
// HttpClient - Authenticated JSON transport
// ============================================================================

/// HTTP client bound to one base URL and access token.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, TransportError> {
        ApiConfig::new(token).into_client()
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse, TransportError> {
        tracing::debug!(method, path, "Sending HTTP request");

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received HTTP response");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, TransportError> {
        let request = self.client.get(self.build_url(path));
        self.execute("GET", path, request).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, TransportError> {
        let mut request = self
            .client
            .post(self.build_url(path))
            .header(CONTENT_TYPE, JSON_UTF8);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute("POST", path, request).await
    }
}
