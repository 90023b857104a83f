// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the `SwitchBot` cloud API.
//!
//! [`HttpClient`] owns the base URL and the `Authorization` header and
//! returns raw response bodies. Interpreting them is the job of
//! [`Envelope`](crate::response::Envelope).

mod http;

pub use http::{ApiConfig, DEFAULT_BASE_URL, HttpClient};

use serde::Serialize;

use crate::error::{ParseError, TransportError};

/// Raw response of a successful (2xx) HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Something that can issue authenticated requests against the API.
///
/// Paths are relative to the base URL, e.g. `/v1.0/devices`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails or the server answers
    /// with a non-success HTTP status.
    async fn get(&self, path: &str) -> Result<ApiResponse, TransportError>;

    /// Issues a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails or the server answers
    /// with a non-success HTTP status.
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, TransportError>;
}
