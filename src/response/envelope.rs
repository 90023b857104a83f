// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response envelope decoding.
//!
//! Every API response is wrapped in the same outer object:
//!
//! ```json
//! {"statusCode": 100, "message": "success", "body": {}}
//! ```
//!
//! The payload is only meaningful when `statusCode` is `100`. Any other code
//! is a device-level failure, and a missing code means the access token was
//! rejected (`{"message": "Unauthorized"}`).

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{DeviceError, Error, ParseError};

/// The `statusCode` reported in an envelope.
///
/// Codes outside the documented set are kept in [`StatusCode::Other`] and
/// are still treated as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// `100`: the request succeeded.
    Success,
    /// `151`: the device type does not support the command.
    DeviceTypeError,
    /// `152`: the device ID does not exist.
    DeviceNotFound,
    /// `160`: the command is not supported by the device.
    CommandNotSupported,
    /// `161`: the device is offline.
    DeviceOffline,
    /// `171`: the hub relaying for the device is offline.
    HubDeviceOffline,
    /// `190`: device internal error, usually states out of sync with the server.
    SystemError,
    /// Any other code.
    Other(u16),
}

impl StatusCode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        match self {
            Self::Success => 100,
            Self::DeviceTypeError => 151,
            Self::DeviceNotFound => 152,
            Self::CommandNotSupported => 160,
            Self::DeviceOffline => 161,
            Self::HubDeviceOffline => 171,
            Self::SystemError => 190,
            Self::Other(code) => *code,
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::DeviceTypeError => "device type error",
            Self::DeviceNotFound => "device not found",
            Self::CommandNotSupported => "command is not supported",
            Self::DeviceOffline => "device offline",
            Self::HubDeviceOffline => "hub device offline",
            Self::SystemError => "system error",
            Self::Other(_) => "unrecognized status",
        }
    }

    /// Returns `true` for code `100`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        match code {
            100 => Self::Success,
            151 => Self::DeviceTypeError,
            152 => Self::DeviceNotFound,
            160 => Self::CommandNotSupported,
            161 => Self::DeviceOffline,
            171 => Self::HubDeviceOffline,
            190 => Self::SystemError,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u16(), self.description())
    }
}

/// A decoded but not yet interpreted response envelope.
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::{Envelope, StatusCode};
///
/// let envelope = Envelope::parse(r#"{"statusCode": 161, "message": "device offline"}"#).unwrap();
/// assert_eq!(envelope.status_code(), Some(StatusCode::DeviceOffline));
/// assert!(envelope.into_body::<serde_json::Value>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    body: Option<serde_json::Value>,
}

impl Envelope {
    /// Parses an envelope from a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        serde_json::from_str(raw).map_err(ParseError::Json)
    }

    /// Returns the status code, if the envelope carried one.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code.map(StatusCode::from)
    }

    /// Returns the server message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if this envelope describes a failure the server
    /// reported in a structured way (rejected token or failure status).
    #[must_use]
    pub fn is_failure(&self) -> bool {
        match self.status_code() {
            Some(code) => !code.is_success(),
            None => self.message.is_some(),
        }
    }

    /// Extracts the payload of a success envelope.
    ///
    /// # Errors
    ///
    /// - `Error::Unauthorized` when no status code is present
    /// - `Error::Device` when the status code is not `100`
    /// - `Error::Parse` when the body is missing or does not match `T`
    pub fn into_body<T: DeserializeOwned>(self) -> Result<T, Error> {
        let Some(code) = self.status_code() else {
            tracing::warn!(message = ?self.message, "Request rejected: invalid token");
            return Err(Error::Unauthorized);
        };

        if !code.is_success() {
            tracing::warn!(status = %code, message = ?self.message, "Request failed");
            return Err(DeviceError {
                code,
                message: self.message,
            }
            .into());
        }

        let body = self
            .body
            .ok_or_else(|| ParseError::MissingField("body".to_string()))?;
        serde_json::from_value(body).map_err(|e| ParseError::Json(e).into())
    }
}
