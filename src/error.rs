// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `SwitchBot` client.
//!
//! Failures fall into a small hierarchy: the server rejecting the token,
//! the server reporting a device-level failure status, the HTTP layer
//! failing, a response that cannot be decoded, and invalid values supplied
//! by the caller.

use thiserror::Error;

use crate::response::StatusCode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The response envelope carried no status code: the token was rejected.
    #[error("HTTP 401 error: user permission is denied due to invalid token")]
    Unauthorized,

    /// The server reported a status code other than success.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The HTTP exchange itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successful response could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A value supplied by the caller is invalid.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// No infrared remote with this ID is registered on the account.
    #[error("{0} is not a valid device ID")]
    NotFound(String),

    /// The remote profile does not understand the requested command.
    #[error("{remote} remotes do not support the {command} command")]
    CapabilityNotSupported {
        /// The wire name of the rejected command.
        command: String,
        /// Name of the remote profile.
        remote: &'static str,
    },
}

/// A failure status reported inside the response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "device internal error due to device states not synchronized with server \
     (status {}: {}, server message: {message:?})",
    code.as_u16(),
    code.description()
)]
pub struct DeviceError {
    /// The status code reported by the server.
    pub code: StatusCode,
    /// The `message` field of the envelope, when present.
    pub message: Option<String>,
}

/// Errors raised by the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("something went wrong (HTTP status code: {status})")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept so a structured envelope can still be decoded.
        body: String,
    },

    /// The configured base URL is not usable.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The access token cannot be sent as an HTTP header.
    #[error("access token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

impl TransportError {
    /// Returns the HTTP status code when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidAddress(_) | Self::InvalidToken => None,
        }
    }
}

/// Errors related to decoding API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A name or code is not part of the enumerated set for `kind`.
    #[error("unknown {kind}: {value}")]
    Unrecognized {
        /// What was being parsed, e.g. `"air conditioner mode"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A structured parameter string has the wrong shape.
    #[error("malformed {kind} parameter: {value:?}")]
    MalformedParameter {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ValueError {
    pub(crate) fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn malformed(kind: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedParameter {
            kind,
            value: value.into(),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn unrecognized_display() {
        let err = ValueError::unrecognized("fan speed", "turbo");
        assert_eq!(err.to_string(), "unknown fan speed: turbo");
    }

    #[test]
    fn device_error_mentions_code() {
        let err = DeviceError {
            code: StatusCode::DeviceOffline,
            message: None,
        };
        let text = err.to_string();
        assert!(text.starts_with("device internal error"));
        assert!(text.contains("161"));
    }

    #[test]
    fn transport_status_display() {
        let err = TransportError::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "something went wrong (HTTP status code: 404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn not_found_display() {
        let err = Error::NotFound("02-202008110034-13".to_string());
        assert_eq!(err.to_string(), "02-202008110034-13 is not a valid device ID");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::unrecognized("mode", "x").into();
        assert!(matches!(err, Error::Value(ValueError::Unrecognized { .. })));
    }
}
