// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `parameter` field of a command.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DEFAULT: &str = "default";

/// Argument of a command.
///
/// On the wire this is either the literal string `"default"`, a JSON number,
/// or a string (often several values joined with commas).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// The literal `"default"`.
    Default,
    /// A numeric argument, such as a TV channel.
    Number(u32),
    /// A textual argument, such as `"24,2,1,on"`.
    Text(String),
}

impl From<u32> for Parameter {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Parameter {
    fn from(value: String) -> Self {
        if value == DEFAULT {
            Self::Default
        } else {
            Self::Text(value)
        }
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Default => serializer.serialize_str(DEFAULT),
            Self::Number(n) => serializer.serialize_u32(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParameter {
    Number(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for Parameter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawParameter::deserialize(deserializer)? {
            RawParameter::Number(n) => Self::Number(n),
            RawParameter::Text(text) => Self::from(text),
        })
    }
}
