// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Humidifier `setMode` parameter.

use std::fmt;

use crate::error::ValueError;

/// Atomization mode for the humidifier `setMode` command.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::HumidifierMode;
///
/// assert_eq!(HumidifierMode::Auto.to_string(), "auto");
/// assert_eq!(HumidifierMode::Medium.to_string(), "102");
/// assert_eq!(HumidifierMode::target(45).unwrap().to_string(), "45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumidifierMode {
    /// Let the device regulate humidity.
    Auto,
    /// Atomization level 1 (`101`).
    Low,
    /// Atomization level 2 (`102`).
    Medium,
    /// Atomization level 3 (`103`).
    High,
    /// Hold a target relative humidity (0-100).
    Target(u8),
}

impl HumidifierMode {
    /// Maximum target humidity.
    pub const MAX_TARGET: u8 = 100;

    /// Creates a target humidity mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `humidity` is above 100.
    pub fn target(humidity: u8) -> Result<Self, ValueError> {
        if humidity > Self::MAX_TARGET {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX_TARGET),
                actual: u16::from(humidity),
            });
        }
        Ok(Self::Target(humidity))
    }
}

impl fmt::Display for HumidifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Low => f.write_str("101"),
            Self::Medium => f.write_str("102"),
            Self::High => f.write_str("103"),
            Self::Target(humidity) => write!(f, "{humidity}"),
        }
    }
}
