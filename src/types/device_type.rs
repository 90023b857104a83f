// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kinds of physical `SwitchBot` devices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The `deviceType` of a physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// `SwitchBot` Hub.
    Hub,
    /// `SwitchBot` Hub Mini.
    #[serde(rename = "Hub Mini")]
    HubMini,
    /// `SwitchBot` Hub Plus.
    #[serde(rename = "Hub Plus")]
    HubPlus,
    /// `SwitchBot` Bot (button pusher).
    Bot,
    /// `SwitchBot` Curtain.
    Curtain,
    /// `SwitchBot` Plug.
    Plug,
    /// `SwitchBot` Thermometer and Hygrometer.
    Meter,
    /// `SwitchBot` Humidifier.
    Humidifier,
    /// `SwitchBot` Smart Fan.
    #[serde(rename = "Smart Fan")]
    SmartFan,
}

impl DeviceType {
    /// All device types, in the order the vendor documents them.
    pub const ALL: [Self; 9] = [
        Self::Hub,
        Self::HubMini,
        Self::HubPlus,
        Self::Bot,
        Self::Curtain,
        Self::Plug,
        Self::Meter,
        Self::Humidifier,
        Self::SmartFan,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hub => "Hub",
            Self::HubMini => "Hub Mini",
            Self::HubPlus => "Hub Plus",
            Self::Bot => "Bot",
            Self::Curtain => "Curtain",
            Self::Plug => "Plug",
            Self::Meter => "Meter",
            Self::Humidifier => "Humidifier",
            Self::SmartFan => "Smart Fan",
        }
    }

    /// Returns `true` for the hub family, which relays commands for others.
    #[must_use]
    pub const fn is_hub(&self) -> bool {
        matches!(self, Self::Hub | Self::HubMini | Self::HubPlus)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValueError::unrecognized("device type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        for device_type in DeviceType::ALL {
            let json = serde_json::to_string(&device_type).unwrap();
            assert_eq!(json, format!("\"{device_type}\""));
        }
    }

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!("Smart Fan".parse::<DeviceType>().unwrap(), DeviceType::SmartFan);
        assert!("Smart Lock".parse::<DeviceType>().is_err());
    }

    #[test]
    fn hub_family() {
        assert!(DeviceType::HubMini.is_hub());
        assert!(!DeviceType::Meter.is_hub());
    }
}
