// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared remote types.
//!
//! The server reports a remote's type as a category name. Remotes whose
//! buttons were learned by hand carry the same name prefixed with `DIY `
//! (for example `"DIY TV"`). Names outside the known set are kept verbatim
//! in [`RemoteCategory::Other`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DIY_PREFIX: &str = "DIY ";

/// Appliance category emulated by an infrared remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RemoteCategory {
    /// `Air Conditioner`
    AirConditioner,
    /// `TV`
    Tv,
    /// `Light`
    Light,
    /// `IPTV/Streamer`
    Streamer,
    /// `Set Top Box`
    SetTopBox,
    /// `DVD`
    Dvd,
    /// `Fan`
    Fan,
    /// `Projector`
    Projector,
    /// `Camera`
    Camera,
    /// `Air Purifier`
    AirPurifier,
    /// `Speaker`
    Speaker,
    /// `Water Heater`
    WaterHeater,
    /// `Vacuum Cleaner`
    VacuumCleaner,
    /// `Others`
    Others,
    /// A category name this crate does not know yet.
    Other(String),
}

impl RemoteCategory {
    /// All known categories.
    pub const ALL: [Self; 14] = [
        Self::AirConditioner,
        Self::Tv,
        Self::Light,
        Self::Streamer,
        Self::SetTopBox,
        Self::Dvd,
        Self::Fan,
        Self::Projector,
        Self::Camera,
        Self::AirPurifier,
        Self::Speaker,
        Self::WaterHeater,
        Self::VacuumCleaner,
        Self::Others,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AirConditioner => "Air Conditioner",
            Self::Tv => "TV",
            Self::Light => "Light",
            Self::Streamer => "IPTV/Streamer",
            Self::SetTopBox => "Set Top Box",
            Self::Dvd => "DVD",
            Self::Fan => "Fan",
            Self::Projector => "Projector",
            Self::Camera => "Camera",
            Self::AirPurifier => "Air Purifier",
            Self::Speaker => "Speaker",
            Self::WaterHeater => "Water Heater",
            Self::VacuumCleaner => "Vacuum Cleaner",
            Self::Others => "Others",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns `true` for names outside the known set.
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<&str> for RemoteCategory {
    fn from(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl fmt::Display for RemoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// The `remoteType` of an infrared remote.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::{RemoteCategory, RemoteType};
///
/// let learned: RemoteType = "DIY TV".parse().unwrap();
/// assert_eq!(learned.category(), &RemoteCategory::Tv);
/// assert!(learned.is_diy());
/// assert_eq!(learned.to_string(), "DIY TV");
///
/// let unknown: RemoteType = "Robot Arm".parse().unwrap();
/// assert_eq!(unknown.category(), &RemoteCategory::Other("Robot Arm".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteType {
    category: RemoteCategory,
    diy: bool,
}

impl RemoteType {
    /// A preset remote of the given category.
    #[must_use]
    pub fn new(category: RemoteCategory) -> Self {
        Self {
            category,
            diy: false,
        }
    }

    /// A learned (`DIY`) remote of the given category.
    #[must_use]
    pub fn diy(category: RemoteCategory) -> Self {
        Self {
            category,
            diy: true,
        }
    }

    /// Returns the appliance category.
    #[must_use]
    pub fn category(&self) -> &RemoteCategory {
        &self.category
    }

    /// Returns `true` when the remote was learned button by button.
    #[must_use]
    pub const fn is_diy(&self) -> bool {
        self.diy
    }
}

impl From<RemoteCategory> for RemoteType {
    fn from(category: RemoteCategory) -> Self {
        Self::new(category)
    }
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.diy {
            f.write_str(DIY_PREFIX)?;
        }
        f.write_str(self.category.as_str())
    }
}

impl From<&str> for RemoteType {
    fn from(name: &str) -> Self {
        match name.strip_prefix(DIY_PREFIX) {
            Some(rest) => Self::diy(RemoteCategory::from(rest)),
            None => Self::new(RemoteCategory::from(name)),
        }
    }
}

impl FromStr for RemoteType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for RemoteType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RemoteType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preset() {
        let remote: RemoteType = "Air Conditioner".parse().unwrap();
        assert_eq!(remote.category(), &RemoteCategory::AirConditioner);
        assert!(!remote.is_diy());
    }

    #[test]
    fn parse_diy() {
        let remote: RemoteType = "DIY Light".parse().unwrap();
        assert_eq!(remote, RemoteType::diy(RemoteCategory::Light));
    }

    #[test]
    fn streamer_is_not_tv() {
        let remote: RemoteType = "IPTV/Streamer".parse().unwrap();
        assert_eq!(remote.category(), &RemoteCategory::Streamer);
    }

    #[test]
    fn unknown_category_kept_verbatim() {
        let remote: RemoteType = "Toaster".parse().unwrap();
        assert_eq!(remote.category(), &RemoteCategory::Other("Toaster".to_string()));
        assert!(remote.category().is_other());
        assert!(!remote.is_diy());

        let learned: RemoteType = "DIY Toaster".parse().unwrap();
        assert!(learned.is_diy());
        assert_eq!(learned.to_string(), "DIY Toaster");

        let bare: RemoteType = "DIY".parse().unwrap();
        assert_eq!(bare.category(), &RemoteCategory::Other("DIY".to_string()));
    }

    #[test]
    fn unknown_category_round_trips_through_serde() {
        let remote: RemoteType = serde_json::from_str("\"DIY Robot Vacuum\"").unwrap();
        assert!(remote.is_diy());
        assert_eq!(
            serde_json::to_string(&remote).unwrap(),
            "\"DIY Robot Vacuum\""
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let remote: RemoteType = serde_json::from_str("\"DIY Set Top Box\"").unwrap();
        assert_eq!(remote, RemoteType::diy(RemoteCategory::SetTopBox));
        assert_eq!(
            serde_json::to_string(&remote).unwrap(),
            "\"DIY Set Top Box\""
        );
    }
}
