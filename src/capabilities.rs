// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability descriptors for infrared remotes.
//!
//! A [`RemoteCapabilities`] value tells a [`RemoteDevice`](crate::RemoteDevice)
//! which remote type it drives and which buttons that remote has. All
//! remotes understand `turnOn`, `turnOff` and user-defined buttons; the rest
//! of the vocabulary depends on the appliance.

use crate::command::InfraredCommand;
use crate::types::{RemoteCategory, RemoteType};

const DVD_COMMANDS: &[&str] = &[
    "setMute",
    "FastForward",
    "Rewind",
    "Next",
    "Previous",
    "Pause",
    "Play",
    "Stop",
];

const SPEAKER_COMMANDS: &[&str] = &[
    "setMute",
    "FastForward",
    "Rewind",
    "Next",
    "Previous",
    "Pause",
    "Play",
    "Stop",
    "volumeAdd",
    "volumeSub",
];

/// What an infrared remote profile can do.
///
/// # Examples
///
/// ```
/// use switchbot_lib::RemoteCapabilities;
/// use switchbot_lib::command::InfraredCommand;
/// use switchbot_lib::types::{RemoteCategory, RemoteType};
///
/// let tv = RemoteCapabilities::TELEVISION;
/// assert!(tv.matches(&RemoteType::diy(RemoteCategory::Tv)));
/// assert!(tv.supports(&InfraredCommand::SetChannel(5)));
/// assert!(!tv.supports(&InfraredCommand::Swing));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCapabilities {
    name: &'static str,
    category: RemoteCategory,
    commands: &'static [&'static str],
}

impl RemoteCapabilities {
    /// Infrared light.
    pub const LIGHT: Self = Self {
        name: "Light",
        category: RemoteCategory::Light,
        commands: &["brightnessUp", "brightnessDown"],
    };

    /// Television.
    pub const TELEVISION: Self = Self {
        name: "Television",
        category: RemoteCategory::Tv,
        commands: &[
            "SetChannel",
            "volumeAdd",
            "volumeSub",
            "channelAdd",
            "channelSub",
        ],
    };

    /// Air conditioner.
    pub const AIR_CONDITIONER: Self = Self {
        name: "Air Conditioner",
        category: RemoteCategory::AirConditioner,
        commands: &["setAll"],
    };

    /// DVD player.
    pub const DVD: Self = Self {
        name: "DVD",
        category: RemoteCategory::Dvd,
        commands: DVD_COMMANDS,
    };

    /// Speaker.
    pub const SPEAKER: Self = Self {
        name: "Speaker",
        category: RemoteCategory::Speaker,
        commands: SPEAKER_COMMANDS,
    };

    /// Fan.
    pub const FAN: Self = Self {
        name: "Fan",
        category: RemoteCategory::Fan,
        commands: &["swing", "timer", "lowSpeed", "middleSpeed", "highSpeed"],
    };

    /// Returns the descriptor for a remote category, if one exists.
    #[must_use]
    pub fn for_category(category: &RemoteCategory) -> Option<Self> {
        [
            Self::LIGHT,
            Self::TELEVISION,
            Self::AIR_CONDITIONER,
            Self::DVD,
            Self::SPEAKER,
            Self::FAN,
        ]
        .into_iter()
        .find(|c| c.category == *category)
    }

    /// Returns the profile name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the remote category this profile drives.
    #[must_use]
    pub const fn category(&self) -> &RemoteCategory {
        &self.category
    }

    /// Returns the appliance-specific command names.
    #[must_use]
    pub const fn commands(&self) -> &'static [&'static str] {
        self.commands
    }

    /// Returns `true` if a remote of this type can be driven by this
    /// profile. Preset and learned (`DIY`) remotes both match; unknown
    /// categories never do.
    #[must_use]
    pub fn matches(&self, remote_type: &RemoteType) -> bool {
        *remote_type.category() == self.category
    }

    /// Returns `true` if the remote has a button for `command`.
    #[must_use]
    pub fn supports(&self, command: &InfraredCommand) -> bool {
        match command {
            InfraredCommand::TurnOn | InfraredCommand::TurnOff | InfraredCommand::Custom(_) => {
                true
            }
            other => other
                .literal()
                .is_some_and(|name| self.commands.contains(&name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AcFanSpeed, AcMode, AirConditionerSettings, PowerState};

    #[test]
    fn television_matches_preset_and_diy_only() {
        let tv = RemoteCapabilities::TELEVISION;
        assert!(tv.matches(&RemoteType::new(RemoteCategory::Tv)));
        assert!(tv.matches(&RemoteType::diy(RemoteCategory::Tv)));
        assert!(!tv.matches(&RemoteType::new(RemoteCategory::Streamer)));
        assert!(!tv.matches(&RemoteType::new(RemoteCategory::Light)));
        assert!(!tv.matches(&RemoteType::from("DIY TV Box")));
    }

    #[test]
    fn universal_commands_always_supported() {
        for caps in [
            RemoteCapabilities::LIGHT,
            RemoteCapabilities::FAN,
            RemoteCapabilities::AIR_CONDITIONER,
        ] {
            assert!(caps.supports(&InfraredCommand::TurnOn));
            assert!(caps.supports(&InfraredCommand::TurnOff));
            assert!(caps.supports(&InfraredCommand::Custom("x".to_string())));
        }
    }

    #[test]
    fn air_conditioner_vocabulary() {
        let ac = RemoteCapabilities::AIR_CONDITIONER;
        let settings =
            AirConditionerSettings::new(24, AcMode::Cool, AcFanSpeed::Auto, PowerState::On);
        assert!(ac.supports(&InfraredCommand::SetAll(settings)));
        assert!(!ac.supports(&InfraredCommand::BrightnessUp));
    }

    #[test]
    fn speaker_extends_dvd_with_volume() {
        assert!(RemoteCapabilities::SPEAKER.supports(&InfraredCommand::VolumeAdd));
        assert!(!RemoteCapabilities::DVD.supports(&InfraredCommand::VolumeAdd));
        assert!(RemoteCapabilities::DVD.supports(&InfraredCommand::Play));
    }

    #[test]
    fn for_category_lookup() {
        assert_eq!(
            RemoteCapabilities::for_category(&RemoteCategory::Fan),
            Some(RemoteCapabilities::FAN)
        );
        assert_eq!(RemoteCapabilities::for_category(&RemoteCategory::Camera), None);
        assert_eq!(
            RemoteCapabilities::for_category(&RemoteCategory::Other("Fan".to_string())),
            None
        );
    }
}
