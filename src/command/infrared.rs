// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for infrared remotes.
//!
//! Infrared commands share one vocabulary across appliance kinds; which of
//! them a given remote accepts is described by
//! [`RemoteCapabilities`](crate::RemoteCapabilities).

use crate::command::{Command, CommandType, Parameter};
use crate::types::AirConditionerSettings;

/// Up or down, for brightness and volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increase.
    Up,
    /// Decrease.
    Down,
}

/// Target of a channel change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Jump to a channel number.
    Number(u32),
    /// Previous channel.
    Previous,
    /// Next channel.
    Next,
}

/// Speed preset of an infrared fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanLevel {
    /// Low speed.
    Low,
    /// Middle speed.
    Middle,
    /// High speed.
    High,
}

/// A button press on an infrared remote.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, InfraredCommand, Parameter};
///
/// let cmd = InfraredCommand::SetChannel(5);
/// assert_eq!(cmd.name(), "SetChannel");
/// assert_eq!(cmd.parameter(), Some(Parameter::Number(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfraredCommand {
    /// Power on.
    TurnOn,
    /// Power off.
    TurnOff,
    /// Light: brighter.
    BrightnessUp,
    /// Light: dimmer.
    BrightnessDown,
    /// TV: go to a channel number.
    SetChannel(u32),
    /// TV, speaker: volume up.
    VolumeAdd,
    /// TV, speaker: volume down.
    VolumeSub,
    /// TV: next channel.
    ChannelAdd,
    /// TV: previous channel.
    ChannelSub,
    /// Air conditioner: apply all settings.
    SetAll(AirConditionerSettings),
    /// DVD, speaker: mute toggle.
    SetMute,
    /// DVD, speaker: fast forward.
    FastForward,
    /// DVD, speaker: rewind.
    Rewind,
    /// DVD, speaker: next track.
    Next,
    /// DVD, speaker: previous track.
    Previous,
    /// DVD, speaker: pause.
    Pause,
    /// DVD, speaker: play.
    Play,
    /// DVD, speaker: stop.
    Stop,
    /// Fan: toggle oscillation.
    Swing,
    /// Fan: timer button.
    Timer,
    /// Fan: low speed.
    LowSpeed,
    /// Fan: middle speed.
    MiddleSpeed,
    /// Fan: high speed.
    HighSpeed,
    /// A user-defined button, sent with `commandType: "customize"`.
    Custom(String),
}

impl InfraredCommand {
    /// Returns the wire name of a built-in command, or `None` for custom buttons.
    #[must_use]
    pub fn literal(&self) -> Option<&'static str> {
        let name = match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::BrightnessUp => "brightnessUp",
            Self::BrightnessDown => "brightnessDown",
            Self::SetChannel(_) => "SetChannel",
            Self::VolumeAdd => "volumeAdd",
            Self::VolumeSub => "volumeSub",
            Self::ChannelAdd => "channelAdd",
            Self::ChannelSub => "channelSub",
            Self::SetAll(_) => "setAll",
            Self::SetMute => "setMute",
            Self::FastForward => "FastForward",
            Self::Rewind => "Rewind",
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::Pause => "Pause",
            Self::Play => "Play",
            Self::Stop => "Stop",
            Self::Swing => "swing",
            Self::Timer => "timer",
            Self::LowSpeed => "lowSpeed",
            Self::MiddleSpeed => "middleSpeed",
            Self::HighSpeed => "highSpeed",
            Self::Custom(_) => return None,
        };
        Some(name)
    }

    /// Brightness change for lights.
    #[must_use]
    pub const fn brightness(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::BrightnessUp,
            Direction::Down => Self::BrightnessDown,
        }
    }

    /// Volume change for TVs and speakers.
    #[must_use]
    pub const fn volume(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::VolumeAdd,
            Direction::Down => Self::VolumeSub,
        }
    }

    /// Channel change for TVs.
    #[must_use]
    pub const fn channel(channel: Channel) -> Self {
        match channel {
            Channel::Number(n) => Self::SetChannel(n),
            Channel::Previous => Self::ChannelSub,
            Channel::Next => Self::ChannelAdd,
        }
    }

    /// Speed preset for fans.
    #[must_use]
    pub const fn fan_speed(level: FanLevel) -> Self {
        match level {
            FanLevel::Low => Self::LowSpeed,
            FanLevel::Middle => Self::MiddleSpeed,
            FanLevel::High => Self::HighSpeed,
        }
    }
}

impl Command for InfraredCommand {
    fn name(&self) -> String {
        match self {
            Self::Custom(button) => button.clone(),
            other => other.literal().unwrap_or_default().to_string(),
        }
    }

    fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::SetChannel(channel) => Some(Parameter::Number(*channel)),
            Self::SetAll(settings) => Some(Parameter::Text(settings.encode())),
            _ => Some(Parameter::Default),
        }
    }

    fn command_type(&self) -> CommandType {
        match self {
            Self::Custom(_) => CommandType::Customize,
            _ => CommandType::Command,
        }
    }
}
