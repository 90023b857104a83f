// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for physical `SwitchBot` devices.

use crate::command::{Command, Parameter};
use crate::types::{CurtainPosition, HumidifierMode, SmartFanSettings};

/// Command for a Bot.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{BotCommand, Command};
///
/// assert_eq!(BotCommand::Press.name(), "press");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Switch on (switch mode).
    TurnOn,
    /// Switch off (switch mode).
    TurnOff,
    /// Press the button once (press mode).
    Press,
}

impl Command for BotCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::Press => "press",
        }
        .to_string()
    }
}

/// Command for a Plug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugCommand {
    /// Switch the outlet on.
    TurnOn,
    /// Switch the outlet off.
    TurnOff,
}

impl Command for PlugCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
        }
        .to_string()
    }
}

/// Command for a Curtain.
///
/// # Examples
///
/// ```
/// use switchbot_lib::command::{Command, CurtainCommand, Parameter};
/// use switchbot_lib::types::CurtainPosition;
///
/// let cmd = CurtainCommand::SetPosition(CurtainPosition::new(30).unwrap());
/// assert_eq!(cmd.name(), "setPosition");
/// assert_eq!(cmd.parameter(), Some(Parameter::Text("0,ff,30".to_string())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurtainCommand {
    /// Close the curtain (position 100).
    TurnOn,
    /// Open the curtain (position 0).
    TurnOff,
    /// Move to a position.
    SetPosition(CurtainPosition),
}

impl Command for CurtainCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::SetPosition(_) => "setPosition",
        }
        .to_string()
    }

    fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::TurnOn | Self::TurnOff => Some(Parameter::Default),
            Self::SetPosition(position) => Some(Parameter::Text(position.to_string())),
        }
    }
}

/// Command for a Humidifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidifierCommand {
    /// Start atomizing.
    TurnOn,
    /// Stop atomizing.
    TurnOff,
    /// Change the atomization mode.
    SetMode(HumidifierMode),
}

impl Command for HumidifierCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::SetMode(_) => "setMode",
        }
        .to_string()
    }

    fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::TurnOn | Self::TurnOff => Some(Parameter::Default),
            Self::SetMode(mode) => Some(Parameter::Text(mode.to_string())),
        }
    }
}

/// Command for a Smart Fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartFanCommand {
    /// Start the fan.
    TurnOn,
    /// Stop the fan.
    TurnOff,
    /// Apply power, mode, speed and oscillation in one go.
    Set(SmartFanSettings),
}

impl Command for SmartFanCommand {
    fn name(&self) -> String {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::Set(_) => "set",
        }
        .to_string()
    }

    fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::TurnOn | Self::TurnOff => Some(Parameter::Default),
            Self::Set(settings) => Some(Parameter::Text(settings.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandType;
    use crate::types::{PowerState, SmartFanMode};
    use serde_json::json;

    #[test]
    fn plug_turn_off() {
        let request = PlugCommand::TurnOff.to_request();
        assert_eq!(request.command, "turnOff");
        assert_eq!(request.parameter, Some(Parameter::Default));
        assert_eq!(request.command_type, CommandType::Command);
    }

    #[test]
    fn humidifier_set_mode() {
        let request = HumidifierCommand::SetMode(HumidifierMode::Auto).to_request();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "setMode", "parameter": "auto", "commandType": "command"})
        );
    }

    #[test]
    fn smart_fan_set() {
        let settings =
            SmartFanSettings::new(PowerState::On, SmartFanMode::Natural, 3, 90).unwrap();
        let request = SmartFanCommand::Set(settings).to_request();
        assert_eq!(request.command, "set");
        assert_eq!(request.parameter, Some(Parameter::Text("on,2,3,90".to_string())));
    }

    #[test]
    fn curtain_turn_on_is_default() {
        assert_eq!(CurtainCommand::TurnOn.parameter(), Some(Parameter::Default));
    }
}
