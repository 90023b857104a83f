// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `SwitchBot` control command definitions.
//!
//! Every control command travels as the same JSON object:
//!
//! ```json
//! {"command": "turnOn", "parameter": "default", "commandType": "command"}
//! ```
//!
//! The typed enums in this module produce that shape for each device kind,
//! so only commands that the device kind understands can be built.
//!
//! # Available Commands
//!
//! | Command Type | Target | Example |
//! |-------------|--------|---------|
//! | [`BotCommand`] | Bot | Press |
//! | [`PlugCommand`] | Plug | On, Off |
//! | [`CurtainCommand`] | Curtain | Move to 50% |
//! | [`HumidifierCommand`] | Humidifier | Auto mode |
//! | [`SmartFanCommand`] | Smart Fan | Speed 3, natural |
//! | [`InfraredCommand`] | Infrared remotes | Channel 5, `setAll` |
//! | [`CommandRequest`] | Anything | Raw wire object |
//!
//! # Examples
//!
//! ```
//! use switchbot_lib::command::{BotCommand, Command};
//!
//! let request = BotCommand::Press.to_request();
//! assert_eq!(
//!     serde_json::to_value(&request).unwrap(),
//!     serde_json::json!({"command": "press", "parameter": "default", "commandType": "command"})
//! );
//! ```

mod infrared;
mod parameter;
mod physical;

pub use infrared::{Channel, Direction, FanLevel, InfraredCommand};
pub use parameter::Parameter;
pub use physical::{BotCommand, CurtainCommand, HumidifierCommand, PlugCommand, SmartFanCommand};

use serde::{Deserialize, Serialize};

/// Value of the `commandType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// A built-in command.
    #[default]
    Command,
    /// A user-defined button on a learned remote.
    Customize,
}

/// A command that can be sent to a device.
pub trait Command {
    /// Returns the `command` field, for example `"turnOn"` or `"setAll"`.
    fn name(&self) -> String;

    /// Returns the `parameter` field.
    ///
    /// Commands without a meaningful argument send `"default"`.
    fn parameter(&self) -> Option<Parameter> {
        Some(Parameter::Default)
    }

    /// Returns the `commandType` field.
    fn command_type(&self) -> CommandType {
        CommandType::Command
    }

    /// Builds the JSON request body.
    fn to_request(&self) -> CommandRequest {
        CommandRequest {
            command: self.name(),
            parameter: self.parameter(),
            command_type: self.command_type(),
        }
    }
}

/// The request body of `POST /v1.0/devices/{id}/commands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    /// Command name.
    pub command: String,
    /// Command argument; omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Parameter>,
    /// Built-in or user-defined command.
    #[serde(default)]
    pub command_type: CommandType,
}

impl CommandRequest {
    /// Creates a built-in command with a `"default"` parameter.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            parameter: Some(Parameter::Default),
            command_type: CommandType::Command,
        }
    }

    /// Replaces the parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<Parameter>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Removes the parameter from the body.
    #[must_use]
    pub fn without_parameter(mut self) -> Self {
        self.parameter = None;
        self
    }

    /// Sets the command type.
    #[must_use]
    pub fn with_command_type(mut self, command_type: CommandType) -> Self {
        self.command_type = command_type;
        self
    }
}

impl Command for CommandRequest {
    fn name(&self) -> String {
        self.command.clone()
    }

    fn parameter(&self) -> Option<Parameter> {
        self.parameter.clone()
    }

    fn command_type(&self) -> CommandType {
        self.command_type
    }

    fn to_request(&self) -> CommandRequest {
        self.clone()
    }
}
