// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level façade for infrared remotes.
//!
//! One [`RemoteDevice`] type serves every appliance kind; its
//! [`RemoteCapabilities`] decide which remote type it expects and which
//! commands it will send.
//!
//! ```no_run
//! use switchbot_lib::{RemoteDevice, SwitchBot};
//! use switchbot_lib::command::Channel;
//!
//! # async fn example() -> switchbot_lib::Result<()> {
//! let client = SwitchBot::new("my-access-token")?;
//! let tv = RemoteDevice::television(&client, "02-202008110034-13");
//!
//! if tv.validate_id().await? {
//!     tv.turn_on().await?;
//!     tv.set_channel(Channel::Number(5)).await?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::capabilities::RemoteCapabilities;
use crate::client::SwitchBot;
use crate::command::{Channel, Command, Direction, FanLevel, InfraredCommand};
use crate::error::{Error, Result};
use crate::protocol::{HttpClient, Transport};
use crate::response::CommandAck;
use crate::types::{AcFanSpeed, AcMode, AirConditionerSettings, PowerState};

/// An infrared remote bound to a device ID.
#[derive(Debug, Clone)]
pub struct RemoteDevice<'a, T = HttpClient> {
    client: &'a SwitchBot<T>,
    device_id: String,
    capabilities: RemoteCapabilities,
}

impl<'a, T: Transport> RemoteDevice<'a, T> {
    /// Creates a façade with an explicit capability descriptor.
    #[must_use]
    pub fn new(
        client: &'a SwitchBot<T>,
        device_id: impl Into<String>,
        capabilities: RemoteCapabilities,
    ) -> Self {
        Self {
            client,
            device_id: device_id.into(),
            capabilities,
        }
    }

    /// An infrared light.
    #[must_use]
    pub fn light(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::LIGHT)
    }

    /// A television.
    #[must_use]
    pub fn television(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::TELEVISION)
    }

    /// An air conditioner.
    #[must_use]
    pub fn air_conditioner(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::AIR_CONDITIONER)
    }

    /// A DVD player.
    #[must_use]
    pub fn dvd(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::DVD)
    }

    /// A speaker.
    #[must_use]
    pub fn speaker(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::SPEAKER)
    }

    /// A fan.
    #[must_use]
    pub fn fan(client: &'a SwitchBot<T>, device_id: impl Into<String>) -> Self {
        Self::new(client, device_id, RemoteCapabilities::FAN)
    }

    /// Returns the remote ID.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the capability descriptor.
    #[must_use]
    pub fn capabilities(&self) -> &RemoteCapabilities {
        &self.capabilities
    }

    /// Checks that the remote registered under this ID is of the kind this
    /// façade drives.
    ///
    /// Returns `Ok(false)` on a type mismatch.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no infrared remote has this ID, or any
    /// error from fetching the device list.
    pub async fn validate_id(&self) -> Result<bool> {
        let list = self.client.get_device_list().await?;
        let remote = list
            .remote(&self.device_id)
            .ok_or_else(|| Error::NotFound(self.device_id.clone()))?;

        let matches = self.capabilities.matches(&remote.remote_type);
        if !matches {
            tracing::debug!(
                device_id = %self.device_id,
                remote_type = %remote.remote_type,
                expected = self.capabilities.name(),
                "Remote type does not match"
            );
        }
        Ok(matches)
    }

    /// Sends a command after checking it against the capabilities.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` without contacting the server
    /// if the remote has no such button, or any error from the request.
    pub async fn send(&self, command: &InfraredCommand) -> Result<CommandAck> {
        if !self.capabilities.supports(command) {
            return Err(Error::CapabilityNotSupported {
                command: command.name(),
                remote: self.capabilities.name(),
            });
        }
        self.client
            .send_control_command(&self.device_id, command)
            .await
    }

    // ========== Universal ==========

    /// Turns the appliance on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_on(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::TurnOn).await
    }

    /// Turns the appliance off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_off(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::TurnOff).await
    }

    /// Presses a user-defined button.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn send_custom(&self, button: impl Into<String>) -> Result<CommandAck> {
        self.send(&InfraredCommand::Custom(button.into())).await
    }

    // ========== Light ==========

    /// Steps the brightness up or down.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not a light or the command fails.
    pub async fn change_brightness(&self, direction: Direction) -> Result<CommandAck> {
        self.send(&InfraredCommand::brightness(direction)).await
    }

    // ========== Television ==========

    /// Jumps to a channel or steps to the previous/next one.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not a TV or the command fails.
    pub async fn set_channel(&self, channel: Channel) -> Result<CommandAck> {
        self.send(&InfraredCommand::channel(channel)).await
    }

    /// Steps the volume up or down.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no volume buttons or the command fails.
    pub async fn change_volume(&self, direction: Direction) -> Result<CommandAck> {
        self.send(&InfraredCommand::volume(direction)).await
    }

    // ========== Air conditioner ==========

    /// Applies temperature, mode, fan speed and power in one `setAll`.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not an air conditioner or the command
    /// fails.
    pub async fn set_params(
        &self,
        temperature: i16,
        mode: AcMode,
        fan_speed: AcFanSpeed,
        power: PowerState,
    ) -> Result<CommandAck> {
        let settings = AirConditionerSettings::new(temperature, mode, fan_speed, power);
        self.send(&InfraredCommand::SetAll(settings)).await
    }

    // ========== DVD / speaker ==========

    /// Toggles mute.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn set_mute(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::SetMute).await
    }

    /// Fast forward.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn fast_forward(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::FastForward).await
    }

    /// Rewind.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn rewind(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Rewind).await
    }

    /// Next track.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn next(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Next).await
    }

    /// Previous track.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn previous(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Previous).await
    }

    /// Pause.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn pause(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Pause).await
    }

    /// Play.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn play(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Play).await
    }

    /// Stop.
    ///
    /// # Errors
    ///
    /// Returns error if the remote has no transport controls or the command fails.
    pub async fn stop(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Stop).await
    }

    // ========== Fan ==========

    /// Toggles oscillation.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not a fan or the command fails.
    pub async fn swing(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Swing).await
    }

    /// Presses the timer button.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not a fan or the command fails.
    pub async fn set_timer(&self) -> Result<CommandAck> {
        self.send(&InfraredCommand::Timer).await
    }

    /// Selects a speed preset.
    ///
    /// # Errors
    ///
    /// Returns error if the remote is not a fan or the command fails.
    pub async fn set_speed(&self, level: FanLevel) -> Result<CommandAck> {
        self.send(&InfraredCommand::fan_speed(level)).await
    }
}
