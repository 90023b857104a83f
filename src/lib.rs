// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `switchbot_lib` - A typed Rust client for the `SwitchBot` cloud API.
//!
//! This library talks to the `SwitchBot` REST API (v1.0) to list devices,
//! read their status, send control commands to physical devices and
//! infrared remotes, and run manual scenes.
//!
//! # Supported Features
//!
//! - **Devices**: list physical devices and infrared remotes
//! - **Status**: typed status for Bot, Plug, Curtain, Meter, Humidifier, Smart Fan and hubs
//! - **Commands**: typed command shapes per device kind
//! - **Infrared remotes**: lights, TVs, air conditioners, DVD players, speakers, fans
//! - **Scenes**: list and execute manual scenes
//!
//! # Quick Start
//!
//! ## Listing devices
//!
//! ```no_run
//! use switchbot_lib::SwitchBot;
//!
//! #[tokio::main]
//! async fn main() -> switchbot_lib::Result<()> {
//!     let client = SwitchBot::new("my-access-token")?;
//!
//!     let devices = client.get_device_list().await?;
//!     for device in &devices.device_list {
//!         println!("{} is a {}", device.info().device_name, device.type_name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Controlling a physical device
//!
//! ```no_run
//! use switchbot_lib::SwitchBot;
//! use switchbot_lib::command::CurtainCommand;
//! use switchbot_lib::types::CurtainPosition;
//!
//! # async fn example() -> switchbot_lib::Result<()> {
//! let client = SwitchBot::new("my-access-token")?;
//! let target = CurtainPosition::new(50)?;
//! client
//!     .send_control_command("E2F6032048AB", &CurtainCommand::SetPosition(target))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving an infrared air conditioner
//!
//! ```no_run
//! use switchbot_lib::{RemoteDevice, SwitchBot};
//! use switchbot_lib::types::{AcFanSpeed, AcMode, PowerState};
//!
//! # async fn example() -> switchbot_lib::Result<()> {
//! let client = SwitchBot::new("my-access-token")?;
//! let ac = RemoteDevice::air_conditioner(&client, "02-202105191031-52");
//! ac.set_params(24, AcMode::Cool, AcFanSpeed::Auto, PowerState::On).await?;
//! # Ok(())
//! # }
//! ```

mod capabilities;
mod client;
pub mod command;
pub mod error;
pub mod protocol;
mod remote;
pub mod response;
pub mod types;

pub use capabilities::RemoteCapabilities;
pub use client::SwitchBot;
pub use command::{
    BotCommand, Command, CommandRequest, CommandType, CurtainCommand, HumidifierCommand,
    InfraredCommand, Parameter, PlugCommand, SmartFanCommand,
};
pub use error::{DeviceError, Error, ParseError, Result, TransportError, ValueError};
pub use protocol::{ApiConfig, HttpClient, Transport};
pub use remote::RemoteDevice;
pub use response::{
    CommandAck, Device, DeviceList, DeviceStatus, Envelope, InfraredRemote, Scene, StatusCode,
};
pub use types::{
    AcFanSpeed, AcMode, AirConditionerSettings, DeviceType, PowerState, RemoteCategory,
    RemoteType,
};
