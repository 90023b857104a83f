// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `SwitchBot` devices and commands.
//!
//! Constrained values are checked at construction time, so a command built
//! from them is always well-formed on the wire.
//!
//! # Types
//!
//! - [`PowerState`] - `on` / `off`
//! - [`DeviceType`] - kind of a physical device
//! - [`RemoteType`] / [`RemoteCategory`] - kind of an infrared remote
//! - [`AirConditionerSettings`] - the `setAll` parameter (temperature, [`AcMode`], [`AcFanSpeed`], power)
//! - [`CurtainPosition`] - the curtain `setPosition` parameter
//! - [`HumidifierMode`] - the humidifier `setMode` parameter
//! - [`SmartFanSettings`] - the Smart Fan `set` parameter

mod climate;
mod curtain;
mod device_type;
mod humidifier;
mod power;
mod remote_type;
mod smart_fan;

pub use climate::{AcFanSpeed, AcMode, AirConditionerSettings};
pub use curtain::{CurtainMode, CurtainPosition};
pub use device_type::DeviceType;
pub use humidifier::HumidifierMode;
pub use power::PowerState;
pub use remote_type::{RemoteCategory, RemoteType};
pub use smart_fan::{SmartFanMode, SmartFanSettings};
