// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for `SwitchBot` API calls.
//!
//! [`Envelope`] interprets the outer status object; the other types model
//! the payloads found in its `body`.

mod device_list;
mod device_status;
mod envelope;
mod scene;

pub use device_list::{CurtainDevice, Device, DeviceInfo, DeviceList, InfraredRemote};
pub use device_status::{
    CurtainStatus, DeviceStatus, HumidifierStatus, MeterStatus, PowerStatus, SmartFanStatus,
    StatusInfo,
};
pub use envelope::{Envelope, StatusCode};
pub use scene::Scene;

use serde::{Deserialize, Serialize};

/// Body of a successful command or scene execution (currently always `{}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAck {}
