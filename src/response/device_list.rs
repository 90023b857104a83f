// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list response parsing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{DeviceType, RemoteType};

/// Response body of `GET /v1.0/devices`.
///
/// Both lists keep the order the server returned them in.
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::DeviceList;
///
/// let json = r#"{
///     "deviceList": [{
///         "deviceId": "500291B269BE",
///         "deviceName": "Living Room Humidifier",
///         "deviceType": "Humidifier",
///         "enableCloudService": true,
///         "hubDeviceId": "000000000000"
///     }],
///     "infraredRemoteList": [{
///         "deviceId": "02-202008110034-13",
///         "deviceName": "Living Room TV",
///         "remoteType": "TV",
///         "hubDeviceId": "FA7310762361"
///     }]
/// }"#;
/// let list: DeviceList = serde_json::from_str(json).unwrap();
/// assert_eq!(list.device_list.len(), 1);
/// assert!(list.remote("02-202008110034-13").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceList {
    /// Physical devices.
    pub device_list: Vec<Device>,
    /// Virtual infrared remotes.
    pub infrared_remote_list: Vec<InfraredRemote>,
}

impl DeviceList {
    /// Finds a physical device by ID.
    #[must_use]
    pub fn device(&self, device_id: &str) -> Option<&Device> {
        self.device_list
            .iter()
            .find(|d| d.info().device_id == device_id)
    }

    /// Finds an infrared remote by ID.
    #[must_use]
    pub fn remote(&self, device_id: &str) -> Option<&InfraredRemote> {
        self.infrared_remote_list
            .iter()
            .find(|r| r.device_id == device_id)
    }
}

/// Fields shared by every physical device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device ID (MAC address without separators).
    pub device_id: String,
    /// User-assigned name.
    pub device_name: String,
    /// Whether cloud control is enabled in the app.
    pub enable_cloud_service: bool,
    /// ID of the hub the device is bound to.
    pub hub_device_id: String,
}

/// A Curtain, which carries pairing and calibration details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurtainDevice {
    /// Common device fields.
    #[serde(flatten)]
    pub info: DeviceInfo,
    /// IDs of all curtains in the group, this one included.
    pub curtain_devices_ids: Vec<String>,
    /// Whether the open and close positions are calibrated.
    pub calibrate: bool,
    /// Whether the curtain is part of a group.
    pub group: bool,
    /// Whether this is the master of its group.
    pub master: bool,
    /// Opening direction.
    pub open_direction: String,
}

/// A device whose `deviceType` this crate does not model, or whose fields
/// do not match the known shape. Every field is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherDevice {
    /// The reported `deviceType`.
    pub device_type: String,
    /// Common device fields.
    #[serde(flatten)]
    pub info: DeviceInfo,
    /// Remaining fields, as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A physical device, tagged by its `deviceType`.
///
/// Unknown device types decode into [`Device::Other`] instead of failing the
/// whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "deviceType")]
pub enum Device {
    /// Hub.
    Hub(DeviceInfo),
    /// Hub Mini.
    #[serde(rename = "Hub Mini")]
    HubMini(DeviceInfo),
    /// Hub Plus.
    #[serde(rename = "Hub Plus")]
    HubPlus(DeviceInfo),
    /// Bot.
    Bot(DeviceInfo),
    /// Curtain.
    Curtain(CurtainDevice),
    /// Plug.
    Plug(DeviceInfo),
    /// Meter.
    Meter(DeviceInfo),
    /// Humidifier.
    Humidifier(DeviceInfo),
    /// Smart Fan.
    #[serde(rename = "Smart Fan")]
    SmartFan(DeviceInfo),
    /// Any other device.
    #[serde(untagged)]
    Other(OtherDevice),
}

impl Device {
    /// Returns the fields every device has.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        match self {
            Self::Hub(info)
            | Self::HubMini(info)
            | Self::HubPlus(info)
            | Self::Bot(info)
            | Self::Plug(info)
            | Self::Meter(info)
            | Self::Humidifier(info)
            | Self::SmartFan(info) => info,
            Self::Curtain(curtain) => &curtain.info,
            Self::Other(other) => &other.info,
        }
    }

    /// Returns the device kind, or `None` for [`Device::Other`].
    #[must_use]
    pub fn device_type(&self) -> Option<DeviceType> {
        let kind = match self {
            Self::Hub(_) => DeviceType::Hub,
            Self::HubMini(_) => DeviceType::HubMini,
            Self::HubPlus(_) => DeviceType::HubPlus,
            Self::Bot(_) => DeviceType::Bot,
            Self::Curtain(_) => DeviceType::Curtain,
            Self::Plug(_) => DeviceType::Plug,
            Self::Meter(_) => DeviceType::Meter,
            Self::Humidifier(_) => DeviceType::Humidifier,
            Self::SmartFan(_) => DeviceType::SmartFan,
            Self::Other(_) => return None,
        };
        Some(kind)
    }

    /// Returns the `deviceType` as reported by the server.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Other(other) => other.device_type.as_str(),
            known => known.device_type().map_or("", |kind| kind.as_str()),
        }
    }

    /// Returns the curtain details for curtain devices.
    #[must_use]
    pub fn as_curtain(&self) -> Option<&CurtainDevice> {
        match self {
            Self::Curtain(curtain) => Some(curtain),
            _ => None,
        }
    }
}

/// A virtual infrared remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfraredRemote {
    /// Remote ID.
    pub device_id: String,
    /// User-assigned name.
    pub device_name: String,
    /// Appliance category, possibly learned (`DIY`).
    pub remote_type: RemoteType,
    /// ID of the hub that emits the infrared signals.
    pub hub_device_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RemoteCategory;
    use serde_json::json;

    fn mixed_list() -> serde_json::Value {
        json!({
            "deviceList": [
                {
                    "deviceId": "500291B269BE",
                    "deviceName": "Living Room Humidifier",
                    "deviceType": "Humidifier",
                    "enableCloudService": true,
                    "hubDeviceId": "000000000000"
                },
                {
                    "deviceId": "E2F6032048AB",
                    "deviceName": "Curtain 1",
                    "deviceType": "Curtain",
                    "enableCloudService": true,
                    "hubDeviceId": "FA7310762361",
                    "curtainDevicesIds": ["E2F6032048AB", "CBAF8A2D4C9F"],
                    "calibrate": true,
                    "group": true,
                    "master": true,
                    "openDirection": "left"
                }
            ],
            "infraredRemoteList": [
                {
                    "deviceId": "02-202008110034-13",
                    "deviceName": "Living Room TV",
                    "remoteType": "TV",
                    "hubDeviceId": "FA7310762361"
                },
                {
                    "deviceId": "02-202105191031-52",
                    "deviceName": "Bedroom AC",
                    "remoteType": "DIY Air Conditioner",
                    "hubDeviceId": "FA7310762361"
                }
            ]
        })
    }

    #[test]
    fn generic_and_curtain_keep_order() {
        let list: DeviceList = serde_json::from_value(mixed_list()).unwrap();

        assert_eq!(list.device_list.len(), 2);
        assert_eq!(list.device_list[0].device_type(), Some(DeviceType::Humidifier));
        assert_eq!(list.device_list[0].info().device_id, "500291B269BE");

        let curtain = list.device_list[1].as_curtain().unwrap();
        assert_eq!(curtain.info.device_name, "Curtain 1");
        assert_eq!(curtain.curtain_devices_ids, ["E2F6032048AB", "CBAF8A2D4C9F"]);
        assert!(curtain.master);
        assert_eq!(curtain.open_direction, "left");
    }

    #[test]
    fn remotes_decode_diy_types() {
        let list: DeviceList = serde_json::from_value(mixed_list()).unwrap();
        let ac = list.remote("02-202105191031-52").unwrap();
        assert_eq!(ac.remote_type.category(), &RemoteCategory::AirConditioner);
        assert!(ac.remote_type.is_diy());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let raw = mixed_list();
        let list: DeviceList = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&list).unwrap(), raw);
    }

    #[test]
    fn lookup_helpers() {
        let list: DeviceList = serde_json::from_value(mixed_list()).unwrap();
        assert!(list.device("E2F6032048AB").is_some());
        assert!(list.device("02-202008110034-13").is_none());
        assert!(list.remote("500291B269BE").is_none());
    }

    #[test]
    fn unknown_device_type_kept() {
        let raw = json!({
            "deviceId": "X",
            "deviceName": "Lock",
            "deviceType": "Smart Lock",
            "enableCloudService": true,
            "hubDeviceId": "Y",
            "lockState": "locked"
        });
        let device: Device = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(device.device_type(), None);
        assert_eq!(device.type_name(), "Smart Lock");
        assert_eq!(device.info().device_name, "Lock");
        match &device {
            Device::Other(other) => assert_eq!(other.extra["lockState"], "locked"),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(serde_json::to_value(&device).unwrap(), raw);
    }

    #[test]
    fn unknown_devices_do_not_break_the_list() {
        let mut raw = mixed_list();
        raw["deviceList"].as_array_mut().unwrap().push(json!({
            "deviceId": "6055F92FCFD2",
            "deviceName": "Desk Bulb",
            "deviceType": "Color Bulb",
            "enableCloudService": true,
            "hubDeviceId": "000000000000"
        }));
        raw["infraredRemoteList"].as_array_mut().unwrap().push(json!({
            "deviceId": "02-202301011200-00",
            "deviceName": "Robot",
            "remoteType": "DIY Robot Vacuum",
            "hubDeviceId": "FA7310762361"
        }));

        let list: DeviceList = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(list.device_list.len(), 3);
        assert_eq!(list.device("6055F92FCFD2").unwrap().type_name(), "Color Bulb");
        assert!(list.remote("02-202301011200-00").unwrap().remote_type.category().is_other());
        assert_eq!(serde_json::to_value(&list).unwrap(), raw);
    }

    #[test]
    fn known_types_report_their_name() {
        let list: DeviceList = serde_json::from_value(mixed_list()).unwrap();
        assert_eq!(list.device_list[1].type_name(), "Curtain");
    }
}
