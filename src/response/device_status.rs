// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status response parsing.
//!
//! The variant is chosen by the `deviceType` the server reports, not by the
//! caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{DeviceType, PowerState};

/// Fields present in every status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    /// Device ID.
    pub device_id: String,
    /// ID of the hub the device is bound to.
    pub hub_device_id: String,
}

/// Status of a Bot or Plug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerStatus {
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Current power state.
    pub power: PowerState,
}

/// Status of a Meter.
///
/// # Examples
///
/// ```
/// use switchbot_lib::response::DeviceStatus;
///
/// let json = r#"{
///     "deviceId": "C271111EC0AB",
///     "deviceType": "Meter",
///     "hubDeviceId": "FA7310762361",
///     "humidity": 52,
///     "temperature": 26.1
/// }"#;
/// let status: DeviceStatus = serde_json::from_str(json).unwrap();
/// let meter = status.as_meter().unwrap();
/// assert_eq!(meter.humidity, 52);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterStatus {
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

/// Status of a Humidifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct HumidifierStatus {
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Current power state.
    pub power: PowerState,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Atomization efficiency in percent.
    pub nebulization_efficiency: u8,
    /// Whether auto mode is on.
    pub auto: bool,
    /// Whether the child lock is on.
    pub child_lock: bool,
    /// Whether the beeper is on.
    pub sound: bool,
}

/// Status of a Curtain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurtainStatus {
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Whether the open and close positions are calibrated.
    pub calibrate: bool,
    /// Whether the curtain is part of a group.
    pub group: bool,
    /// Whether the curtain is currently moving.
    pub moving: bool,
    /// Position in percent, 0 being fully open.
    pub slide_position: u8,
}

/// Status of a Smart Fan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartFanStatus {
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Airflow mode (1 standard, 2 natural).
    pub mode: u8,
    /// Fan speed (1-4).
    pub speed: u8,
    /// Whether the fan is oscillating.
    pub shaking: bool,
    /// Center of the oscillation arc in degrees.
    pub shake_center: u16,
    /// Width of the oscillation arc in degrees.
    pub shake_range: u16,
}

/// Status of a device this crate does not model, or whose fields do not
/// match the known shape. Every field is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherStatus {
    /// The reported `deviceType`.
    pub device_type: String,
    /// Common fields.
    #[serde(flatten)]
    pub info: StatusInfo,
    /// Remaining fields, as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of `GET /v1.0/devices/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "deviceType")]
pub enum DeviceStatus {
    /// Hub.
    Hub(StatusInfo),
    /// Hub Mini.
    #[serde(rename = "Hub Mini")]
    HubMini(StatusInfo),
    /// Hub Plus.
    #[serde(rename = "Hub Plus")]
    HubPlus(StatusInfo),
    /// Bot.
    Bot(PowerStatus),
    /// Plug.
    Plug(PowerStatus),
    /// Humidifier.
    Humidifier(HumidifierStatus),
    /// Meter.
    Meter(MeterStatus),
    /// Curtain.
    Curtain(CurtainStatus),
    /// Smart Fan.
    #[serde(rename = "Smart Fan")]
    SmartFan(SmartFanStatus),
    /// Any other status.
    #[serde(untagged)]
    Other(OtherStatus),
}

impl DeviceStatus {
    /// Returns the fields every status has.
    #[must_use]
    pub fn info(&self) -> &StatusInfo {
        match self {
            Self::Hub(info) | Self::HubMini(info) | Self::HubPlus(info) => info,
            Self::Bot(s) | Self::Plug(s) => &s.info,
            Self::Humidifier(s) => &s.info,
            Self::Meter(s) => &s.info,
            Self::Curtain(s) => &s.info,
            Self::SmartFan(s) => &s.info,
            Self::Other(s) => &s.info,
        }
    }

    /// Returns the reported device kind, or `None` for
    /// [`DeviceStatus::Other`].
    #[must_use]
    pub fn device_type(&self) -> Option<DeviceType> {
        let kind = match self {
            Self::Hub(_) => DeviceType::Hub,
            Self::HubMini(_) => DeviceType::HubMini,
            Self::HubPlus(_) => DeviceType::HubPlus,
            Self::Bot(_) => DeviceType::Bot,
            Self::Plug(_) => DeviceType::Plug,
            Self::Humidifier(_) => DeviceType::Humidifier,
            Self::Meter(_) => DeviceType::Meter,
            Self::Curtain(_) => DeviceType::Curtain,
            Self::SmartFan(_) => DeviceType::SmartFan,
            Self::Other(_) => return None,
        };
        Some(kind)
    }

    /// Returns the `deviceType` as reported by the server.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Other(s) => s.device_type.as_str(),
            known => known.device_type().map_or("", |kind| kind.as_str()),
        }
    }

    /// Returns the power state for devices that report a recognizable one.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        match self {
            Self::Bot(s) | Self::Plug(s) => Some(s.power),
            Self::Humidifier(s) => Some(s.power),
            Self::Other(s) => s
                .extra
                .get("power")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse().ok()),
            _ => None,
        }
    }

    /// Returns the Meter readings.
    #[must_use]
    pub fn as_meter(&self) -> Option<&MeterStatus> {
        match self {
            Self::Meter(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the Curtain state.
    #[must_use]
    pub fn as_curtain(&self) -> Option<&CurtainStatus> {
        match self {
            Self::Curtain(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the Humidifier state.
    #[must_use]
    pub fn as_humidifier(&self) -> Option<&HumidifierStatus> {
        match self {
            Self::Humidifier(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the Smart Fan state.
    #[must_use]
    pub fn as_smart_fan(&self) -> Option<&SmartFanStatus> {
        match self {
            Self::SmartFan(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(raw: &serde_json::Value) -> DeviceStatus {
        serde_json::from_value(raw.clone()).unwrap()
    }

    #[test]
    fn meter_has_no_extra_fields() {
        let raw = json!({
            "deviceId": "C271111EC0AB",
            "deviceType": "Meter",
            "hubDeviceId": "FA7310762361",
            "humidity": 52,
            "temperature": 26.1
        });
        let status = decode(&raw);
        let meter = status.as_meter().unwrap();
        assert_eq!(meter.info.device_id, "C271111EC0AB");
        assert!((meter.temperature - 26.1).abs() < f64::EPSILON);
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn bot_power() {
        let raw = json!({
            "deviceId": "CA4F7E4C0A1B",
            "deviceType": "Bot",
            "hubDeviceId": "FA7310762361",
            "power": "on"
        });
        let status = decode(&raw);
        assert_eq!(status.device_type(), Some(DeviceType::Bot));
        assert_eq!(status.power(), Some(PowerState::On));
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn humidifier_fields() {
        let raw = json!({
            "deviceId": "500291B269BE",
            "deviceType": "Humidifier",
            "hubDeviceId": "000000000000",
            "power": "off",
            "humidity": 45,
            "temperature": 22.5,
            "nebulizationEfficiency": 50,
            "auto": false,
            "childLock": true,
            "sound": false
        });
        let status = decode(&raw);
        let humidifier = status.as_humidifier().unwrap();
        assert_eq!(humidifier.nebulization_efficiency, 50);
        assert!(humidifier.child_lock);
        assert_eq!(status.power(), Some(PowerState::Off));
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn curtain_fields() {
        let raw = json!({
            "deviceId": "E2F6032048AB",
            "deviceType": "Curtain",
            "hubDeviceId": "FA7310762361",
            "calibrate": true,
            "group": false,
            "moving": false,
            "slidePosition": 0
        });
        let status = decode(&raw);
        assert_eq!(status.as_curtain().unwrap().slide_position, 0);
        assert_eq!(status.power(), None);
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn smart_fan_fields() {
        let raw = json!({
            "deviceId": "D7C33A8B9E01",
            "deviceType": "Smart Fan",
            "hubDeviceId": "FA7310762361",
            "mode": 2,
            "speed": 3,
            "shaking": true,
            "shakeCenter": 60,
            "shakeRange": 120
        });
        let status = decode(&raw);
        let fan = status.as_smart_fan().unwrap();
        assert_eq!(fan.speed, 3);
        assert_eq!(fan.shake_range, 120);
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn hub_mini_has_only_common_fields() {
        let raw = json!({
            "deviceId": "FA7310762361",
            "deviceType": "Hub Mini",
            "hubDeviceId": "000000000000"
        });
        let status = decode(&raw);
        assert_eq!(status.device_type(), Some(DeviceType::HubMini));
        assert_eq!(status.info().hub_device_id, "000000000000");
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn plug_power_is_case_insensitive() {
        let status = decode(&json!({
            "deviceId": "6055F92FCFD2",
            "deviceType": "Plug",
            "hubDeviceId": "000000000000",
            "power": "ON"
        }));
        assert_eq!(status.device_type(), Some(DeviceType::Plug));
        assert_eq!(status.power(), Some(PowerState::On));
    }

    #[test]
    fn unrecognized_power_keeps_raw_status() {
        let raw = json!({
            "deviceId": "6055F92FCFD2",
            "deviceType": "Plug",
            "hubDeviceId": "000000000000",
            "power": "standby"
        });
        let status = decode(&raw);
        assert!(matches!(status, DeviceStatus::Other(_)));
        assert_eq!(status.type_name(), "Plug");
        assert_eq!(status.power(), None);
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn unknown_device_type_kept() {
        let raw = json!({
            "deviceId": "F1A2B3C4D5E6",
            "deviceType": "Smart Lock",
            "hubDeviceId": "FA7310762361",
            "lockState": "locked",
            "doorState": "closed"
        });
        let status = decode(&raw);
        assert_eq!(status.device_type(), None);
        assert_eq!(status.type_name(), "Smart Lock");
        assert_eq!(status.info().device_id, "F1A2B3C4D5E6");
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }

    #[test]
    fn unknown_device_power_is_read_from_raw_fields() {
        let status = decode(&json!({
            "deviceId": "6055F92FCFD2",
            "deviceType": "Color Bulb",
            "hubDeviceId": "000000000000",
            "power": "off",
            "brightness": 80
        }));
        assert_eq!(status.type_name(), "Color Bulb");
        assert_eq!(status.power(), Some(PowerState::Off));
    }
}
