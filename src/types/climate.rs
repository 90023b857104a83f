// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner settings and their `setAll` parameter encoding.
//!
//! An infrared air conditioner is driven by a single `setAll` command whose
//! parameter packs every setting into one comma-separated string:
//!
//! ```text
//! <temperature>,<mode>,<fan speed>,<power>
//! ```
//!
//! where mode is `1`-`5` (auto, cool, dry, fan, heat), fan speed is `1`-`4`
//! (auto, low, medium, high) and power is `on` or `off`.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::PowerState;

/// Operating mode of an air conditioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcMode {
    /// Automatic mode.
    Auto,
    /// Cooling.
    Cool,
    /// Dehumidifying.
    Dry,
    /// Fan only.
    Fan,
    /// Heating.
    Heat,
}

/// `(mode, wire code, name)` for every mode.
const AC_MODES: [(AcMode, u8, &str); 5] = [
    (AcMode::Auto, 1, "auto"),
    (AcMode::Cool, 2, "cool"),
    (AcMode::Dry, 3, "dry"),
    (AcMode::Fan, 4, "fan"),
    (AcMode::Heat, 5, "heat"),
];

impl AcMode {
    /// Returns the numeric code used in the `setAll` parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Cool => 2,
            Self::Dry => 3,
            Self::Fan => 4,
            Self::Heat => 5,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Cool => "cool",
            Self::Dry => "dry",
            Self::Fan => "fan",
            Self::Heat => "heat",
        }
    }

    /// Decodes a numeric mode code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Unrecognized` for codes outside `1..=5`.
    pub fn from_code(code: u8) -> Result<Self, ValueError> {
        AC_MODES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(mode, _, _)| *mode)
            .ok_or_else(|| ValueError::unrecognized("air conditioner mode", code.to_string()))
    }
}

impl fmt::Display for AcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AcMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AC_MODES
            .iter()
            .find(|(_, _, name)| name.eq_ignore_ascii_case(s))
            .map(|(mode, _, _)| *mode)
            .ok_or_else(|| ValueError::unrecognized("air conditioner mode", s))
    }
}

/// Fan speed of an air conditioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcFanSpeed {
    /// Automatic fan speed.
    Auto,
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

const AC_FAN_SPEEDS: [(AcFanSpeed, u8, &str); 4] = [
    (AcFanSpeed::Auto, 1, "auto"),
    (AcFanSpeed::Low, 2, "low"),
    (AcFanSpeed::Medium, 3, "medium"),
    (AcFanSpeed::High, 4, "high"),
];

impl AcFanSpeed {
    /// Returns the numeric code used in the `setAll` parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Auto => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Decodes a numeric fan speed code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Unrecognized` for codes outside `1..=4`.
    pub fn from_code(code: u8) -> Result<Self, ValueError> {
        AC_FAN_SPEEDS
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(speed, _, _)| *speed)
            .ok_or_else(|| ValueError::unrecognized("fan speed", code.to_string()))
    }
}

impl fmt::Display for AcFanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AcFanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AC_FAN_SPEEDS
            .iter()
            .find(|(_, _, name)| name.eq_ignore_ascii_case(s))
            .map(|(speed, _, _)| *speed)
            .ok_or_else(|| ValueError::unrecognized("fan speed", s))
    }
}

/// Full air conditioner state, encoded as the `setAll` parameter.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::{AcFanSpeed, AcMode, AirConditionerSettings, PowerState};
///
/// let settings = AirConditionerSettings::new(24, AcMode::Cool, AcFanSpeed::Auto, PowerState::On);
/// assert_eq!(settings.to_string(), "24,2,1,on");
///
/// let parsed: AirConditionerSettings = "26,5,4,off".parse().unwrap();
/// assert_eq!(parsed.mode, AcMode::Heat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirConditionerSettings {
    /// Target temperature in degrees Celsius.
    pub temperature: i16,
    /// Operating mode.
    pub mode: AcMode,
    /// Fan speed.
    pub fan_speed: AcFanSpeed,
    /// Power state.
    pub power: PowerState,
}

impl AirConditionerSettings {
    /// Creates a settings value.
    #[must_use]
    pub const fn new(
        temperature: i16,
        mode: AcMode,
        fan_speed: AcFanSpeed,
        power: PowerState,
    ) -> Self {
        Self {
            temperature,
            mode,
            fan_speed,
            power,
        }
    }

    /// Returns the `setAll` parameter string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AirConditionerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.temperature,
            self.mode.code(),
            self.fan_speed.code(),
            self.power
        )
    }
}

impl FromStr for AirConditionerSettings {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValueError::malformed("setAll", s);

        let fields: Vec<&str> = s.split(',').collect();
        let [temperature, mode, fan_speed, power] = fields.as_slice() else {
            return Err(malformed());
        };

        let temperature = temperature.trim().parse().map_err(|_| malformed())?;
        let mode = mode.trim().parse().map_err(|_| malformed())?;
        let fan_speed = fan_speed.trim().parse().map_err(|_| malformed())?;

        Ok(Self {
            temperature,
            mode: AcMode::from_code(mode)?,
            fan_speed: AcFanSpeed::from_code(fan_speed)?,
            power: power.trim().parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_table_covers_every_variant() {
        for (mode, code, name) in AC_MODES {
            assert_eq!(mode.code(), code);
            assert_eq!(mode.name(), name);
            assert_eq!(AcMode::from_code(code).unwrap(), mode);
            assert_eq!(name.parse::<AcMode>().unwrap(), mode);
        }
    }

    #[test]
    fn fan_speed_table_covers_every_variant() {
        for (speed, code, name) in AC_FAN_SPEEDS {
            assert_eq!(speed.code(), code);
            assert_eq!(speed.name(), name);
            assert_eq!(AcFanSpeed::from_code(code).unwrap(), speed);
            assert_eq!(name.parse::<AcFanSpeed>().unwrap(), speed);
        }
    }

    #[test]
    fn wire_codes_are_fixed() {
        let modes = [AcMode::Auto, AcMode::Cool, AcMode::Dry, AcMode::Fan, AcMode::Heat];
        assert_eq!(modes.map(AcMode::code), [1, 2, 3, 4, 5]);
        let speeds = [AcFanSpeed::Auto, AcFanSpeed::Low, AcFanSpeed::Medium, AcFanSpeed::High];
        assert_eq!(speeds.map(AcFanSpeed::code), [1, 2, 3, 4]);
        assert_eq!(AcMode::Heat.to_string(), "heat");
        assert_eq!(AcFanSpeed::Medium.to_string(), "medium");
    }

    #[test]
    fn unknown_mode_rejected() {
        assert_eq!(
            "turbo".parse::<AcMode>(),
            Err(ValueError::unrecognized("air conditioner mode", "turbo"))
        );
        assert!(AcMode::from_code(0).is_err());
        assert!(AcMode::from_code(6).is_err());
    }

    #[test]
    fn unknown_fan_speed_rejected() {
        assert!("max".parse::<AcFanSpeed>().is_err());
        assert!(AcFanSpeed::from_code(5).is_err());
    }

    #[test]
    fn encode_cool_auto_on() {
        let settings =
            AirConditionerSettings::new(24, AcMode::Cool, AcFanSpeed::Auto, PowerState::On);
        assert_eq!(settings.encode(), "24,2,1,on");
    }

    #[test]
    fn encode_parse_round_trip() {
        let settings =
            AirConditionerSettings::new(18, AcMode::Dry, AcFanSpeed::High, PowerState::Off);
        let parsed: AirConditionerSettings = settings.encode().parse().unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert!("24,2,1".parse::<AirConditionerSettings>().is_err());
        assert!("24,2,1,on,extra".parse::<AirConditionerSettings>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_table_codes() {
        let err = "24,9,1,on".parse::<AirConditionerSettings>().unwrap_err();
        assert!(matches!(err, ValueError::Unrecognized { .. }));
    }
}
