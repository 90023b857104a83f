// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart Fan `set` parameter.

use std::fmt;

use crate::error::ValueError;
use crate::types::PowerState;

/// Airflow pattern of the Smart Fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmartFanMode {
    /// Constant airflow (`1`).
    Standard,
    /// Varying, natural-feeling airflow (`2`).
    Natural,
}

impl SmartFanMode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Natural => 2,
        }
    }
}

/// Settings for the Smart Fan `set` command.
///
/// Encoded as `<power>,<mode>,<speed>,<shake range>`.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::{PowerState, SmartFanMode, SmartFanSettings};
///
/// let settings = SmartFanSettings::new(PowerState::On, SmartFanMode::Standard, 1, 60).unwrap();
/// assert_eq!(settings.to_string(), "on,1,1,60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmartFanSettings {
    power: PowerState,
    mode: SmartFanMode,
    speed: u8,
    shake_range: u8,
}

impl SmartFanSettings {
    /// Minimum fan speed.
    pub const MIN_SPEED: u8 = 1;
    /// Maximum fan speed.
    pub const MAX_SPEED: u8 = 4;
    /// Maximum oscillation angle in degrees.
    pub const MAX_SHAKE_RANGE: u8 = 120;

    /// Creates fan settings.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `speed` is outside 1-4 or
    /// `shake_range` is above 120.
    pub fn new(
        power: PowerState,
        mode: SmartFanMode,
        speed: u8,
        shake_range: u8,
    ) -> Result<Self, ValueError> {
        if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&speed) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN_SPEED),
                max: u16::from(Self::MAX_SPEED),
                actual: u16::from(speed),
            });
        }
        if shake_range > Self::MAX_SHAKE_RANGE {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX_SHAKE_RANGE),
                actual: u16::from(shake_range),
            });
        }
        Ok(Self {
            power,
            mode,
            speed,
            shake_range,
        })
    }

    /// Returns the fan speed.
    #[must_use]
    pub const fn speed(&self) -> u8 {
        self.speed
    }
}

impl fmt::Display for SmartFanSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.power,
            self.mode.code(),
            self.speed,
            self.shake_range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_natural_mode() {
        let settings = SmartFanSettings::new(PowerState::Off, SmartFanMode::Natural, 4, 0).unwrap();
        assert_eq!(settings.to_string(), "off,2,4,0");
    }

    #[test]
    fn speed_out_of_range() {
        assert!(SmartFanSettings::new(PowerState::On, SmartFanMode::Standard, 0, 60).is_err());
        assert!(SmartFanSettings::new(PowerState::On, SmartFanMode::Standard, 5, 60).is_err());
    }

    #[test]
    fn shake_range_out_of_range() {
        let err = SmartFanSettings::new(PowerState::On, SmartFanMode::Standard, 2, 121).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                min: 0,
                max: 120,
                actual: 121
            }
        );
    }
}
