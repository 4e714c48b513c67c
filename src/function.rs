// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device function catalog.
//!
//! A device function is a logical capability (power, brightness, fan speed...)
//! exposed by a Hubspace device. Each supported function maps to an attribute
//! id on the remote device's attribute set.
//!
//! The catalog is a compile-time table. A function missing from the table is a
//! wiring defect and [`lookup`] reports it as [`Error::NotConfigured`].
//!
//! # Examples
//!
//! ```
//! use hubspace_lib::function::{self, DeviceFunction};
//!
//! let def = function::lookup(DeviceFunction::FanSpeed).unwrap();
//! assert_eq!(def.attribute_id, 6);
//! assert_eq!(def.function_class, "fan-speed");
//! ```

use std::fmt;

use crate::error::Error;

/// Logical capability of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFunction {
    /// Light on/off.
    LightPower,
    /// Light brightness.
    Brightness,
    /// Fan on/off.
    FanPower,
    /// Fan speed.
    FanSpeed,
    /// White color temperature.
    LightTemperature,
    /// RGB color.
    LightColor,
    /// Switch between temperature (`0`) and color (`1`) light modes.
    ColorMode,
}

impl DeviceFunction {
    /// Every device function, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::LightPower,
        Self::Brightness,
        Self::FanPower,
        Self::FanSpeed,
        Self::LightTemperature,
        Self::LightColor,
        Self::ColorMode,
    ];

    /// Returns the function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LightPower => "LightPower",
            Self::Brightness => "Brightness",
            Self::FanPower => "FanPower",
            Self::FanSpeed => "FanSpeed",
            Self::LightTemperature => "LightTemperature",
            Self::LightColor => "LightColor",
            Self::ColorMode => "ColorMode",
        }
    }
}

impl fmt::Display for DeviceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static definition of a supported device function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// The function this definition describes.
    pub function: DeviceFunction,

    /// Attribute id on the remote device.
    ///
    /// Not unique across functions: different device kinds number their
    /// attributes differently.
    pub attribute_id: u32,

    /// Category label, used for logging only.
    pub function_class: &'static str,

    /// Disambiguates several instances of the same class on one device.
    pub function_instance_name: Option<&'static str>,
}

impl FunctionDefinition {
    /// Returns the instance name, or the class when there is none.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.function_instance_name.unwrap_or(self.function_class)
    }
}

// TODO: fan-light power (attribute 2, instance "light-power") and fan-light
// brightness (attribute 4) collide with the bulb entries below; they need a
// per-device-kind table before they can be enabled.
static DEFINITIONS: [FunctionDefinition; 7] = [
    FunctionDefinition {
        function: DeviceFunction::FanPower,
        attribute_id: 3,
        function_class: "power",
        function_instance_name: Some("fan-power"),
    },
    FunctionDefinition {
        function: DeviceFunction::FanSpeed,
        attribute_id: 6,
        function_class: "fan-speed",
        function_instance_name: Some("fan-speed"),
    },
    FunctionDefinition {
        function: DeviceFunction::LightPower,
        attribute_id: 1,
        function_class: "power",
        function_instance_name: None,
    },
    FunctionDefinition {
        function: DeviceFunction::Brightness,
        attribute_id: 2,
        function_class: "brightness",
        function_instance_name: None,
    },
    FunctionDefinition {
        function: DeviceFunction::LightTemperature,
        attribute_id: 3,
        function_class: "color-temperature",
        function_instance_name: None,
    },
    FunctionDefinition {
        function: DeviceFunction::LightColor,
        attribute_id: 4,
        function_class: "color-rgb",
        function_instance_name: None,
    },
    // Read back as 1 while the light is driven by color; in temperature mode
    // the color attribute has no meaningful value.
    FunctionDefinition {
        function: DeviceFunction::ColorMode,
        attribute_id: 5,
        function_class: "color-mode",
        function_instance_name: None,
    },
];

/// Returns every configured definition, in table order.
#[must_use]
pub fn definitions() -> &'static [FunctionDefinition] {
    &DEFINITIONS
}

/// Looks up the definition of a function.
///
/// # Errors
///
/// Returns [`Error::NotConfigured`] if the catalog has no entry for `function`.
pub fn lookup(function: DeviceFunction) -> Result<&'static FunctionDefinition, Error> {
    find_in(definitions(), function)
}

/// Returns whether the catalog has an entry for `function`.
#[must_use]
pub fn is_configured(function: DeviceFunction) -> bool {
    lookup(function).is_ok()
}

fn find_in(
    table: &'static [FunctionDefinition],
    function: DeviceFunction,
) -> Result<&'static FunctionDefinition, Error> {
    table
        .iter()
        .find(|def| def.function == function)
        .ok_or(Error::NotConfigured { function })
}
