// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status response parsing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response of `GET accounts/{accountId}/devices/{deviceId}?expansions=attributes`.
///
/// Only the attribute list is modelled; other fields are ignored. Entries
/// that do not parse as an attribute are skipped.
///
/// # Examples
///
/// ```
/// use hubspace_lib::response::DeviceStatusResponse;
///
/// let json = r#"{"deviceId": "dev1", "attributes": [{"id": 5, "value": "1"}]}"#;
/// let status: DeviceStatusResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(status.attribute(5).unwrap().value, "1");
/// assert!(status.attribute(6).is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatusResponse {
    /// Attributes reported by the device.
    #[serde(default, deserialize_with = "skip_malformed")]
    pub attributes: Vec<AttributeResponse>,
}

fn skip_malformed<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<AttributeResponse>, D::Error> {
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// One attribute of a device.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeResponse {
    /// Attribute id.
    pub id: u32,

    /// Raw attribute value, usually a string.
    #[serde(default)]
    pub value: Value,
}

impl DeviceStatusResponse {
    /// Returns the first attribute with the given id.
    #[must_use]
    pub fn attribute(&self, id: u32) -> Option<&AttributeResponse> {
        self.attributes.iter().find(|a| a.id == id)
    }
}
