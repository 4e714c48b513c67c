// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute write action.

use serde::Serialize;

/// Kind of device action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Writes an encoded value to one attribute.
    AttributeWrite,
}

/// Request body writing `data` to attribute `attr_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeWriteCommand {
    #[serde(rename = "type")]
    action: ActionType,
    attr_id: u32,
    data: String,
}

impl AttributeWriteCommand {
    /// Creates a write of an already encoded value.
    #[must_use]
    pub fn new(attr_id: u32, data: impl Into<String>) -> Self {
        Self {
            action: ActionType::AttributeWrite,
            attr_id,
            data: data.into(),
        }
    }

    /// Returns the target attribute id.
    #[must_use]
    pub const fn attr_id(&self) -> u32 {
        self.attr_id
    }

    /// Returns the encoded value.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }
}
