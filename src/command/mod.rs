// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device action requests.
//!
//! Actions are posted to `accounts/{accountId}/devices/{deviceId}/actions`.
//! The only action this library sends is an attribute write.
//!
//! # Examples
//!
//! ```
//! use hubspace_lib::command::AttributeWriteCommand;
//!
//! let cmd = AttributeWriteCommand::new(6, "32");
//! let body = serde_json::to_value(&cmd).unwrap();
//!
//! assert_eq!(body["type"], "attribute_write");
//! assert_eq!(body["attrId"], 6);
//! assert_eq!(body["data"], "32");
//! ```

mod attribute;

pub use attribute::{ActionType, AttributeWriteCommand};
