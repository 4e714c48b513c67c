// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the remote API.
//!
//! - [`DeviceStatusResponse`] - Device status with its attribute list
//! - [`AferoErrorResponse`] - Structured error payload returned on failures

mod device_status;
mod error;

pub use device_status::{AttributeResponse, DeviceStatusResponse};
pub use error::{AferoErrorResponse, describe_error};
