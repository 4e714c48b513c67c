// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute value encoding and decoding.
//!
//! Values travel as JSON values. Outbound, they are encoded to the string the
//! remote API stores in `data`; inbound, raw attribute values are interpreted
//! as booleans or integers on demand.
//!
//! - [`encode_value`] - Caller value to wire string
//! - [`decode_boolean`] - Raw value to boolean (`"1"` is on)
//! - [`decode_integer`] - Raw value to decimal integer

mod value;

pub use value::{decode_boolean, decode_integer, encode_value, hex_reverse};
