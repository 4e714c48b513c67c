// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute value codec.

use serde_json::{Number, Value};

use crate::error::Error;

/// Encodes a value for an attribute write.
///
/// - Strings pass through unchanged.
/// - Booleans become `"01"` (true) or `"00"` (false).
/// - Numbers become little-endian hex pairs, see [`hex_reverse`].
///
/// # Examples
///
/// ```
/// use hubspace_lib::types::encode_value;
/// use serde_json::json;
///
/// assert_eq!(encode_value(&json!(true)).unwrap(), "01");
/// assert_eq!(encode_value(&json!("ff00")).unwrap(), "ff00");
/// assert_eq!(encode_value(&json!(300)).unwrap(), "2c01");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValueType`] for `null`, arrays, objects and
/// numbers that are not non-negative integers.
pub fn encode_value(value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(true) => Ok("01".to_string()),
        Value::Bool(false) => Ok("00".to_string()),
        Value::Number(n) => number_to_u64(n)
            .map(hex_reverse)
            .ok_or_else(|| Error::UnsupportedValueType(format!("number {n}"))),
        Value::Null => Err(Error::UnsupportedValueType("null".to_string())),
        Value::Array(_) => Err(Error::UnsupportedValueType("array".to_string())),
        Value::Object(_) => Err(Error::UnsupportedValueType("object".to_string())),
    }
}

/// Converts a number to hex with its byte order reversed.
///
/// The hex string is padded to whole bytes, then the bytes are emitted
/// least significant first.
///
/// ```
/// use hubspace_lib::types::hex_reverse;
///
/// assert_eq!(hex_reverse(0), "00");
/// assert_eq!(hex_reverse(50), "32");
/// assert_eq!(hex_reverse(0x0102_03), "030201");
/// ```
#[must_use]
pub fn hex_reverse(value: u64) -> String {
    let mut hex = format!("{value:x}");
    if hex.len() % 2 == 1 {
        hex.insert(0, '0');
    }

    hex.as_bytes()
        .chunks(2)
        .rev()
        .flat_map(|pair| pair.iter().map(|&b| char::from(b)))
        .collect()
}

// 2^64 as f64; every integral f64 below it fits a u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn number_to_u64(n: &Number) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    let f = n.as_f64()?;
    (f >= 0.0 && f < U64_LIMIT && f.fract() == 0.0).then_some(f as u64)
}

/// Interprets a raw attribute value as a boolean.
///
/// Returns `None` for falsy values (`null`, `false`, `0`, `""`). Otherwise the
/// result is `true` only for the literal string `"1"`.
///
/// ```
/// use hubspace_lib::types::decode_boolean;
/// use serde_json::json;
///
/// assert_eq!(decode_boolean(&json!("1")), Some(true));
/// assert_eq!(decode_boolean(&json!("0")), Some(false));
/// assert_eq!(decode_boolean(&json!("")), None);
/// ```
#[must_use]
pub fn decode_boolean(raw: &Value) -> Option<bool> {
    if is_falsy(raw) {
        return None;
    }
    Some(raw.as_str() == Some("1"))
}

/// Interprets a raw attribute value as a decimal integer.
///
/// Only non-empty strings are considered. Leading whitespace and a sign are
/// accepted and parsing stops at the first non-digit; a string with no
/// leading digits yields `None`.
///
/// ```
/// use hubspace_lib::types::decode_integer;
/// use serde_json::json;
///
/// assert_eq!(decode_integer(&json!("42")), Some(42));
/// assert_eq!(decode_integer(&json!("abc")), None);
/// assert_eq!(decode_integer(&json!(42)), None);
/// ```
#[must_use]
pub fn decode_integer(raw: &Value) -> Option<i64> {
    let s = raw.as_str().filter(|s| !s.is_empty())?;
    parse_leading_integer(s)
}

fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    s[..sign_len + digits_len].parse().ok()
}

fn is_falsy(raw: &Value) -> bool {
    match raw {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        _ => false,
    }
}
