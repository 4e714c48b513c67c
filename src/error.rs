// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hubspace_lib` library.
//!
//! Two families of errors live here:
//!
//! - Configuration errors ([`Error::NotConfigured`],
//!   [`Error::UnsupportedValueType`]) mean the calling code is wired up
//!   incorrectly. They are returned to the caller.
//! - Remote errors ([`Error::LockTimeout`], [`Error::Protocol`],
//!   [`Error::Parse`]) are runtime noise. The
//!   [`DeviceService`](crate::DeviceService) logs them and never returns them.

use thiserror::Error;

use crate::function::DeviceFunction;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The function has no definition in the catalog.
    #[error(
        "failed to get function definition for '{function}'; each function requires a definition"
    )]
    NotConfigured {
        /// The function that was requested.
        function: DeviceFunction,
    },

    /// The value cannot be encoded for an attribute write.
    #[error("the value type is not supported: {0}")]
    UnsupportedValueType(String),

    /// The account lock was not acquired in time.
    #[error("account lock not acquired within {0} ms")]
    LockTimeout(u64),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to HTTP communication with the remote API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("request failed with status code {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, kept for error classification.
        body: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Returns the response body attached to this error, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Errors related to parsing remote API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
