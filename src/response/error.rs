// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote error payload and error classification.

use serde::Deserialize;

use crate::error::{Error, ProtocolError};

/// Structured error body returned by the Afero API.
///
/// ```json
/// {"error": "invalid_request", "error_description": "Device not available"}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AferoErrorResponse {
    /// Short error code.
    #[serde(default)]
    pub error: Option<String>,

    /// Human-readable description.
    pub error_description: String,
}

impl AferoErrorResponse {
    /// Parses a response body, returning `None` if it is not an Afero error.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Returns the message to log for a failed remote call.
///
/// Uses the remote `error_description` when the response body carries one,
/// otherwise the error's own message.
#[must_use]
pub fn describe_error(error: &Error) -> String {
    if let Error::Protocol(protocol) = error
        && let Some(afero) = protocol.response_body().and_then(AferoErrorResponse::from_body)
    {
        return afero.error_description;
    }
    error.to_string()
}
