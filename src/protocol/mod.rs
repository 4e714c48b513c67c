// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for talking to the remote device API.
//!
//! - [`HttpClient`]: JSON over HTTPS with bearer authentication
//! - [`HttpConfig`]: connection parameters for [`HttpClient`]
//!
//! The [`Protocol`] trait is the seam the
//! [`DeviceService`](crate::DeviceService) is generic over.

mod http;

pub use http::{HttpClient, HttpConfig};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ParseError, ProtocolError};

/// Successful response from the remote API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can reach the remote API.
///
/// Paths are relative to the API base URL and may carry a query string.
/// Implementations return [`ProtocolError::Status`] for non-2xx responses.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn get(&self, path: &str) -> Result<ApiResponse, ProtocolError>;

    /// Sends a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ProtocolError>;
}
