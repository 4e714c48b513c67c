// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for the Afero cloud API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Protocol};

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for the API client.
///
/// The bearer token is obtained and refreshed elsewhere; this crate only
/// attaches it to requests.
///
/// # Examples
///
/// ```
/// use hubspace_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("access-token")
///     .with_base_url("https://api2.afero.net/v1/")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "https://api2.afero.net/v1");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpConfig {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api2.afero.net/v1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration using the given bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not HTTP(S) or the client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            token: self.token,
            client,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client bound to the API base URL.
///
/// Every request carries `Authorization: Bearer <token>`.
///
/// # Examples
///
/// ```no_run
/// use hubspace_lib::protocol::{HttpConfig, Protocol};
///
/// # async fn example() -> hubspace_lib::Result<()> {
/// let client = HttpConfig::new("access-token").into_client()?;
/// let response = client.get("accounts/1234/devices/abcd?expansions=attributes").await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: String,
    client: Client,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Returns the base URL of the API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for a relative path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ProtocolError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received HTTP response");

        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}

impl Protocol for HttpClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP GET");

        self.execute(self.client.get(&url)).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP POST");

        self.execute(self.client.post(&url).json(body)).await
    }
}
