// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device attribute access.
//!
//! [`DeviceService`] reads and writes device attributes through the remote
//! API. The API answers "device not available" when one account sends
//! overlapping requests, so every call, for every device, runs under a single
//! lock owned by the service.
//!
//! Remote failures are logged and absorbed: reads return `None`, writes
//! return `Ok(())`. Only configuration errors reach the caller.
//!
//! # Examples
//!
//! ```no_run
//! use hubspace_lib::{AccountSession, DeviceFunction, DeviceService, HttpConfig};
//!
//! # async fn example() -> hubspace_lib::Result<()> {
//! let client = HttpConfig::new("access-token").into_client()?;
//! let service = DeviceService::new(client, AccountSession::new("account-id"));
//!
//! service.set_value("device-id", DeviceFunction::FanSpeed, 50).await?;
//!
//! if service.get_value_as_boolean("device-id", DeviceFunction::FanPower).await? == Some(true) {
//!     println!("fan is on");
//! }
//! # Ok(())
//! # }
//! ```

mod outcome;

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::account::AccountContext;
use crate::command::AttributeWriteCommand;
use crate::error::{Error, Result};
use crate::function::{self, DeviceFunction, FunctionDefinition};
use crate::protocol::Protocol;
use crate::response::{DeviceStatusResponse, describe_error};
use crate::types::{decode_boolean, decode_integer, encode_value};

pub(crate) use outcome::AccessOutcome;

/// Reads and writes device attributes, one remote call at a time.
#[derive(Debug)]
pub struct DeviceService<P: Protocol, A: AccountContext> {
    protocol: P,
    account: A,
    lock: Mutex<()>,
    lock_timeout: Duration,
}

impl<P: Protocol, A: AccountContext> DeviceService<P, A> {
    /// Default wait for the account lock.
    pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(5000);

    /// Creates a service using `protocol` for requests scoped to `account`.
    #[must_use]
    pub fn new(protocol: P, account: A) -> Self {
        Self {
            protocol,
            account,
            lock: Mutex::new(()),
            lock_timeout: Self::DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Sets how long a call waits for the account lock before giving up.
    #[must_use]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Returns the lock wait bound.
    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Writes a value to the attribute backing `function`.
    ///
    /// Strings are sent as-is, booleans as `"01"`/`"00"` and numbers as
    /// little-endian hex. A remote failure or rejection is logged, not
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConfigured`] if `function` has no catalog entry
    /// - [`Error::UnsupportedValueType`] if `value` cannot be encoded
    pub async fn set_value(
        &self,
        device_id: &str,
        function: DeviceFunction,
        value: impl Into<Value>,
    ) -> Result<()> {
        let value = value.into();
        let definition = function::lookup(function)?;
        let data = encode_value(&value)?;

        match self.write_attribute(device_id, definition, data).await {
            AccessOutcome::Success(()) => {}
            AccessOutcome::Absent => {
                tracing::error!(
                    device_id = %device_id,
                    value = %value,
                    "Remote server did not accept new value"
                );
            }
            AccessOutcome::Failed(error) => log_remote_error(device_id, &error),
        }

        Ok(())
    }

    /// Reads the raw value of the attribute backing `function`.
    ///
    /// Returns `None` if the device does not report the attribute or the
    /// remote call fails; both are logged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if `function` has no catalog entry.
    pub async fn get_value(
        &self,
        device_id: &str,
        function: DeviceFunction,
    ) -> Result<Option<Value>> {
        let definition = function::lookup(function)?;

        Ok(match self.read_attribute(device_id, definition).await {
            AccessOutcome::Success(value) => Some(value),
            AccessOutcome::Absent => {
                tracing::error!(
                    device_id = %device_id,
                    function = definition.display_name(),
                    attribute_id = definition.attribute_id,
                    "Failed to find attribute value for device"
                );
                None
            }
            AccessOutcome::Failed(error) => {
                log_remote_error(device_id, &error);
                None
            }
        })
    }

    /// Reads a value as a boolean: `Some(true)` only for `"1"`.
    ///
    /// Absent or falsy raw values give `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if `function` has no catalog entry.
    pub async fn get_value_as_boolean(
        &self,
        device_id: &str,
        function: DeviceFunction,
    ) -> Result<Option<bool>> {
        let value = self.get_value(device_id, function).await?;
        Ok(value.as_ref().and_then(decode_boolean))
    }

    /// Reads a value as a decimal integer.
    ///
    /// Absent, non-string and non-numeric raw values give `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if `function` has no catalog entry.
    pub async fn get_value_as_integer(
        &self,
        device_id: &str,
        function: DeviceFunction,
    ) -> Result<Option<i64>> {
        let value = self.get_value(device_id, function).await?;
        Ok(value.as_ref().and_then(decode_integer))
    }

    pub(crate) async fn write_attribute(
        &self,
        device_id: &str,
        definition: &FunctionDefinition,
        data: String,
    ) -> AccessOutcome<()> {
        let command = AttributeWriteCommand::new(definition.attribute_id, data);

        self.locked(async {
            let path = format!("{}/actions", self.device_path(device_id));
            let response = self.protocol.post(&path, &command).await?;
            Ok::<_, Error>((response.status() == 200).then_some(()))
        })
        .await
    }

    pub(crate) async fn read_attribute(
        &self,
        device_id: &str,
        definition: &FunctionDefinition,
    ) -> AccessOutcome<Value> {
        self.locked(async {
            let path = format!("{}?expansions=attributes", self.device_path(device_id));
            let response = self.protocol.get(&path).await?;
            let status: DeviceStatusResponse = response.parse()?;
            Ok::<_, Error>(
                status
                    .attribute(definition.attribute_id)
                    .map(|attribute| attribute.value.clone()),
            )
        })
        .await
    }

    /// Runs `operation` while holding the account lock.
    async fn locked<T>(
        &self,
        operation: impl Future<Output = Result<Option<T>>>,
    ) -> AccessOutcome<T> {
        let Ok(_guard) = tokio::time::timeout(self.lock_timeout, self.lock.lock()).await else {
            return AccessOutcome::Failed(Error::LockTimeout(millis(self.lock_timeout)));
        };

        operation.await.into()
    }

    fn device_path(&self, device_id: &str) -> String {
        format!(
            "accounts/{}/devices/{}",
            urlencoding::encode(&self.account.account_id()),
            urlencoding::encode(device_id)
        )
    }
}

fn log_remote_error(device_id: &str, error: &Error) {
    tracing::error!(
        device_id = %device_id,
        error = %describe_error(error),
        "The remote service returned an error."
    );
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
