// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hubspace_lib` - Read and write Hubspace device attributes.
//!
//! Hubspace devices are reached through the Afero cloud API. Each logical
//! capability of a device (power, brightness, fan speed, color...) is an
//! attribute identified by a small integer id.
//!
//! # Pieces
//!
//! - [`function`]: catalog mapping each [`DeviceFunction`] to its attribute
//! - [`DeviceService`]: reads and writes attributes, one request at a time
//! - [`types`]: value encoding (`true` is `"01"`, numbers are little-endian
//!   hex) and decoding
//! - [`protocol`]: HTTP client with bearer authentication
//!
//! Token acquisition and device discovery are left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use hubspace_lib::{AccountSession, DeviceFunction, DeviceService, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> hubspace_lib::Result<()> {
//!     let client = HttpConfig::new("access-token").into_client()?;
//!     let service = DeviceService::new(client, AccountSession::new("account-id"));
//!
//!     service.set_value("device-id", DeviceFunction::LightPower, true).await?;
//!
//!     let brightness = service
//!         .get_value_as_integer("device-id", DeviceFunction::Brightness)
//!         .await?;
//!     println!("brightness: {brightness:?}");
//!
//!     Ok(())
//! }
//! ```

mod account;
pub mod command;
pub mod error;
pub mod function;
pub mod protocol;
pub mod response;
mod service;
pub mod types;

pub use account::{AccountContext, AccountSession};
pub use command::AttributeWriteCommand;
pub use error::{Error, ParseError, ProtocolError, Result};
pub use function::{DeviceFunction, FunctionDefinition};
pub use protocol::{ApiResponse, HttpClient, HttpConfig, Protocol};
pub use response::{AferoErrorResponse, DeviceStatusResponse};
pub use service::DeviceService;
