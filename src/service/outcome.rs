// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of one locked remote call.

use crate::error::Error;

/// What a locked remote call produced.
///
/// Only the logging step of [`DeviceService`](super::DeviceService) consumes
/// `Absent` and `Failed`; callers see a plain value or nothing.
#[derive(Debug)]
pub(crate) enum AccessOutcome<T> {
    /// The remote call succeeded.
    Success(T),
    /// The remote answered but produced nothing: the attribute is missing
    /// from a read, or a write was not accepted.
    Absent,
    /// The lock timed out or the remote call failed.
    Failed(Error),
}

impl<T> From<Result<Option<T>, Error>> for AccessOutcome<T> {
    fn from(result: Result<Option<T>, Error>) -> Self {
        match result {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Absent,
            Err(error) => Self::Failed(error),
        }
    }
}
