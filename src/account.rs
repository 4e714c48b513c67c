// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account context.
//!
//! Every request is scoped to the authenticated account. The account id is
//! owned by the session layer and read on every call, never cached here.

use std::sync::Arc;

use parking_lot::RwLock;

/// Source of the current account id.
pub trait AccountContext {
    /// Returns the id of the authenticated account.
    fn account_id(&self) -> String;
}

impl AccountContext for String {
    fn account_id(&self) -> String {
        self.clone()
    }
}

impl AccountContext for &str {
    fn account_id(&self) -> String {
        (*self).to_string()
    }
}

impl<T: AccountContext + ?Sized> AccountContext for Arc<T> {
    fn account_id(&self) -> String {
        (**self).account_id()
    }
}

/// Shared, updatable account id.
///
/// Clones share the same value, so a session service can keep one handle and
/// update the id after login while a [`DeviceService`](crate::DeviceService)
/// reads it through another.
///
/// # Examples
///
/// ```
/// use hubspace_lib::{AccountContext, AccountSession};
///
/// let session = AccountSession::default();
/// let reader = session.clone();
///
/// session.set_account_id("acct-1");
/// assert_eq!(reader.account_id(), "acct-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccountSession {
    account_id: Arc<RwLock<String>>,
}

impl AccountSession {
    /// Creates a session for the given account.
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Arc::new(RwLock::new(account_id.into())),
        }
    }

    /// Replaces the account id.
    pub fn set_account_id(&self, account_id: impl Into<String>) {
        *self.account_id.write() = account_id.into();
    }
}

impl AccountContext for AccountSession {
    fn account_id(&self) -> String {
        self.account_id.read().clone()
    }
}
