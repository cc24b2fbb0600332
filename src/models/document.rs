//! Document root
//!
//! The whole data file: accounts keyed by email plus the OTHERS bucket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::{Account, AccountKey, OthersBucket};
use super::lenient;
use super::service::Service;

/// Root of the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub accounts: BTreeMap<String, Account>,

    #[serde(default, rename = "OTHERS", deserialize_with = "lenient::null_as_default")]
    pub others: OthersBucket,
}

impl Document {
    /// An empty document: `{"accounts": {}, "OTHERS": {}}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Account keys in display order: emails, then OTHERS
    pub fn keys(&self) -> Vec<AccountKey> {
        self.accounts
            .keys()
            .cloned()
            .map(AccountKey::Account)
            .chain(std::iter::once(AccountKey::Others))
            .collect()
    }

    /// Whether the key addresses something in this document
    pub fn contains(&self, key: &AccountKey) -> bool {
        match key {
            AccountKey::Account(email) => self.accounts.contains_key(email),
            AccountKey::Others => true,
        }
    }

    /// Services under an account or the OTHERS bucket
    pub fn services(&self, key: &AccountKey) -> Option<&[Service]> {
        match key {
            AccountKey::Account(email) => self.accounts.get(email).map(|a| a.services.as_slice()),
            AccountKey::Others => Some(self.others.services()),
        }
    }

    /// Mutable services list under an account or the OTHERS bucket
    pub fn services_mut(&mut self, key: &AccountKey) -> Option<&mut Vec<Service>> {
        match key {
            AccountKey::Account(email) => self.accounts.get_mut(email).map(|a| &mut a.services),
            AccountKey::Others => Some(self.others.services_mut()),
        }
    }

    /// Account-shaped view of an entry; OTHERS is converted
    pub fn account_view(&self, key: &AccountKey) -> Option<Account> {
        match key {
            AccountKey::Account(email) => self.accounts.get(email).cloned(),
            AccountKey::Others => Some(self.others.to_account()),
        }
    }

    /// Total number of services across accounts and OTHERS
    pub fn service_count(&self) -> usize {
        self.accounts
            .values()
            .map(|a| a.services.len())
            .sum::<usize>()
            + self.others.services().len()
    }
}
