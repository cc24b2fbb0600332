//! Account model
//!
//! Represents an account keyed by email, and the OTHERS bucket that shares
//! its shape but lives at the document root.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::service::Service;

/// Literal key of the catch-all bucket
pub const OTHERS_KEY: &str = "OTHERS";

/// Format used for `dateCreated` on new accounts
pub const DATE_CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Addresses either an account in the accounts map or the OTHERS bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountKey {
    /// An account keyed by email
    Account(String),
    /// The OTHERS bucket
    Others,
}

impl AccountKey {
    /// Parse a key as typed by the user; `"OTHERS"` selects the bucket
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == OTHERS_KEY {
            Self::Others
        } else {
            Self::Account(s.to_string())
        }
    }

    /// Whether this is the OTHERS bucket
    pub fn is_others(&self) -> bool {
        matches!(self, Self::Others)
    }

    /// The key as stored in the document
    pub fn as_str(&self) -> &str {
        match self {
            Self::Account(email) => email,
            Self::Others => OTHERS_KEY,
        }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account with credentials and nested services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "lenient::string")]
    pub password: String,

    #[serde(default, rename = "dateCreated", deserialize_with = "lenient::string")]
    pub date_created: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub phone: Vec<String>,

    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub services: Vec<Service>,

    /// Fields present in the file that this model does not know about
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Account {
    /// Create an empty account stamped with the current local time
    pub fn new() -> Self {
        Self {
            date_created: Local::now().format(DATE_CREATED_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

/// The OTHERS bucket
///
/// Same fields as [`Account`], but each is optional so a bucket read as `{}`
/// is written back as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OthersBucket {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,

    #[serde(
        default,
        rename = "dateCreated",
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::opt_string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OthersBucket {
    /// Services in the bucket (empty when the field is absent)
    pub fn services(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }

    /// Mutable services list, created on first use
    pub fn services_mut(&mut self) -> &mut Vec<Service> {
        self.services.get_or_insert_with(Vec::new)
    }

    /// View the bucket through the account shape
    pub fn to_account(&self) -> Account {
        Account {
            password: self.password.clone().unwrap_or_default(),
            date_created: self.date_created.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            services: self.services().to_vec(),
            extra: self.extra.clone(),
        }
    }
}

/// Submitted values for an account edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub email: String,
    pub password: String,
    pub date_created: String,
    pub phone: Vec<String>,
}

impl AccountUpdate {
    /// Pre-fill an update with an account's current values
    pub fn from_account(key: &AccountKey, account: &Account) -> Self {
        Self {
            email: key.as_str().to_string(),
            password: account.password.clone(),
            date_created: account.date_created.clone(),
            phone: account.phone.clone(),
        }
    }

    /// Parse a comma-separated phone field, dropping blanks
    pub fn parse_phone_list(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect()
    }
}
