//! Account domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ValidationError, Error, Result};

/// Whether an account participates in net worth reporting.
///
/// The flag lives in the account meta JSON and is opt-out only: an account
/// with no value behaves like an included one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetWorthInclusion {
    /// Account balances count toward net worth
    Included,
    /// Account is explicitly excluded from net worth charts
    Excluded,
    /// Preference has never been set; treated as included
    #[default]
    NotSet,
}

impl NetWorthInclusion {
    /// Resolves the tri-state to the effective boolean.
    pub fn is_included(self) -> bool {
        !matches!(self, NetWorthInclusion::Excluded)
    }
}

/// Gets the net worth inclusion preference from an account's meta JSON field.
///
/// Returns `NetWorthInclusion::NotSet` if:
/// - meta is None
/// - meta is empty or invalid JSON
/// - the includeNetWorth field is missing or invalid
pub fn net_worth_inclusion(account: &Account) -> NetWorthInclusion {
    account
        .meta
        .as_ref()
        .and_then(|meta_str| {
            if meta_str.is_empty() {
                return None;
            }
            serde_json::from_str::<Value>(meta_str).ok()
        })
        .and_then(|json| json.get("includeNetWorth").cloned())
        .and_then(|flag| serde_json::from_value::<NetWorthInclusion>(flag).ok())
        .unwrap_or(NetWorthInclusion::NotSet)
}

/// Sets the net worth inclusion preference in an account's meta JSON,
/// preserving other fields.
///
/// If meta is None, empty, or invalid JSON, creates a new JSON object.
pub fn set_net_worth_inclusion(meta: Option<String>, inclusion: NetWorthInclusion) -> String {
    let mut json_obj = meta
        .as_ref()
        .filter(|s| !s.is_empty())
        .and_then(|meta_str| serde_json::from_str::<Value>(meta_str).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();

    let flag = serde_json::to_value(inclusion).unwrap_or(Value::String("NOT_SET".to_string()));
    json_obj.insert("includeNetWorth".to_string(), flag);

    serde_json::to_string(&json_obj)
        .unwrap_or_else(|_| r#"{"includeNetWorth":"NOT_SET"}"#.to_string())
}

/// Domain model representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Currency the account is denominated in
    pub currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Additional metadata as JSON string
    pub meta: Option<String>,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub currency: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub meta: Option<String>,
}

fn default_active() -> bool {
    true
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
    pub meta: Option<String>,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
