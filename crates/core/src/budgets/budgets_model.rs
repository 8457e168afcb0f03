//! Available budget domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;
use crate::errors::{Error, Result, ValidationError};

/// Amount of money available to spend in one currency over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBudget {
    pub id: i64,
    pub currency: Currency,
    pub amount: Decimal,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating an available budget.
///
/// The currency may be given by id or by code; at least one is required.
/// When both are present the id wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAvailableBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub amount: Decimal,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl NewAvailableBudget {
    /// Validates the new available budget data.
    pub fn validate(&self) -> Result<()> {
        if self.currency_id.is_none() && self.currency_code.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "currency_id or currency_code".to_string(),
            )));
        }
        if self.amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount cannot be negative".to_string(),
            )));
        }
        if self.start > self.end {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Start date must be on or before end date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an available budget.
///
/// Every field is optional; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl AvailableBudgetUpdate {
    /// Validates the fields that are present. Cross-field date ordering is
    /// checked by the service against the stored record.
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            if amount.is_sign_negative() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Amount cannot be negative".to_string(),
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Start date must be on or before end date".to_string(),
                )));
            }
        }
        Ok(())
    }
}
