use chrono::NaiveDate;
use moneta_core::currencies::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time balance of one account.
///
/// The balance is the account's full standing on `date`, not a delta; a
/// lookup for a later date uses the most recent snapshot on or before it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub account_id: String,
    pub date: NaiveDate,
    pub currency: Currency,
    pub balance: Decimal,
}
