//! Transaction journal domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;

/// The kind of ledger transaction a journal entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money entering the ledger from outside
    Deposit,
    /// Money leaving the ledger
    Withdrawal,
    /// Money moving between two tracked accounts
    Transfer,
    /// Initial balance entry created when an account is opened
    OpeningBalance,
    /// Correction entry aligning the ledger with reality
    Reconciliation,
}

/// One extracted journal entry contributing to inflow or outflow.
///
/// Records are read-only inputs to the reporting layer; the collector
/// supplies them already joined with their currency reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecord {
    pub date: NaiveDate,
    pub currency: Currency,
    pub kind: TransactionKind,
    pub source_account_id: String,
    pub destination_account_id: String,
    /// Signed amount; reporting uses the absolute value
    pub amount: Decimal,
}
