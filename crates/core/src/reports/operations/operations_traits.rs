//! Operations report trait.

use chrono::NaiveDate;

use crate::accounts::Account;
use crate::charts::ChartDataset;
use crate::errors::Result;

/// Trait defining the contract for the operations (income/expense) report.
pub trait OperationsReportTrait: Send + Sync {
    /// Builds the operations chart for `accounts` over `[start, end]`.
    ///
    /// Every journal entry in range is classified as earned or spent:
    /// deposits earn, transfers earn when their destination is in the
    /// account set, everything else spends. Amounts accumulate at full
    /// precision and are rounded to the currency's decimal places only
    /// when the series are materialized. Returns an earned and a spent
    /// bar series per currency, earned first.
    fn operations_series(
        &self,
        accounts: &[Account],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartDataset>;
}
