//! Net worth report traits.

use chrono::NaiveDate;

use super::net_worth_model::CurrencyBalance;
use crate::accounts::Account;
use crate::charts::ChartDataset;
use crate::errors::Result;

/// Collaborator supplying net balances grouped by currency.
///
/// Implementations answer "what did these accounts hold, per currency,
/// as of this date". Failures propagate to the report unchanged.
pub trait NetWorthProviderTrait: Send + Sync {
    fn net_worth_by_currency(
        &self,
        account_ids: &[String],
        as_of: NaiveDate,
    ) -> Result<Vec<CurrencyBalance>>;
}

/// Trait defining the contract for the net worth report.
pub trait NetWorthReportTrait: Send + Sync {
    /// Builds the net worth chart for `accounts` over `[start, end)`.
    ///
    /// Samples balances per currency at weekly intervals; accounts whose
    /// meta excludes them from net worth are filtered out first, and an
    /// absent preference counts as included. Returns one line series per
    /// currency encountered, entries in sampling order.
    fn net_worth_series(
        &self,
        accounts: &[Account],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartDataset>;
}
