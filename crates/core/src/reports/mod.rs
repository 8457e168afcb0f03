//! Reports module - chart aggregation services.
//!
//! Each report sweeps ledger data for a set of accounts over a date range
//! and produces a [`crate::charts::ChartDataset`], going through the chart
//! cache keyed by the full request parameter tuple.

pub mod net_worth;
pub mod operations;

pub use net_worth::{CurrencyBalance, NetWorthProviderTrait, NetWorthReportService, NetWorthReportTrait};
pub use operations::{OperationsReportService, OperationsReportTrait};
