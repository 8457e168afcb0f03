//! Moneta Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Moneta: ledger
//! aggregation into chart-ready datasets plus the available-budget
//! records. It is storage-agnostic and defines traits that are
//! implemented by the `storage-memory` crate.

pub mod accounts;
pub mod budgets;
pub mod cache;
pub mod charts;
pub mod constants;
pub mod currencies;
pub mod errors;
pub mod journals;
pub mod periods;
pub mod reports;

// Re-export common types from the chart and report modules
pub use charts::*;
pub use reports::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
