//! Net worth report module.
//!
//! Samples net balance per currency at weekly intervals over a date range
//! and assembles one line series per currency.

mod net_worth_model;
mod net_worth_service;
mod net_worth_traits;

pub use net_worth_model::*;
pub use net_worth_service::*;
pub use net_worth_traits::*;
