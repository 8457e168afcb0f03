//! Available budget module.
//!
//! Tracks how much money is available to spend per currency over a date
//! range, with CRUD operations exposed through the service trait.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::*;
pub use budgets_service::*;
pub use budgets_traits::*;
