//! Operations report module.
//!
//! Classifies journal entries as earned or spent per currency and period
//! and assembles paired bar series with running sums.

mod operations_service;
mod operations_traits;

pub use operations_service::*;
pub use operations_traits::*;

#[cfg(test)]
mod operations_service_tests;
