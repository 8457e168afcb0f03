//! Periods module - calendar bucketing rules for report charts.

mod periods_model;
mod periods_service;
#[cfg(test)]
mod periods_service_tests;

pub use periods_model::PeriodFormat;
pub use periods_service::{PeriodFormatterTrait, PeriodService};
