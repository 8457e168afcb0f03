//! Period formatting service.
//!
//! Centralizes every calendar rule the report aggregators depend on:
//! which granularity fits a date range, how a date maps to a period key,
//! how periods are titled, and how a cursor advances to the next period.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::periods_model::PeriodFormat;

/// Trait for the period-formatting rules consumed by the report services.
///
/// Injected explicitly so aggregators never reach for a global formatter.
pub trait PeriodFormatterTrait: Send + Sync {
    /// Picks the bucketing granularity for the given range.
    fn preferred_format(&self, start: NaiveDate, end: NaiveDate) -> PeriodFormat;

    /// Short "month and day" label used for net worth sample points, e.g. `Jan 01`.
    fn month_and_day(&self, date: NaiveDate) -> String;

    /// Machine key identifying the period a date falls in, e.g. `2021-03`.
    fn period_key(&self, date: NaiveDate, format: PeriodFormat) -> String;

    /// Human-readable title for the period a date falls in, e.g. `March 2021`.
    fn period_title(&self, date: NaiveDate, format: PeriodFormat) -> String;

    /// First day of the period following the one `date` falls in.
    fn add_period(&self, date: NaiveDate, format: PeriodFormat) -> NaiveDate;

    /// Last day of the period `date` falls in.
    fn end_of_period(&self, date: NaiveDate, format: PeriodFormat) -> NaiveDate;
}

/// Default period formatter using Gregorian calendar rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeriodService;

impl PeriodService {
    pub fn new() -> Self {
        Self
    }
}

impl PeriodFormatterTrait for PeriodService {
    fn preferred_format(&self, start: NaiveDate, end: NaiveDate) -> PeriodFormat {
        let span_days = (end - start).num_days();
        if span_days <= 31 {
            PeriodFormat::Day
        } else if span_days <= 366 {
            PeriodFormat::Month
        } else {
            PeriodFormat::Year
        }
    }

    fn month_and_day(&self, date: NaiveDate) -> String {
        date.format("%b %d").to_string()
    }

    fn period_key(&self, date: NaiveDate, format: PeriodFormat) -> String {
        match format {
            PeriodFormat::Day => date.format("%Y-%m-%d").to_string(),
            PeriodFormat::Month => date.format("%Y-%m").to_string(),
            PeriodFormat::Year => date.format("%Y").to_string(),
        }
    }

    fn period_title(&self, date: NaiveDate, format: PeriodFormat) -> String {
        match format {
            PeriodFormat::Day => date.format("%b %d").to_string(),
            PeriodFormat::Month => date.format("%B %Y").to_string(),
            PeriodFormat::Year => date.format("%Y").to_string(),
        }
    }

    fn add_period(&self, date: NaiveDate, format: PeriodFormat) -> NaiveDate {
        match format {
            PeriodFormat::Day => date + Days::new(1),
            // Month arithmetic clamps to the last valid day (Jan 31 -> Feb 28)
            PeriodFormat::Month => date + Months::new(1),
            PeriodFormat::Year => date + Months::new(12),
        }
    }

    fn end_of_period(&self, date: NaiveDate, format: PeriodFormat) -> NaiveDate {
        match format {
            PeriodFormat::Day => date,
            PeriodFormat::Month => {
                let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                    .expect("first of month is always valid");
                first + Months::new(1) - Days::new(1)
            }
            PeriodFormat::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31)
                .expect("Dec 31 is always valid"),
        }
    }
}
