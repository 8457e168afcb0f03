//! Period granularity model.

use serde::{Deserialize, Serialize};

/// Calendar granularity used to bucket flow records.
///
/// Chosen from the span of the requested date range: short ranges bucket
/// by day, ranges within a year by month, anything longer by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodFormat {
    Day,
    Month,
    Year,
}
