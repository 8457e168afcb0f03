/// Number of days between two net worth samples in report charts.
pub const NET_WORTH_SAMPLE_INTERVAL_DAYS: i64 = 7;

/// Bar color for "earned" series in operations charts.
pub const EARNED_BAR_COLOR: &str = "rgba(0, 141, 76, 0.5)";

/// Bar color for "spent" series in operations charts.
pub const SPENT_BAR_COLOR: &str = "rgba(219, 68, 55, 0.5)";
