//! Charts module - chart-ready dataset models.

mod charts_model;

pub use charts_model::{ChartDataset, ChartEntries, ChartSeries, ChartSeriesType};
