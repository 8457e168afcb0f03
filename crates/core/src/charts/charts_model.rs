//! Chart dataset domain models.
//!
//! A `ChartDataset` is the normalized structure every report aggregator
//! produces: an ordered list of per-currency series, each carrying an
//! insertion-ordered mapping from period label to decimal value.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a series is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSeriesType {
    Line,
    Bar,
}

/// Ordered mapping from period label to value.
///
/// Insertion order is chronological and significant; serialization emits
/// a JSON object whose keys appear in insertion order with decimal-string
/// values. Inserting an existing label replaces the value in place
/// (last write wins) without moving the label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartEntries(Vec<(String, Decimal)>);

impl ChartEntries {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or replaces the value for `label`, keeping the label's
    /// original position when it already exists.
    pub fn insert(&mut self, label: impl Into<String>, value: Decimal) {
        let label = label.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, v)) => *v = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion (chronological) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }
}

impl Serialize for ChartEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            // Decimal's Display keeps the scale, so "100.00" stays "100.00"
            map.serialize_entry(label, &value.to_string())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ChartEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of period labels to decimal strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = ChartEntries::new();
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    let value: Decimal = value.parse().map_err(serde::de::Error::custom)?;
                    entries.insert(label, value);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// One named, ordered time series of values for one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    #[serde(rename = "type")]
    pub series_type: ChartSeriesType,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub entries: ChartEntries,
}

impl ChartSeries {
    /// Creates an empty line series.
    pub fn line(label: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            series_type: ChartSeriesType::Line,
            currency_symbol: currency_symbol.into(),
            currency_id: None,
            background_color: None,
            entries: ChartEntries::new(),
        }
    }

    /// Creates an empty bar series tagged with its currency id and color.
    pub fn bar(
        label: impl Into<String>,
        currency_symbol: impl Into<String>,
        currency_id: i64,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            series_type: ChartSeriesType::Bar,
            currency_symbol: currency_symbol.into(),
            currency_id: Some(currency_id),
            background_color: Some(background_color.into()),
            entries: ChartEntries::new(),
        }
    }
}

/// Ordered collection of chart series; the unit of report output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ChartDataset {
    pub series: Vec<ChartSeries>,
}

impl ChartDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter()
    }
}
