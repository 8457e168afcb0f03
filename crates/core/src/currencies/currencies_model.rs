//! Currency domain model.

use serde::{Deserialize, Serialize};

/// Read-only reference data describing one transaction currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: i64,
    /// ISO code, e.g. "EUR"
    pub code: String,
    /// Display name, e.g. "Euro"
    pub name: String,
    /// Display symbol, e.g. "€"
    pub symbol: String,
    /// Number of decimal places used when rendering amounts
    pub decimal_places: u32,
}

impl Currency {
    pub fn new(id: i64, code: &str, name: &str, symbol: &str, decimal_places: u32) -> Self {
        Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimal_places,
        }
    }
}
