//! Net worth report domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;

/// Net balance in one currency at a point in time.
///
/// Produced transiently per sample date; never persisted by this logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    pub currency: Currency,
    pub balance: Decimal,
}
