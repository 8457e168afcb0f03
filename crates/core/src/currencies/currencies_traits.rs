//! Currency repository trait.

use super::currencies_model::Currency;
use crate::errors::Result;

/// Trait defining the contract for currency reference-data lookups.
///
/// Currencies are read-only to the reporting logic; implementations own
/// whatever seeding or synchronisation is required.
pub trait CurrencyRepositoryTrait: Send + Sync {
    /// Retrieves a currency by its numeric ID.
    fn get_by_id(&self, currency_id: i64) -> Result<Currency>;

    /// Retrieves a currency by its ISO code (e.g. "EUR").
    fn get_by_code(&self, code: &str) -> Result<Currency>;

    /// Lists all known currencies.
    fn list(&self) -> Result<Vec<Currency>>;
}
