use moneta_core::currencies::{Currency, CurrencyRepositoryTrait};
use moneta_core::errors::{RepositoryError, Result};

/// Fixed currency table.
///
/// Currencies are reference data; the set is fixed at construction time
/// and never mutated, so no locking is needed.
pub struct CurrencyRepository {
    currencies: Vec<Currency>,
}

impl CurrencyRepository {
    /// Creates a repository seeded with the default currency set.
    pub fn new() -> Self {
        Self::with_currencies(vec![
            Currency::new(1, "EUR", "Euro", "€", 2),
            Currency::new(2, "USD", "US Dollar", "$", 2),
            Currency::new(3, "GBP", "British Pound", "£", 2),
            Currency::new(4, "HUF", "Hungarian Forint", "Ft", 2),
        ])
    }

    pub fn with_currencies(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }
}

impl Default for CurrencyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyRepositoryTrait for CurrencyRepository {
    fn get_by_id(&self, currency_id: i64) -> Result<Currency> {
        self.currencies
            .iter()
            .find(|c| c.id == currency_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("currency {}", currency_id)).into())
    }

    fn get_by_code(&self, code: &str) -> Result<Currency> {
        self.currencies
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("currency {}", code)).into())
    }

    fn list(&self) -> Result<Vec<Currency>> {
        Ok(self.currencies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_code() {
        let repo = CurrencyRepository::new();
        assert_eq!(repo.get_by_id(1).unwrap().code, "EUR");
        assert_eq!(repo.get_by_code("USD").unwrap().id, 2);
        assert!(repo.get_by_code("XXX").is_err());
    }

    #[test]
    fn test_default_seed_has_four_currencies() {
        assert_eq!(CurrencyRepository::new().list().unwrap().len(), 4);
    }
}
