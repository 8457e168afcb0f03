use moneta_core::currencies::Currency;
use moneta_core::errors::{RepositoryError, Result};
use moneta_core::reports::{CurrencyBalance, NetWorthProviderTrait};

use super::model::BalanceSnapshot;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory balance snapshot store.
#[derive(Default)]
pub struct BalanceRepository {
    snapshots: RwLock<Vec<BalanceSnapshot>>,
}

impl BalanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a balance snapshot.
    pub fn add(&self, snapshot: BalanceSnapshot) -> Result<()> {
        self.snapshots
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .push(snapshot);
        Ok(())
    }

    /// Records a batch of balance snapshots.
    pub fn add_all(&self, snapshots: impl IntoIterator<Item = BalanceSnapshot>) -> Result<()> {
        self.snapshots
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .extend(snapshots);
        Ok(())
    }
}

impl NetWorthProviderTrait for BalanceRepository {
    fn net_worth_by_currency(
        &self,
        account_ids: &[String],
        as_of: NaiveDate,
    ) -> Result<Vec<CurrencyBalance>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;

        // Most recent snapshot on or before `as_of`, per account.
        let mut latest: HashMap<&str, &BalanceSnapshot> = HashMap::new();
        for snapshot in snapshots.iter() {
            if snapshot.date > as_of || !account_ids.contains(&snapshot.account_id) {
                continue;
            }
            match latest.get(snapshot.account_id.as_str()) {
                Some(current) if current.date >= snapshot.date => {}
                _ => {
                    latest.insert(snapshot.account_id.as_str(), snapshot);
                }
            }
        }

        // Sum per currency, keeping currencies in account-list order.
        let mut order: Vec<i64> = Vec::new();
        let mut currencies: HashMap<i64, Currency> = HashMap::new();
        let mut totals: HashMap<i64, rust_decimal::Decimal> = HashMap::new();
        for account_id in account_ids {
            let Some(snapshot) = latest.get(account_id.as_str()) else {
                continue;
            };
            let currency_id = snapshot.currency.id;
            if !currencies.contains_key(&currency_id) {
                currencies.insert(currency_id, snapshot.currency.clone());
                order.push(currency_id);
            }
            *totals.entry(currency_id).or_default() += snapshot.balance;
        }

        Ok(order
            .into_iter()
            .map(|currency_id| CurrencyBalance {
                currency: currencies[&currency_id].clone(),
                balance: totals[&currency_id],
            })
            .collect())
    }
}
