use moneta_core::budgets::{AvailableBudget, AvailableBudgetRepositoryTrait};
use moneta_core::currencies::Currency;
use moneta_core::errors::{RepositoryError, Result};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

/// In-memory available budget store with sequential ids.
pub struct AvailableBudgetRepository {
    budgets: RwLock<BTreeMap<i64, AvailableBudget>>,
    next_id: AtomicI64,
}

impl AvailableBudgetRepository {
    pub fn new() -> Self {
        Self {
            budgets: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for AvailableBudgetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailableBudgetRepositoryTrait for AvailableBudgetRepository {
    async fn create(
        &self,
        currency: Currency,
        amount: Decimal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AvailableBudget> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().naive_utc();
        let budget = AvailableBudget {
            id,
            currency,
            amount,
            start,
            end,
            created_at: now,
            updated_at: now,
        };
        self.budgets
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .insert(id, budget.clone());
        Ok(budget)
    }

    async fn update(&self, budget: AvailableBudget) -> Result<AvailableBudget> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;
        if !budgets.contains_key(&budget.id) {
            return Err(RepositoryError::NotFound(format!("available budget {}", budget.id)).into());
        }
        budgets.insert(budget.id, budget.clone());
        Ok(budget)
    }

    async fn delete(&self, budget_id: i64) -> Result<usize> {
        let removed = self
            .budgets
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .remove(&budget_id);
        Ok(usize::from(removed.is_some()))
    }

    fn get_by_id(&self, budget_id: i64) -> Result<AvailableBudget> {
        self.budgets
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .get(&budget_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("available budget {}", budget_id)).into()
            })
    }

    fn list(&self) -> Result<Vec<AvailableBudget>> {
        Ok(self
            .budgets
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .values()
            .cloned()
            .collect())
    }
}
