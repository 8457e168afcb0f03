//! Available budget repository and service traits.

use async_trait::async_trait;

use super::budgets_model::{AvailableBudget, AvailableBudgetUpdate, NewAvailableBudget};
use crate::currencies::Currency;
use crate::errors::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait defining the contract for available budget repository operations.
#[async_trait]
pub trait AvailableBudgetRepositoryTrait: Send + Sync {
    /// Persists a new available budget and returns it with its assigned id.
    async fn create(
        &self,
        currency: Currency,
        amount: Decimal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AvailableBudget>;

    /// Persists the given record, replacing the stored one with the same id.
    async fn update(&self, budget: AvailableBudget) -> Result<AvailableBudget>;

    /// Deletes an available budget by its id.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, budget_id: i64) -> Result<usize>;

    /// Retrieves an available budget by its id.
    fn get_by_id(&self, budget_id: i64) -> Result<AvailableBudget>;

    /// Lists all available budgets ordered by id.
    fn list(&self) -> Result<Vec<AvailableBudget>>;
}

/// Trait defining the contract for available budget service operations.
#[async_trait]
pub trait AvailableBudgetServiceTrait: Send + Sync {
    /// Creates a new available budget with business validation.
    async fn create_available_budget(
        &self,
        new_budget: NewAvailableBudget,
    ) -> Result<AvailableBudget>;

    /// Applies a partial update to an existing available budget.
    async fn update_available_budget(
        &self,
        budget_id: i64,
        update: AvailableBudgetUpdate,
    ) -> Result<AvailableBudget>;

    /// Deletes an available budget.
    async fn delete_available_budget(&self, budget_id: i64) -> Result<()>;

    /// Retrieves an available budget by id.
    fn get_available_budget(&self, budget_id: i64) -> Result<AvailableBudget>;

    /// Lists all available budgets.
    fn list_available_budgets(&self) -> Result<Vec<AvailableBudget>>;
}
