use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::budgets_model::{AvailableBudget, AvailableBudgetUpdate, NewAvailableBudget};
use super::budgets_traits::{AvailableBudgetRepositoryTrait, AvailableBudgetServiceTrait};
use crate::currencies::{Currency, CurrencyRepositoryTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing available budgets.
pub struct AvailableBudgetService {
    repository: Arc<dyn AvailableBudgetRepositoryTrait>,
    currencies: Arc<dyn CurrencyRepositoryTrait>,
}

impl AvailableBudgetService {
    /// Creates a new AvailableBudgetService instance.
    pub fn new(
        repository: Arc<dyn AvailableBudgetRepositoryTrait>,
        currencies: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            currencies,
        }
    }

    /// Resolves a currency from an optional id and code, id winning when
    /// both are present.
    fn resolve_currency(
        &self,
        currency_id: Option<i64>,
        currency_code: Option<&str>,
    ) -> Result<Currency> {
        if let Some(id) = currency_id {
            return self
                .currencies
                .get_by_id(id)
                .map_err(|_| Error::UnknownCurrency(id.to_string()));
        }
        if let Some(code) = currency_code {
            return self
                .currencies
                .get_by_code(code)
                .map_err(|_| Error::UnknownCurrency(code.to_string()));
        }
        Err(Error::Validation(ValidationError::MissingField(
            "currency_id or currency_code".to_string(),
        )))
    }
}

#[async_trait::async_trait]
impl AvailableBudgetServiceTrait for AvailableBudgetService {
    async fn create_available_budget(
        &self,
        new_budget: NewAvailableBudget,
    ) -> Result<AvailableBudget> {
        new_budget.validate()?;
        let currency =
            self.resolve_currency(new_budget.currency_id, new_budget.currency_code.as_deref())?;
        debug!(
            "Creating available budget of {} {} from {} to {}",
            new_budget.amount, currency.code, new_budget.start, new_budget.end
        );
        self.repository
            .create(currency, new_budget.amount, new_budget.start, new_budget.end)
            .await
    }

    async fn update_available_budget(
        &self,
        budget_id: i64,
        update: AvailableBudgetUpdate,
    ) -> Result<AvailableBudget> {
        update.validate()?;
        let mut budget = self.repository.get_by_id(budget_id)?;

        if update.currency_id.is_some() || update.currency_code.is_some() {
            budget.currency =
                self.resolve_currency(update.currency_id, update.currency_code.as_deref())?;
        }
        if let Some(amount) = update.amount {
            budget.amount = amount;
        }
        if let Some(start) = update.start {
            budget.start = start;
        }
        if let Some(end) = update.end {
            budget.end = end;
        }
        if budget.start > budget.end {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Start date must be on or before end date".to_string(),
            )));
        }
        budget.updated_at = Utc::now().naive_utc();

        self.repository.update(budget).await
    }

    async fn delete_available_budget(&self, budget_id: i64) -> Result<()> {
        self.repository.delete(budget_id).await?;
        Ok(())
    }

    fn get_available_budget(&self, budget_id: i64) -> Result<AvailableBudget> {
        self.repository.get_by_id(budget_id)
    }

    fn list_available_budgets(&self) -> Result<Vec<AvailableBudget>> {
        self.repository.list()
    }
}
