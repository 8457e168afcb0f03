use moneta_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use moneta_core::errors::{RepositoryError, Result};

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory account store keyed by account id.
#[derive(Default)]
pub struct AccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
    // Insertion order, so listings are stable across calls.
    order: RwLock<Vec<String>>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let id = new_account
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;
        if accounts.contains_key(&id) {
            return Err(RepositoryError::UniqueViolation(format!("account {}", id)).into());
        }

        let now = Utc::now().naive_utc();
        let account = Account {
            id: id.clone(),
            name: new_account.name,
            currency: new_account.currency,
            is_active: new_account.is_active,
            created_at: now,
            updated_at: now,
            meta: new_account.meta,
        };
        accounts.insert(id.clone(), account.clone());
        self.order
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .push(id);
        Ok(account)
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        let id = account_update
            .id
            .clone()
            .ok_or_else(|| RepositoryError::QueryFailed("missing account id".to_string()))?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("account {}", id)))?;

        account.name = account_update.name;
        account.is_active = account_update.is_active;
        account.meta = account_update.meta;
        account.updated_at = Utc::now().naive_utc();
        Ok(account.clone())
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let removed = self
            .accounts
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .remove(account_id);
        self.order
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .retain(|id| id != account_id);
        Ok(usize::from(removed.is_some()))
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.accounts
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .get(account_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("account {}", account_id)).into())
    }

    fn list(
        &self,
        is_active_filter: Option<bool>,
        account_ids: Option<&[String]>,
    ) -> Result<Vec<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;
        let order = self
            .order
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;

        Ok(order
            .iter()
            .filter_map(|id| accounts.get(id))
            .filter(|account| is_active_filter.is_none_or(|active| account.is_active == active))
            .filter(|account| account_ids.is_none_or(|ids| ids.contains(&account.id)))
            .cloned()
            .collect())
    }
}
