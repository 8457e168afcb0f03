use moneta_core::errors::{RepositoryError, Result};
use moneta_core::journals::{FlowRecord, JournalRepositoryTrait};

use chrono::NaiveDate;
use std::sync::RwLock;

/// In-memory journal store.
///
/// Records are append-only; the reporting layer never mutates them.
#[derive(Default)]
pub struct JournalRepository {
    records: RwLock<Vec<FlowRecord>>,
}

impl JournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a journal record.
    pub fn add(&self, record: FlowRecord) -> Result<()> {
        self.records
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .push(record);
        Ok(())
    }

    /// Appends a batch of journal records.
    pub fn add_all(&self, records: impl IntoIterator<Item = FlowRecord>) -> Result<()> {
        self.records
            .write()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?
            .extend(records);
        Ok(())
    }
}

impl JournalRepositoryTrait for JournalRepository {
    fn get_extracted_journals(
        &self,
        account_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<FlowRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;

        // A journal is in scope when it falls in the range and touches one
        // of the requested accounts on either side.
        Ok(records
            .iter()
            .filter(|record| record.date >= start && record.date <= end)
            .filter(|record| {
                account_ids.contains(&record.source_account_id)
                    || account_ids.contains(&record.destination_account_id)
            })
            .cloned()
            .collect())
    }
}
