//! Journal collector trait.

use chrono::NaiveDate;

use super::journals_model::FlowRecord;
use crate::errors::Result;

/// Trait defining the contract for collecting journal entries.
///
/// Implementations return every flow record dated within `[start, end]`
/// that touches one of the given accounts as source or destination.
pub trait JournalRepositoryTrait: Send + Sync {
    fn get_extracted_journals(
        &self,
        account_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<FlowRecord>>;
}
