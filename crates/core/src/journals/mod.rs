//! Journals module - transaction flow records and the collector trait.

mod journals_model;
mod journals_traits;

pub use journals_model::{FlowRecord, TransactionKind};
pub use journals_traits::JournalRepositoryTrait;
