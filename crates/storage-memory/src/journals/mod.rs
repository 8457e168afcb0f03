//! In-memory storage implementation for transaction journals.

mod repository;

pub use repository::JournalRepository;
