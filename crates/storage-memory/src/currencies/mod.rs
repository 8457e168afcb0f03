//! In-memory storage implementation for currency reference data.

mod repository;

pub use repository::CurrencyRepository;
