//! In-memory storage implementation for available budgets.

mod repository;

pub use repository::AvailableBudgetRepository;
