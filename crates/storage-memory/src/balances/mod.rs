//! In-memory storage implementation for account balance snapshots.

mod model;
mod repository;

pub use model::BalanceSnapshot;
pub use repository::BalanceRepository;
