//! In-memory storage implementation for Moneta.
//!
//! This crate implements the repository traits defined in `moneta-core`
//! with process-local data structures. It is the only storage backend the
//! server ships with; everything lives behind `RwLock`-guarded collections
//! and disappears when the process exits.
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-memory (this crate)
//!              │
//!              ▼
//!     RwLock'd collections
//! ```

// Repository implementations
pub mod accounts;
pub mod balances;
pub mod budgets;
pub mod currencies;
pub mod journals;

pub use accounts::AccountRepository;
pub use balances::{BalanceRepository, BalanceSnapshot};
pub use budgets::AvailableBudgetRepository;
pub use currencies::CurrencyRepository;
pub use journals::JournalRepository;
