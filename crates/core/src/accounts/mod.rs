//! Accounts module - domain models, services, and traits.

mod accounts_model;
mod accounts_service;
mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{
    net_worth_inclusion, set_net_worth_inclusion, Account, AccountUpdate, NetWorthInclusion,
    NewAccount,
};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
