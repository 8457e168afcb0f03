use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use moneta_core::accounts::{AccountService, AccountServiceTrait, NewAccount};
use moneta_core::budgets::{AvailableBudgetService, AvailableBudgetServiceTrait, NewAvailableBudget};
use moneta_core::cache::MemoryChartCache;
use moneta_core::currencies::CurrencyRepositoryTrait;
use moneta_core::journals::{FlowRecord, TransactionKind};
use moneta_core::periods::PeriodService;
use moneta_core::reports::{
    NetWorthReportService, NetWorthReportTrait, OperationsReportService, OperationsReportTrait,
};
use moneta_storage_memory::{
    AccountRepository, AvailableBudgetRepository, BalanceRepository, BalanceSnapshot,
    CurrencyRepository, JournalRepository,
};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub budget_service: Arc<dyn AvailableBudgetServiceTrait>,
    pub net_worth_report: Arc<dyn NetWorthReportTrait>,
    pub operations_report: Arc<dyn OperationsReportTrait>,
    pub currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    pub journal_repository: Arc<JournalRepository>,
    pub balance_repository: Arc<BalanceRepository>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MONETA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires repositories and services and seeds the demo ledger.
pub async fn build_state() -> anyhow::Result<Arc<AppState>> {
    let account_repository = Arc::new(AccountRepository::new());
    let currency_repository = Arc::new(CurrencyRepository::new());
    let journal_repository = Arc::new(JournalRepository::new());
    let balance_repository = Arc::new(BalanceRepository::new());
    let budget_repository = Arc::new(AvailableBudgetRepository::new());
    let chart_cache = Arc::new(MemoryChartCache::new());
    let periods = Arc::new(PeriodService::new());

    let account_service = Arc::new(AccountService::new(account_repository));
    let budget_service = Arc::new(AvailableBudgetService::new(
        budget_repository,
        currency_repository.clone(),
    ));
    let net_worth_report = Arc::new(NetWorthReportService::new(
        balance_repository.clone(),
        periods.clone(),
        chart_cache.clone(),
    ));
    let operations_report = Arc::new(OperationsReportService::new(
        journal_repository.clone(),
        periods,
        chart_cache,
    ));

    let state = Arc::new(AppState {
        account_service,
        budget_service,
        net_worth_report,
        operations_report,
        currency_repository,
        journal_repository,
        balance_repository,
    });
    seed_demo_ledger(&state).await?;
    Ok(state)
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Seeds a small fixed ledger so the API is usable out of the box.
///
/// The in-memory backend starts empty on every boot; without a seed every
/// chart would be blank until data is loaded over the API.
async fn seed_demo_ledger(state: &Arc<AppState>) -> anyhow::Result<()> {
    let eur = state.currency_repository.get_by_code("EUR")?;
    let usd = state.currency_repository.get_by_code("USD")?;

    state
        .account_service
        .create_account(NewAccount {
            id: Some("1".to_string()),
            name: "Checking".to_string(),
            currency: "EUR".to_string(),
            is_active: true,
            meta: None,
        })
        .await?;
    state
        .account_service
        .create_account(NewAccount {
            id: Some("2".to_string()),
            name: "Savings".to_string(),
            currency: "EUR".to_string(),
            is_active: true,
            meta: Some(r#"{"includeNetWorth":"INCLUDED"}"#.to_string()),
        })
        .await?;
    state
        .account_service
        .create_account(NewAccount {
            id: Some("3".to_string()),
            name: "Shared household".to_string(),
            currency: "EUR".to_string(),
            is_active: true,
            meta: Some(r#"{"includeNetWorth":"EXCLUDED"}"#.to_string()),
        })
        .await?;

    state.balance_repository.add_all(vec![
        BalanceSnapshot {
            account_id: "1".to_string(),
            date: d(2021, 1, 1),
            currency: eur.clone(),
            balance: amount(10_000),
        },
        BalanceSnapshot {
            account_id: "1".to_string(),
            date: d(2021, 1, 8),
            currency: eur.clone(),
            balance: amount(15_000),
        },
        BalanceSnapshot {
            account_id: "2".to_string(),
            date: d(2021, 1, 1),
            currency: usd.clone(),
            balance: amount(50_000),
        },
        BalanceSnapshot {
            account_id: "3".to_string(),
            date: d(2021, 1, 1),
            currency: eur.clone(),
            balance: amount(99_900),
        },
    ])?;

    state.journal_repository.add_all(vec![
        FlowRecord {
            date: d(2021, 3, 10),
            currency: eur.clone(),
            kind: TransactionKind::Deposit,
            source_account_id: "employer".to_string(),
            destination_account_id: "1".to_string(),
            amount: amount(5_000),
        },
        FlowRecord {
            date: d(2021, 3, 15),
            currency: eur.clone(),
            kind: TransactionKind::Withdrawal,
            source_account_id: "1".to_string(),
            destination_account_id: "groceries".to_string(),
            amount: amount(2_000),
        },
        FlowRecord {
            date: d(2021, 4, 2),
            currency: eur,
            kind: TransactionKind::Transfer,
            source_account_id: "1".to_string(),
            destination_account_id: "2".to_string(),
            amount: amount(3_000),
        },
    ])?;

    state
        .budget_service
        .create_available_budget(NewAvailableBudget {
            currency_id: None,
            currency_code: Some("EUR".to_string()),
            amount: amount(100_000),
            start: d(2021, 1, 1),
            end: d(2021, 1, 31),
        })
        .await?;

    Ok(())
}
