//! Unit tests for the operations report service.

use super::*;
use crate::accounts::Account;
use crate::cache::MemoryChartCache;
use crate::charts::{ChartDataset, ChartSeriesType};
use crate::constants::{EARNED_BAR_COLOR, SPENT_BAR_COLOR};
use crate::currencies::Currency;
use crate::errors::{Error, RepositoryError, Result};
use crate::journals::{FlowRecord, JournalRepositoryTrait, TransactionKind};
use crate::periods::PeriodService;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockJournalRepository {
    records: Vec<FlowRecord>,
    calls: AtomicUsize,
}

impl MockJournalRepository {
    fn new(records: Vec<FlowRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl JournalRepositoryTrait for MockJournalRepository {
    fn get_extracted_journals(
        &self,
        account_ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<FlowRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .iter()
            .filter(|record| {
                record.date >= start
                    && record.date <= end
                    && (account_ids.contains(&record.source_account_id)
                        || account_ids.contains(&record.destination_account_id))
            })
            .cloned()
            .collect())
    }
}

struct FailingJournalRepository;

impl JournalRepositoryTrait for FailingJournalRepository {
    fn get_extracted_journals(
        &self,
        _account_ids: &[String],
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<FlowRecord>> {
        Err(Error::Repository(RepositoryError::QueryFailed(
            "journal store unavailable".to_string(),
        )))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn eur() -> Currency {
    Currency::new(1, "EUR", "Euro", "€", 2)
}

fn usd() -> Currency {
    Currency::new(2, "USD", "US Dollar", "$", 2)
}

fn record(
    date: NaiveDate,
    currency: Currency,
    kind: TransactionKind,
    source: &str,
    destination: &str,
    amount: Decimal,
) -> FlowRecord {
    FlowRecord {
        date,
        currency,
        kind,
        source_account_id: source.to_string(),
        destination_account_id: destination.to_string(),
        amount,
    }
}

fn account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        name: format!("Account {}", id),
        currency: "EUR".to_string(),
        is_active: true,
        ..Account::default()
    }
}

fn create_service(repository: Arc<dyn JournalRepositoryTrait>) -> OperationsReportService {
    OperationsReportService::new(
        repository,
        Arc::new(PeriodService::new()),
        Arc::new(MemoryChartCache::new()),
    )
}

fn entry(dataset: &ChartDataset, series: usize, label: &str) -> String {
    dataset.series[series]
        .entries
        .get(label)
        .map(|v| v.to_string())
        .unwrap_or_else(|| panic!("no entry {:?} in series {}", label, series))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_deposit_earns_withdrawal_spends() {
    let repository = Arc::new(MockJournalRepository::new(vec![
        record(d(2021, 3, 10), eur(), TransactionKind::Deposit, "ext", "a", dec!(50.00)),
        record(d(2021, 3, 15), eur(), TransactionKind::Withdrawal, "a", "ext", dec!(20.00)),
    ]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    // A year-long range buckets by month.
    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(dataset.len(), 2);
    let income = &dataset.series[0];
    let expense = &dataset.series[1];
    assert_eq!(income.label, "Earned in Euro");
    assert_eq!(income.series_type, ChartSeriesType::Bar);
    assert_eq!(income.currency_id, Some(1));
    assert_eq!(income.background_color.as_deref(), Some(EARNED_BAR_COLOR));
    assert_eq!(expense.label, "Spent in Euro");
    assert_eq!(expense.background_color.as_deref(), Some(SPENT_BAR_COLOR));

    assert_eq!(entry(&dataset, 0, "March 2021"), "50.00");
    assert_eq!(entry(&dataset, 1, "March 2021"), "20.00");
}

#[test]
fn test_periods_without_activity_default_to_zero() {
    let repository = Arc::new(MockJournalRepository::new(vec![record(
        d(2021, 3, 10),
        eur(),
        TransactionKind::Deposit,
        "ext",
        "a",
        dec!(50.00),
    )]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    // All twelve months appear, padded to the currency's two places.
    assert_eq!(dataset.series[0].entries.len(), 12);
    assert_eq!(entry(&dataset, 0, "January 2021"), "0.00");
    assert_eq!(entry(&dataset, 0, "December 2021"), "0.00");
    assert_eq!(entry(&dataset, 1, "March 2021"), "0.00");
}

#[test]
fn test_transfer_destination_in_set_earns() {
    let repository = Arc::new(MockJournalRepository::new(vec![
        record(d(2021, 3, 5), eur(), TransactionKind::Transfer, "other", "a", dec!(75.00)),
        record(d(2021, 3, 6), eur(), TransactionKind::Transfer, "a", "other", dec!(25.00)),
    ]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(entry(&dataset, 0, "March 2021"), "75.00");
    assert_eq!(entry(&dataset, 1, "March 2021"), "25.00");
}

#[test]
fn test_transfer_between_two_selected_accounts_earns() {
    let repository = Arc::new(MockJournalRepository::new(vec![record(
        d(2021, 3, 5),
        eur(),
        TransactionKind::Transfer,
        "a",
        "b",
        dec!(40.00),
    )]));
    let service = create_service(repository);
    let accounts = vec![account("a"), account("b")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(entry(&dataset, 0, "March 2021"), "40.00");
    assert_eq!(entry(&dataset, 1, "March 2021"), "0.00");
}

#[test]
fn test_negative_amounts_accumulate_as_magnitude() {
    let repository = Arc::new(MockJournalRepository::new(vec![
        record(d(2021, 3, 5), eur(), TransactionKind::Withdrawal, "a", "ext", dec!(-30.00)),
        record(d(2021, 3, 6), eur(), TransactionKind::Withdrawal, "a", "ext", dec!(12.50)),
    ]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(entry(&dataset, 1, "March 2021"), "42.50");
}

#[test]
fn test_rounding_happens_after_accumulation() {
    // Three times 10.005 is 30.015 exactly, which rounds half away from
    // zero to 30.02. Rounding each amount first would give 30.03.
    let repository = Arc::new(MockJournalRepository::new(vec![
        record(d(2021, 3, 1), eur(), TransactionKind::Deposit, "ext", "a", dec!(10.005)),
        record(d(2021, 3, 2), eur(), TransactionKind::Deposit, "ext", "a", dec!(10.005)),
        record(d(2021, 3, 3), eur(), TransactionKind::Deposit, "ext", "a", dec!(10.005)),
    ]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(entry(&dataset, 0, "March 2021"), "30.02");
}

#[test]
fn test_two_currencies_paired_series_in_first_seen_order() {
    let repository = Arc::new(MockJournalRepository::new(vec![
        record(d(2021, 2, 1), usd(), TransactionKind::Deposit, "ext", "a", dec!(5.00)),
        record(d(2021, 3, 1), eur(), TransactionKind::Withdrawal, "a", "ext", dec!(7.00)),
    ]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.series[0].label, "Earned in US Dollar");
    assert_eq!(dataset.series[1].label, "Spent in US Dollar");
    assert_eq!(dataset.series[2].label, "Earned in Euro");
    assert_eq!(dataset.series[3].label, "Spent in Euro");
}

#[test]
fn test_no_journals_yields_empty_dataset() {
    let repository = Arc::new(MockJournalRepository::new(vec![]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert!(dataset.is_empty());
}

#[test]
fn test_second_call_served_from_cache() {
    let repository = Arc::new(MockJournalRepository::new(vec![record(
        d(2021, 3, 10),
        eur(),
        TransactionKind::Deposit,
        "ext",
        "a",
        dec!(50.00),
    )]));
    let service = create_service(repository.clone());
    let accounts = vec![account("a")];

    let first = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();
    assert_eq!(repository.call_count(), 1);
    let second = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    assert_eq!(repository.call_count(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_repository_failure_propagates() {
    let service = create_service(Arc::new(FailingJournalRepository));
    let accounts = vec![account("a")];

    let result = service.operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31));
    assert!(result.is_err());
}

#[test]
fn test_json_shape_matches_chart_contract() {
    let repository = Arc::new(MockJournalRepository::new(vec![record(
        d(2021, 3, 10),
        eur(),
        TransactionKind::Deposit,
        "ext",
        "a",
        dec!(50.00),
    )]));
    let service = create_service(repository);
    let accounts = vec![account("a")];

    let dataset = service
        .operations_series(&accounts, d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();

    let json = serde_json::to_value(&dataset).unwrap();
    assert_eq!(json[0]["type"], "bar");
    assert_eq!(json[0]["currency_id"], 1);
    assert_eq!(json[0]["backgroundColor"], EARNED_BAR_COLOR);
    assert_eq!(json[0]["entries"]["March 2021"], "50.00");
    assert_eq!(json[1]["entries"]["March 2021"], "0.00");
}
