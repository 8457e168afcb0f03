//! Operations report service implementation.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::sync::Arc;

use super::operations_traits::OperationsReportTrait;
use crate::accounts::Account;
use crate::cache::{CacheKey, ChartCacheTrait};
use crate::charts::{ChartDataset, ChartSeries};
use crate::constants::{EARNED_BAR_COLOR, SPENT_BAR_COLOR};
use crate::currencies::Currency;
use crate::errors::Result;
use crate::journals::{JournalRepositoryTrait, TransactionKind};
use crate::periods::{PeriodFormat, PeriodFormatterTrait};

/// Running sums for one (currency, period) bucket.
#[derive(Debug, Default, Clone)]
struct FlowTotals {
    earned: Decimal,
    spent: Decimal,
}

/// Service assembling the operations report chart.
pub struct OperationsReportService {
    journal_repository: Arc<dyn JournalRepositoryTrait>,
    periods: Arc<dyn PeriodFormatterTrait>,
    cache: Arc<dyn ChartCacheTrait>,
}

impl OperationsReportService {
    /// Creates a new OperationsReportService instance.
    pub fn new(
        journal_repository: Arc<dyn JournalRepositoryTrait>,
        periods: Arc<dyn PeriodFormatterTrait>,
        cache: Arc<dyn ChartCacheTrait>,
    ) -> Self {
        Self {
            journal_repository,
            periods,
            cache,
        }
    }

    fn cache_key(account_ids: &[String], start: NaiveDate, end: NaiveDate) -> CacheKey {
        CacheKey::builder()
            .property("chart.report.operations")
            .property(start)
            .property(account_ids.join(","))
            .property(end)
            .build()
    }

    /// Display rounding, applied only when a bucket is materialized.
    ///
    /// Rescaling afterwards pads "0" out to "0.00" for a two-place currency.
    fn round_display(value: Decimal, decimal_places: u32) -> Decimal {
        let mut rounded =
            value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(decimal_places);
        rounded
    }
}

impl OperationsReportTrait for OperationsReportService {
    fn operations_series(
        &self,
        accounts: &[Account],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartDataset> {
        let account_ids: Vec<String> = accounts.iter().map(|a| a.id.clone()).collect();

        let key = Self::cache_key(&account_ids, start, end);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        debug!("Going to do operations for accounts {:?}", account_ids);
        let format = self.periods.preferred_format(start, end);

        // Journals for the entire period in one collector call.
        let journals = self
            .journal_repository
            .get_extracted_journals(&account_ids, start, end)?;

        // Phase 1: accumulate per currency and period at full precision.
        let mut totals: HashMap<(i64, String), FlowTotals> = HashMap::new();
        let mut currencies: HashMap<i64, Currency> = HashMap::new();
        let mut order: Vec<i64> = Vec::new();

        for journal in journals {
            let currency_id = journal.currency.id;
            if !currencies.contains_key(&currency_id) {
                currencies.insert(currency_id, journal.currency.clone());
                order.push(currency_id);
            }

            let period = self.periods.period_key(journal.date, format);
            let bucket = totals.entry((currency_id, period)).or_default();

            // Deposits earn; transfers earn when the money arrives in one
            // of the requested accounts. Everything else is spending.
            let earned = journal.kind == TransactionKind::Deposit
                || (journal.kind == TransactionKind::Transfer
                    && account_ids.contains(&journal.destination_account_id));

            let amount = journal.amount.abs();
            if earned {
                bucket.earned += amount;
            } else {
                bucket.spent += amount;
            }
        }

        // Phase 2: materialize an earned and a spent bar series per currency,
        // walking month periods from start through end inclusive.
        let mut dataset = ChartDataset::new();
        for currency_id in order {
            let currency = &currencies[&currency_id];
            let mut income = ChartSeries::bar(
                format!("Earned in {}", currency.name),
                &currency.symbol,
                currency_id,
                EARNED_BAR_COLOR,
            );
            let mut expense = ChartSeries::bar(
                format!("Spent in {}", currency.name),
                &currency.symbol,
                currency_id,
                SPENT_BAR_COLOR,
            );

            let mut cursor = start;
            while cursor <= end {
                let period = self.periods.period_key(cursor, format);
                let title = self.periods.period_title(cursor, format);
                let bucket = totals.get(&(currency_id, period));

                let earned = bucket.map(|b| b.earned).unwrap_or_default();
                let spent = bucket.map(|b| b.spent).unwrap_or_default();
                income
                    .entries
                    .insert(title.clone(), Self::round_display(earned, currency.decimal_places));
                expense
                    .entries
                    .insert(title, Self::round_display(spent, currency.decimal_places));

                cursor = self.periods.add_period(cursor, PeriodFormat::Month);
            }

            dataset.push(income);
            dataset.push(expense);
        }

        self.cache.store(key, dataset.clone());
        Ok(dataset)
    }
}
