//! Net worth report service implementation.

use chrono::{Days, NaiveDate};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::net_worth_traits::{NetWorthProviderTrait, NetWorthReportTrait};
use crate::accounts::{net_worth_inclusion, Account};
use crate::cache::{CacheKey, ChartCacheTrait};
use crate::charts::{ChartDataset, ChartSeries};
use crate::constants::NET_WORTH_SAMPLE_INTERVAL_DAYS;
use crate::errors::Result;
use crate::periods::PeriodFormatterTrait;

/// Service assembling the net worth report chart.
pub struct NetWorthReportService {
    provider: Arc<dyn NetWorthProviderTrait>,
    periods: Arc<dyn PeriodFormatterTrait>,
    cache: Arc<dyn ChartCacheTrait>,
}

impl NetWorthReportService {
    /// Creates a new NetWorthReportService instance.
    pub fn new(
        provider: Arc<dyn NetWorthProviderTrait>,
        periods: Arc<dyn PeriodFormatterTrait>,
        cache: Arc<dyn ChartCacheTrait>,
    ) -> Self {
        Self {
            provider,
            periods,
            cache,
        }
    }

    fn cache_key(accounts: &[Account], start: NaiveDate, end: NaiveDate) -> CacheKey {
        let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
        CacheKey::builder()
            .property("chart.report.net-worth")
            .property(start)
            .property(ids.join(","))
            .property(end)
            .build()
    }
}

impl NetWorthReportTrait for NetWorthReportService {
    fn net_worth_series(
        &self,
        accounts: &[Account],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartDataset> {
        let key = Self::cache_key(accounts, start, end);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        // Filter accounts on having the preference for being included.
        let filtered_ids: Vec<String> = accounts
            .iter()
            .filter(|account| {
                let included = net_worth_inclusion(account).is_included();
                if !included {
                    debug!("Will not include \"{}\" in net worth charts.", account.name);
                }
                included
            })
            .map(|account| account.id.clone())
            .collect();

        // One series per currency, keyed by currency id, flattened in the
        // order currencies are first encountered.
        let mut order: Vec<i64> = Vec::new();
        let mut series_by_currency: HashMap<i64, ChartSeries> = HashMap::new();

        let mut cursor = start;
        while cursor < end {
            // Balances by date, grouped by currency.
            let balances = self.provider.net_worth_by_currency(&filtered_ids, cursor)?;

            for item in balances {
                let label = self.periods.month_and_day(cursor);
                let currency_id = item.currency.id;
                let series = series_by_currency.entry(currency_id).or_insert_with(|| {
                    order.push(currency_id);
                    ChartSeries::line(
                        format!("Net worth in {}", item.currency.name),
                        &item.currency.symbol,
                    )
                });
                // Duplicate labels overwrite in place (last write wins).
                series.entries.insert(label, item.balance);
            }

            cursor = cursor + Days::new(NET_WORTH_SAMPLE_INTERVAL_DAYS as u64);
        }

        let mut dataset = ChartDataset::new();
        for currency_id in order {
            if let Some(series) = series_by_currency.remove(&currency_id) {
                dataset.push(series);
            }
        }

        self.cache.store(key, dataset.clone());
        Ok(dataset)
    }
}
