//! In-memory chart cache implementation.

use dashmap::DashMap;

use super::cache_model::CacheKey;
use super::cache_traits::ChartCacheTrait;
use crate::charts::ChartDataset;

/// Process-local chart cache backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryChartCache {
    entries: DashMap<CacheKey, ChartDataset>,
}

impl MemoryChartCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached payload.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl ChartCacheTrait for MemoryChartCache {
    fn has(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &CacheKey) -> Option<ChartDataset> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    fn store(&self, key: CacheKey, dataset: ChartDataset) {
        self.entries.insert(key, dataset);
    }
}
