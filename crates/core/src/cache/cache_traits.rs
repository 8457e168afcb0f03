//! Chart cache trait.

use super::cache_model::CacheKey;
use crate::charts::ChartDataset;

/// Trait defining the contract for the chart payload cache.
///
/// Writes are idempotent: the same key always maps to the same payload,
/// so a miss simply recomputes and overwrites without coordination.
pub trait ChartCacheTrait: Send + Sync {
    fn has(&self, key: &CacheKey) -> bool;

    fn get(&self, key: &CacheKey) -> Option<ChartDataset>;

    fn store(&self, key: CacheKey, dataset: ChartDataset);
}
