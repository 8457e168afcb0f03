//! Cache module - read-through chart cache keyed by request parameters.

mod cache_model;
mod cache_service;
mod cache_traits;

pub use cache_model::CacheKey;
pub use cache_service::MemoryChartCache;
pub use cache_traits::ChartCacheTrait;
