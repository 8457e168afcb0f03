//! Cache key model.

use sha2::{Digest, Sha256};

/// Key identifying one cached chart payload.
///
/// Built from the full request parameter tuple (operation name, account
/// ids, date range) so two requests share a cache slot only when every
/// property matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn builder() -> CacheKeyBuilder {
        CacheKeyBuilder {
            properties: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Accumulates string properties and hashes them into a [`CacheKey`].
#[derive(Debug)]
pub struct CacheKeyBuilder {
    properties: Vec<String>,
}

impl CacheKeyBuilder {
    pub fn property(mut self, value: impl ToString) -> Self {
        self.properties.push(value.to_string());
        self
    }

    pub fn properties<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.properties
            .extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    pub fn build(self) -> CacheKey {
        let mut hasher = Sha256::new();
        for property in &self.properties {
            hasher.update(property.as_bytes());
            // separator prevents ["ab","c"] colliding with ["a","bc"]
            hasher.update([0u8]);
        }
        CacheKey(hex::encode(hasher.finalize()))
    }
}
