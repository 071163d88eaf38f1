//! Locally persisted per-product ratings.
//!
//! Ratings are a pure incremental-mean accumulator: each submission folds
//! into a running average and a count, with no record of individual samples.
//! Nothing enforces per-user uniqueness; every submission counts.

use std::collections::BTreeMap;

use mercadito_core::ProductId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::storage::{KeyedRecordStore, StorageBackend, StorageError};

/// Storage key for the ratings collection.
const KEY: &str = "ratings:v1";

/// Aggregate rating for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RatingEntry {
    /// Running mean of all submitted stars, kept to two decimal places.
    #[serde(rename = "avg")]
    pub average: Decimal,
    pub count: u32,
}

/// Per-product ratings persisted under the `ratings:v1` key as a map from
/// product id string to [`RatingEntry`].
pub struct RatingStore<B> {
    store: KeyedRecordStore<B>,
}

type RatingMap = BTreeMap<String, RatingEntry>;

impl<B: StorageBackend> RatingStore<B> {
    /// Bind the ratings collection to a storage backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            store: KeyedRecordStore::new(backend, KEY),
        }
    }

    /// Aggregate for `id`; the zero entry when never rated.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> RatingEntry {
        self.store
            .read::<RatingMap>()
            .get(id.as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Fold one submission into the running mean and return the updated
    /// aggregate. `stars` is clamped to 1..=5.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails; the stored aggregate is
    /// unchanged in that case.
    pub fn submit(&self, id: &ProductId, stars: u8) -> Result<RatingEntry, StorageError> {
        let stars = stars.clamp(1, 5);
        let mut ratings: RatingMap = self.store.read();
        let prior = ratings.get(id.as_str()).copied().unwrap_or_default();

        let count = prior.count + 1;
        let total = prior.average * Decimal::from(prior.count) + Decimal::from(stars);
        let entry = RatingEntry {
            average: (total / Decimal::from(count))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            count,
        };

        ratings.insert(id.as_str().to_string(), entry);
        self.store.write(&ratings)?;
        Ok(entry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ratings() -> RatingStore<MemoryStore> {
        RatingStore::new(MemoryStore::new())
    }

    #[test]
    fn test_unrated_product_is_zero_entry() {
        let ratings = ratings();
        assert_eq!(ratings.get(&ProductId::from("1")), RatingEntry::default());
    }

    #[test]
    fn test_running_mean() {
        let ratings = ratings();
        let id = ProductId::from("1");

        let entry = ratings.submit(&id, 5).unwrap();
        assert_eq!(entry.average, Decimal::from(5));
        assert_eq!(entry.count, 1);

        let entry = ratings.submit(&id, 3).unwrap();
        assert_eq!(entry.average, Decimal::from(4));
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        let ratings = ratings();
        let id = ProductId::from("1");
        ratings.submit(&id, 5).unwrap();
        ratings.submit(&id, 4).unwrap();
        let entry = ratings.submit(&id, 4).unwrap();
        // (5 + 4 + 4) / 3 = 4.333...
        assert_eq!(entry.average, Decimal::new(433, 2));
    }

    #[test]
    fn test_stars_clamp_to_valid_range() {
        let ratings = ratings();
        let low = ratings.submit(&ProductId::from("1"), 0).unwrap();
        assert_eq!(low.average, Decimal::from(1));
        let high = ratings.submit(&ProductId::from("2"), 9).unwrap();
        assert_eq!(high.average, Decimal::from(5));
    }

    #[test]
    fn test_products_rate_independently() {
        let ratings = ratings();
        ratings.submit(&ProductId::from("1"), 5).unwrap();
        ratings.submit(&ProductId::from("2"), 1).unwrap();
        assert_eq!(ratings.get(&ProductId::from("1")).average, Decimal::from(5));
        assert_eq!(ratings.get(&ProductId::from("2")).average, Decimal::from(1));
    }

    #[test]
    fn test_wire_field_is_avg() {
        let entry = RatingEntry {
            average: Decimal::new(450, 2),
            count: 2,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.get("avg").is_some());
        assert!(json.get("average").is_none());
    }
}
