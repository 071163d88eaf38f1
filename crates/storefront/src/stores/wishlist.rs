//! Locally persisted wishlist.

use mercadito_core::{Category, ProductId, ProductRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyedRecordStore, StorageBackend, StorageError};

/// Storage key for the wishlist collection.
const KEY: &str = "wishlist";

/// One saved product, keyed by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Kept in whichever shape the product carried it (bare name or record).
    #[serde(default)]
    pub category: Option<Category>,
}

/// Wishlist persisted under the `wishlist` key.
///
/// Membership is id-based; add and remove are both idempotent.
pub struct WishlistStore<B> {
    store: KeyedRecordStore<B>,
}

impl<B: StorageBackend> WishlistStore<B> {
    /// Bind the wishlist to a storage backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            store: KeyedRecordStore::new(backend, KEY),
        }
    }

    /// Current wishlist contents.
    #[must_use]
    pub fn items(&self) -> Vec<WishlistItem> {
        self.store.read()
    }

    /// Ids of every saved product.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.items().into_iter().map(|item| item.id).collect()
    }

    /// Whether `id` is currently saved.
    #[must_use]
    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.items().iter().any(|item| item.id == *id)
    }

    /// Save `product` unless it is already present. Returns the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn add(&self, product: &ProductRecord) -> Result<Vec<WishlistItem>, StorageError> {
        let mut items = self.items();
        if !items.iter().any(|item| item.id == product.id) {
            items.push(WishlistItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price_or_zero(),
                image_url: product.image_url.clone(),
                category: product.category.clone(),
            });
            self.store.write(&items)?;
        }
        Ok(items)
    }

    /// Drop the entry for `id` if present. Returns the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn remove(&self, id: &ProductId) -> Result<Vec<WishlistItem>, StorageError> {
        let mut items = self.items();
        items.retain(|item| item.id != *id);
        self.store.write(&items)?;
        Ok(items)
    }

    /// Remove `product` when saved, save it when not. Returns the resulting
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn toggle(&self, product: &ProductRecord) -> Result<Vec<WishlistItem>, StorageError> {
        if self.is_wishlisted(&product.id) {
            self.remove(&product.id)
        } else {
            self.add(product)
        }
    }

    /// Replace the wishlist with an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.write(&Vec::<WishlistItem>::new())
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }
}
