//! Locally persisted shopping cart.

use mercadito_core::{ProductId, ProductRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyedRecordStore, StorageBackend, StorageError};

/// Storage key for the cart collection.
const KEY: &str = "cart";

/// One line in the cart, keyed by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
}

/// Totals over the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub total_items: u64,
}

/// Shopping cart persisted under the `cart` key.
///
/// Every operation is one read-modify-write over the full snapshot. The cart
/// enforces no stock ceiling; callers clamp against availability before
/// adding. Ids match on their normalized string form, so a numeric id from
/// the API finds a line stored with a string id.
pub struct CartStore<B> {
    store: KeyedRecordStore<B>,
}

impl<B: StorageBackend> CartStore<B> {
    /// Bind the cart to a storage backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            store: KeyedRecordStore::new(backend, KEY),
        }
    }

    /// Current cart contents.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.store.read()
    }

    /// Add `quantity` of `product`, merging into the existing line when the
    /// id is already present. Returns the updated collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails; the stored cart is
    /// unchanged in that case.
    pub fn add(
        &self,
        product: &ProductRecord,
        quantity: u32,
    ) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += quantity;
        } else {
            items.push(CartItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price_or_zero(),
                image_url: product.image_url.clone(),
                quantity,
            });
        }
        self.store.write(&items)?;
        Ok(items)
    }

    /// Set the line for `id` to `max(1, round(quantity))`; no-op when the id
    /// is absent. Returns the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn update_quantity(
        &self,
        id: &ProductId,
        quantity: f64,
    ) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
            item.quantity = clamp_quantity(quantity);
            self.store.write(&items)?;
        }
        Ok(items)
    }

    /// Remove the line for `id`; no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn remove(&self, id: &ProductId) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items();
        items.retain(|item| item.id != *id);
        self.store.write(&items)?;
        Ok(items)
    }

    /// Replace the cart with an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when persisting fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.write(&Vec::<CartItem>::new())
    }

    /// Subtotal and item count over the current cart. Pure read.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let items = self.items();
        CartTotals {
            subtotal: items
                .iter()
                .map(|item| item.price * Decimal::from(item.quantity))
                .sum(),
            total_items: items.iter().map(|item| u64::from(item.quantity)).sum(),
        }
    }
}

/// Quantity coercion: round to the nearest whole number, floor at one.
/// NaN falls through `f64::max` to one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // saturating cast, floored at 1.0
fn clamp_quantity(quantity: f64) -> u32 {
    quantity.round().max(1.0) as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: &str, name: &str, price: i64) -> ProductRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "price": price,
        }))
        .unwrap()
    }

    fn cart() -> CartStore<MemoryStore> {
        CartStore::new(MemoryStore::new())
    }

    #[test]
    fn test_fresh_add_creates_one_line() {
        let cart = cart();
        let items = cart.add(&product("1", "Mouse", 30), 2).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_repeated_add_accumulates_quantity() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 2).unwrap();
        let items = cart.add(&product("1", "Mouse", 30), 3).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_numeric_and_string_ids_match() {
        let cart = cart();
        let numeric: ProductRecord =
            serde_json::from_str(r#"{"id": 7, "name": "Lamp", "price": 34}"#).unwrap();
        cart.add(&numeric, 1).unwrap();
        let items = cart.add(&product("7", "Lamp", 34), 1).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_rounds_and_floors() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 1).unwrap();
        let id = ProductId::from("1");

        let items = cart.update_quantity(&id, 2.6).unwrap();
        assert_eq!(items.first().unwrap().quantity, 3);

        let items = cart.update_quantity(&id, 0.2).unwrap();
        assert_eq!(items.first().unwrap().quantity, 1);

        let items = cart.update_quantity(&id, -4.0).unwrap();
        assert_eq!(items.first().unwrap().quantity, 1);
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 2).unwrap();
        let items = cart.update_quantity(&ProductId::from("99"), 5.0).unwrap();
        assert_eq!(items.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_then_add_restores_prior_state() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 1).unwrap();
        let before = cart.items();

        cart.remove(&ProductId::from("1")).unwrap();
        assert!(cart.items().is_empty());

        cart.add(&product("1", "Mouse", 30), 1).unwrap();
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn test_totals() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 2).unwrap();
        cart.add(&product("2", "Keyboard", 80), 1).unwrap();
        let totals = cart.totals();
        assert_eq!(totals.subtotal, Decimal::from(140));
        assert_eq!(totals.total_items, 3);
    }

    #[test]
    fn test_clear() {
        let cart = cart();
        cart.add(&product("1", "Mouse", 30), 1).unwrap();
        cart.clear().unwrap();
        assert!(cart.items().is_empty());
        assert_eq!(cart.totals().total_items, 0);
    }
}
