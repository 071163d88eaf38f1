//! Bundled sample catalog.
//!
//! Used by [`crate::datasource::ProductSource`] when the marketplace API is
//! unreachable, and handy for local development against no backend.

use mercadito_core::{Category, ProductId, ProductRecord, ProductStatus};
use rust_decimal::Decimal;

/// The offline sample catalog.
#[must_use]
pub fn products() -> Vec<ProductRecord> {
    [
        ("0001", "Pro Headphones", "tech", Decimal::new(9999, 2)),
        ("0002", "Smart Coffee Maker", "home", Decimal::new(14_900, 2)),
        ("0003", "Urban Sneakers", "fashion", Decimal::new(5990, 2)),
        ("0004", "Mechanical Keyboard", "tech", Decimal::new(7950, 2)),
        ("0005", "Minimal Desk Lamp", "home", Decimal::new(3425, 2)),
        ("0006", "Daily Backpack", "fashion", Decimal::new(4500, 2)),
        ("0007", "Wireless Mouse", "tech", Decimal::new(2999, 2)),
        ("0008", "Bed Sheet Set", "home", Decimal::new(2599, 2)),
    ]
    .into_iter()
    .map(|(id, name, category, price)| ProductRecord {
        id: ProductId::from(id),
        name: name.to_string(),
        price: Some(price),
        category: Some(Category::from(category)),
        image_url: None,
        status: Some(ProductStatus::Active),
        description: None,
        rating: None,
        reviews_count: None,
        available_quantity: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let products = products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_samples_are_active_and_priced() {
        for product in products() {
            assert_eq!(product.status, Some(ProductStatus::Active));
            assert!(product.price.is_some());
        }
    }
}
