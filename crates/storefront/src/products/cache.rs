//! Cache types for product API responses.

use mercadito_core::ProductRecord;

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    ActiveProducts,
    Product(String),
    Category(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<ProductRecord>),
    Products(Vec<ProductRecord>),
}
