//! Mercadito Storefront - client-side core for the marketplace.
//!
//! This crate holds everything the storefront UI layer needs short of
//! rendering:
//!
//! - Locally persisted collections (cart, wishlist, per-product ratings, auth
//!   session keys) over an injected storage backend
//! - A pure catalog filter/sort pipeline
//! - A cached REST client for the marketplace product API
//! - An explicit primary/fallback data source (remote catalog first, bundled
//!   sample data when the API is unreachable)
//!
//! # Architecture
//!
//! The marketplace backend is the source of truth for products; nothing is
//! synced locally. Cart, wishlist, and ratings live only on this device, one
//! JSON snapshot per collection in a flat key namespace. Store operations are
//! synchronous single read-modify-write calls; only the product API is async.
//!
//! # Example
//!
//! ```rust,ignore
//! use mercadito_storefront::{CartStore, CatalogQuery, JsonFileStore, SortOrder};
//!
//! let backend = JsonFileStore::open(".mercadito")?;
//! let cart = CartStore::new(backend.clone());
//!
//! let query = CatalogQuery { sort: SortOrder::PriceAscending, ..CatalogQuery::default() };
//! for product in query.apply(&products) {
//!     cart.add(&product, 1)?;
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod datasource;
pub mod products;
pub mod sample;
pub mod session;
pub mod storage;
pub mod stores;

pub use catalog::{CatalogQuery, SortOrder};
pub use config::{ConfigError, StorefrontConfig};
pub use datasource::{DataOrigin, ProductSource, SourcedProducts};
pub use products::{ApiError, ProductClient};
pub use session::Session;
pub use storage::{JsonFileStore, KeyedRecordStore, MemoryStore, StorageBackend, StorageError};
pub use stores::{
    CartItem, CartStore, CartTotals, RatingEntry, RatingStore, WishlistItem, WishlistStore,
};
