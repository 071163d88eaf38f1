//! Core types for Mercadito.
//!
//! This module provides the wire and storage shapes shared by every
//! component, with deserialization that is deliberately forgiving about the
//! marketplace API's loose typing.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use category::{Category, CategoryRecord};
pub use id::ProductId;
pub use product::{ProductDraft, ProductRecord};
pub use status::ProductStatus;
