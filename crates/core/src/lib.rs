//! Mercadito Core - Shared types library.
//!
//! This crate provides common types used across all Mercadito components:
//! - `storefront` - client-side storefront core (local stores, catalog, API client)
//! - `cli` - command-line surface over the storefront core
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, string-normalized ids, categories,
//!   statuses, and lenient numeric coercion

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
