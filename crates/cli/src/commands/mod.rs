//! CLI command implementations.
//!
//! Each module wires one subcommand to the storefront core and prints a
//! plain-text result. All persistence goes through the shared data directory.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod rate;
pub mod wishlist;
