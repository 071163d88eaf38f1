//! Locally persisted collections: cart, wishlist, ratings.
//!
//! Each store owns one named collection in the flat storage namespace and
//! applies its own merge/update rules on top of a single read-modify-write
//! per operation. The stores are independent; only the backend is shared.

pub mod cart;
pub mod ratings;
pub mod wishlist;

pub use cart::{CartItem, CartStore, CartTotals};
pub use ratings::{RatingEntry, RatingStore};
pub use wishlist::{WishlistItem, WishlistStore};
