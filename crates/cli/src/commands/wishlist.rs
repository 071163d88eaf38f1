//! Wishlist commands.

use mercadito_core::ProductId;
use mercadito_storefront::{JsonFileStore, ProductSource, WishlistStore};

type Wishlist = WishlistStore<JsonFileStore>;

/// Save the product, or drop it when already saved.
///
/// # Errors
///
/// Fails when the product id is unknown everywhere or persisting fails.
#[allow(clippy::print_stdout)]
pub async fn toggle(
    source: &ProductSource,
    wishlist: &Wishlist,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::from(id);
    let Some(product) = source.load_product(&id).await else {
        return Err(format!("product {id} not found").into());
    };

    let was_saved = wishlist.is_wishlisted(&id);
    wishlist.toggle(&product)?;
    if was_saved {
        println!("Removed {} from the wishlist", product.name);
    } else {
        println!("Saved {} to the wishlist", product.name);
    }
    Ok(())
}

/// Print the saved products.
#[allow(clippy::print_stdout)]
pub fn list(wishlist: &Wishlist) {
    let items = wishlist.items();
    if items.is_empty() {
        println!("Wishlist is empty");
        return;
    }

    println!("{:<8} {:<28} {:<12} {:>10}", "ID", "NAME", "CATEGORY", "PRICE");
    for item in &items {
        let category = item.category.as_ref().map_or("", |c| c.name());
        let price = format!("{:.2}", item.price);
        println!(
            "{:<8} {:<28} {:<12} {price:>10}",
            item.id.as_str(),
            item.name,
            category
        );
    }
    println!("{} saved product(s)", wishlist.count());
}

/// Empty the wishlist.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn clear(wishlist: &Wishlist) -> Result<(), Box<dyn std::error::Error>> {
    wishlist.clear()?;
    println!("Wishlist cleared");
    Ok(())
}
