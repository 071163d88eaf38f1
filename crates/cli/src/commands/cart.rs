//! Cart commands.

use mercadito_core::ProductId;
use mercadito_storefront::{CartStore, JsonFileStore, ProductSource};

type Cart = CartStore<JsonFileStore>;

/// Look the product up (API first, sample catalog as fallback) and add it.
///
/// # Errors
///
/// Fails when the product id is unknown everywhere or persisting fails.
#[allow(clippy::print_stdout)]
pub async fn add(
    source: &ProductSource,
    cart: &Cart,
    id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::from(id);
    let Some(product) = source.load_product(&id).await else {
        return Err(format!("product {id} not found").into());
    };

    cart.add(&product, quantity)?;
    println!("Added {quantity} x {}", product.name);
    print_totals(cart);
    Ok(())
}

/// Print the cart contents and totals.
#[allow(clippy::print_stdout)]
pub fn list(cart: &Cart) {
    let items = cart.items();
    if items.is_empty() {
        println!("Cart is empty");
        return;
    }

    println!("{:<8} {:<28} {:>10} {:>6}", "ID", "NAME", "PRICE", "QTY");
    for item in &items {
        let price = format!("{:.2}", item.price);
        println!(
            "{:<8} {:<28} {price:>10} {:>6}",
            item.id.as_str(),
            item.name,
            item.quantity
        );
    }
    print_totals(cart);
}

/// Set the quantity for a line.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn update(cart: &Cart, id: &str, quantity: f64) -> Result<(), Box<dyn std::error::Error>> {
    cart.update_quantity(&ProductId::from(id), quantity)?;
    print_totals(cart);
    Ok(())
}

/// Remove a line.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn remove(cart: &Cart, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    cart.remove(&ProductId::from(id))?;
    println!("Removed {id}");
    print_totals(cart);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn clear(cart: &Cart) -> Result<(), Box<dyn std::error::Error>> {
    cart.clear()?;
    println!("Cart cleared");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_totals(cart: &Cart) {
    let totals = cart.totals();
    println!(
        "{} item(s), subtotal {:.2}",
        totals.total_items, totals.subtotal
    );
}
