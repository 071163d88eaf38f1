//! Catalog browsing.

use mercadito_storefront::{CatalogQuery, DataOrigin, JsonFileStore, ProductSource, RatingStore};

/// Load the active catalog, run the query pipeline, and print the result.
#[allow(clippy::print_stdout)]
pub async fn browse(
    source: &ProductSource,
    ratings: &RatingStore<JsonFileStore>,
    criteria: &CatalogQuery,
) {
    let loaded = source.load_active().await;
    let products = criteria.apply(&loaded.products);

    println!(
        "{:<8} {:<28} {:<12} {:>10}  {}",
        "ID", "NAME", "CATEGORY", "PRICE", "RATING"
    );
    for product in &products {
        let rating = ratings.get(&product.id);
        let stars = if rating.count == 0 {
            "-".to_string()
        } else {
            format!("{:.2} ({})", rating.average, rating.count)
        };
        let price = product
            .price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        println!(
            "{:<8} {:<28} {:<12} {:>10}  {}",
            product.id.as_str(),
            product.name,
            product.category_name(),
            price,
            stars
        );
    }

    println!("{} product(s)", products.len());
    if loaded.origin == DataOrigin::Sample {
        println!("(marketplace API unreachable; showing sample data)");
    }
}
