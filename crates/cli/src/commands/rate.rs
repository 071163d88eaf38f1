//! Rating submission.

use mercadito_core::ProductId;
use mercadito_storefront::{JsonFileStore, RatingStore};

/// Fold one submission into the product's running mean and print the result.
///
/// # Errors
///
/// Fails when persisting fails.
#[allow(clippy::print_stdout)]
pub fn submit(
    ratings: &RatingStore<JsonFileStore>,
    id: &str,
    stars: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry = ratings.submit(&ProductId::from(id), stars)?;
    println!(
        "Rated {id}: average {:.2} over {} rating(s)",
        entry.average, entry.count
    );
    Ok(())
}
