//! Primary/fallback catalog source.
//!
//! The remote API is the primary source; when it is unreachable the bundled
//! sample dataset keeps the catalog browsable. Callers learn which origin
//! served them so the UI can flag sample data instead of passing it off as
//! live inventory.

use mercadito_core::{ProductId, ProductRecord};
use tracing::warn;

use crate::products::{ApiError, ProductClient};
use crate::sample;

/// Where a catalog load was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// The marketplace API answered.
    Remote,
    /// The API failed; this is the bundled sample catalog.
    Sample,
}

/// A product list plus the origin that produced it.
#[derive(Debug, Clone)]
pub struct SourcedProducts {
    pub products: Vec<ProductRecord>,
    pub origin: DataOrigin,
}

/// Product reads with explicit primary/fallback ordering.
pub struct ProductSource {
    client: ProductClient,
}

impl ProductSource {
    /// Wrap a product client.
    #[must_use]
    pub const fn new(client: ProductClient) -> Self {
        Self { client }
    }

    /// The active catalog; falls back to sample data when the API fails.
    /// Never errors.
    pub async fn load_active(&self) -> SourcedProducts {
        match self.client.fetch_active().await {
            Ok(products) => SourcedProducts {
                products,
                origin: DataOrigin::Remote,
            },
            Err(error) => {
                warn!(%error, "marketplace API unreachable, serving sample catalog");
                SourcedProducts {
                    products: sample::products(),
                    origin: DataOrigin::Sample,
                }
            }
        }
    }

    /// One product by id; consults the sample catalog when the API fails.
    ///
    /// A clean 404 from the API is an answer, not a failure, and does not
    /// fall through to the samples.
    pub async fn load_product(&self, id: &ProductId) -> Option<ProductRecord> {
        match self.client.fetch_by_id(id).await {
            Ok(product) => Some(product),
            Err(ApiError::NotFound(_)) => None,
            Err(error) => {
                warn!(%error, %id, "product fetch failed, consulting sample catalog");
                sample::products().into_iter().find(|p| p.id == *id)
            }
        }
    }
}
