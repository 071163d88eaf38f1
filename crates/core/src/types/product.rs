//! Product records as the marketplace API returns them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::lenient_decimal;
use super::{Category, ProductId, ProductStatus};

/// A product as catalog and detail endpoints return it.
///
/// Deserialization is deliberately forgiving: ids normalize to strings, prices
/// accept numbers or numeric strings (anything else becomes `None`), and
/// unrecognized statuses land in [`ProductStatus::Unknown`]. One malformed
/// record must never take down a whole catalog response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_decimal::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_decimal::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
}

impl ProductRecord {
    /// Category name normalized for comparisons; empty when uncategorized.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", Category::name)
    }

    /// Price with the zero default that ordering code relies on.
    #[must_use]
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or_default()
    }
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
}
