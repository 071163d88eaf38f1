//! Product lifecycle status.

use serde::{Deserialize, Serialize};

/// Listing status of a product.
///
/// Maps to the marketplace backend's status values. Unrecognized values land
/// in [`Self::Unknown`] so a single odd record cannot fail a whole catalog
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Active,
    Available,
    Inactive,
    Sold,
    /// Any status value this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Available => write!(f, "AVAILABLE"),
            Self::Inactive => write!(f, "INACTIVE"),
            Self::Sold => write!(f, "SOLD"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let status: ProductStatus = serde_json::from_str(r#""SOLD""#).unwrap();
        assert_eq!(status, ProductStatus::Sold);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""SOLD""#);
    }

    #[test]
    fn test_unrecognized_value_maps_to_unknown() {
        let status: ProductStatus = serde_json::from_str(r#""ARCHIVED""#).unwrap();
        assert_eq!(status, ProductStatus::Unknown);
    }
}
