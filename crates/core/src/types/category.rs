//! Product category as a tagged union.

use serde::{Deserialize, Serialize};

/// A category reference as the API ships it.
///
/// Older endpoints inline the category as a plain string; newer ones embed the
/// full record. Comparison logic only ever looks at the normalized name, so
/// both shapes round-trip through storage untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    /// Bare category name, e.g. `"tech"`.
    Name(String),
    /// Full category record, e.g. `{"id": 3, "name": "tech"}`.
    Record(CategoryRecord),
}

/// The embedded form of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Backend identifier; shape varies by endpoint, so it is kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub name: String,
}

impl Category {
    /// The category name both shapes normalize to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Record(record) => &record.name,
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name() {
        let category: Category = serde_json::from_str(r#""tech""#).unwrap();
        assert_eq!(category.name(), "tech");
    }

    #[test]
    fn test_embedded_record() {
        let category: Category = serde_json::from_str(r#"{"id": 3, "name": "home"}"#).unwrap();
        assert_eq!(category.name(), "home");
    }

    #[test]
    fn test_record_round_trips_with_id() {
        let json = r#"{"id":3,"name":"home"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&category).unwrap(), json);
    }
}
