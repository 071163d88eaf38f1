//! Catalog filtering and sorting.
//!
//! A pure pipeline over an in-memory product list: text, category, and price
//! filters followed by a stable sort. Malformed records filter and sort on
//! coerced defaults (empty name, zero price); nothing in here can fail.

use std::str::FromStr;

use mercadito_core::ProductRecord;
use rust_decimal::Decimal;

/// Sentinel category matching every record.
const ALL_CATEGORIES: &str = "all";

/// Sort applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Keep the filtered order untouched.
    #[default]
    Relevance,
    /// Numeric ascending on price; missing prices sort as zero.
    PriceAscending,
    /// Numeric descending on price; missing prices sort as zero.
    PriceDescending,
    /// Case-insensitive lexicographic on name.
    NameAscending,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::PriceAscending => write!(f, "price_asc"),
            Self::PriceDescending => write!(f, "price_desc"),
            Self::NameAscending => write!(f, "name_asc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "price_asc" => Ok(Self::PriceAscending),
            "price_desc" => Ok(Self::PriceDescending),
            "name_asc" => Ok(Self::NameAscending),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Criteria for one catalog view.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name or category name;
    /// empty matches all.
    pub text: String,
    /// Category name; empty or `"all"` matches all.
    pub category: String,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Parse a user-supplied price bound; blank or non-numeric input means
    /// the bound is unset.
    #[must_use]
    pub fn parse_bound(raw: &str) -> Option<Decimal> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }

    /// Run the pipeline, returning a new filtered and sorted list. The input
    /// is never mutated.
    #[must_use]
    pub fn apply(&self, products: &[ProductRecord]) -> Vec<ProductRecord> {
        let text = self.text.trim().to_lowercase();
        let category = self.category.trim().to_lowercase();

        let mut list: Vec<ProductRecord> = products
            .iter()
            .filter(|product| matches_text(product, &text))
            .filter(|product| matches_category(product, &category))
            .filter(|product| self.matches_price(product))
            .cloned()
            .collect();

        // Vec::sort_by is stable, so equal keys keep their filtered order.
        match self.sort {
            SortOrder::Relevance => {}
            SortOrder::PriceAscending => {
                list.sort_by(|a, b| a.price_or_zero().cmp(&b.price_or_zero()));
            }
            SortOrder::PriceDescending => {
                list.sort_by(|a, b| b.price_or_zero().cmp(&a.price_or_zero()));
            }
            SortOrder::NameAscending => {
                list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
        }
        list
    }

    fn matches_price(&self, product: &ProductRecord) -> bool {
        if self.price_min.is_none() && self.price_max.is_none() {
            return true;
        }
        // A bound requires a comparable price; records whose price failed
        // numeric parsing are excluded rather than compared at zero.
        let Some(price) = product.price else {
            return false;
        };
        self.price_min.is_none_or(|min| price >= min)
            && self.price_max.is_none_or(|max| price <= max)
    }
}

fn matches_text(product: &ProductRecord, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category_name().to_lowercase().contains(needle)
}

fn matches_category(product: &ProductRecord, wanted: &str) -> bool {
    wanted.is_empty()
        || wanted == ALL_CATEGORIES
        || product.category_name().to_lowercase() == wanted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, category: &str, price: &str) -> ProductRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category": category,
            "price": price,
        }))
        .unwrap()
    }

    fn names(list: &[ProductRecord]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    fn catalog() -> Vec<ProductRecord> {
        vec![
            record("1", "Zeta Speaker", "tech", "120"),
            record("2", "Alpha Lamp", "home", "35"),
            record("3", "Mid Keyboard", "tech", "80"),
            record("4", "Alpha Rug", "home", "60"),
        ]
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let result = CatalogQuery::default().apply(&catalog());
        assert_eq!(
            names(&result),
            vec!["Zeta Speaker", "Alpha Lamp", "Mid Keyboard", "Alpha Rug"]
        );
    }

    #[test]
    fn test_text_matches_name_or_category() {
        let query = CatalogQuery {
            text: "TECH".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            vec!["Zeta Speaker", "Mid Keyboard"]
        );

        let query = CatalogQuery {
            text: "alpha".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(names(&query.apply(&catalog())), vec!["Alpha Lamp", "Alpha Rug"]);
    }

    #[test]
    fn test_all_category_sentinel_matches_everything() {
        let query = CatalogQuery {
            category: "all".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(query.apply(&catalog()).len(), 4);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let query = CatalogQuery {
            category: "Home".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(names(&query.apply(&catalog())), vec!["Alpha Lamp", "Alpha Rug"]);
    }

    #[test]
    fn test_price_window() {
        let query = CatalogQuery {
            price_min: CatalogQuery::parse_bound("50"),
            price_max: CatalogQuery::parse_bound("100"),
            ..CatalogQuery::default()
        };
        assert_eq!(names(&query.apply(&catalog())), vec!["Mid Keyboard", "Alpha Rug"]);
    }

    #[test]
    fn test_unparseable_price_is_excluded_only_under_a_bound() {
        let list = vec![record("9", "Mystery Box", "tech", "call us")];

        let unbounded = CatalogQuery::default();
        assert_eq!(unbounded.apply(&list).len(), 1);

        let bounded = CatalogQuery {
            price_min: Some(Decimal::ZERO),
            ..CatalogQuery::default()
        };
        assert!(bounded.apply(&list).is_empty());
    }

    #[test]
    fn test_name_sort_is_alphabetical() {
        let query = CatalogQuery {
            sort: SortOrder::NameAscending,
            ..CatalogQuery::default()
        };
        assert_eq!(
            names(&query.apply(&catalog())),
            vec!["Alpha Lamp", "Alpha Rug", "Mid Keyboard", "Zeta Speaker"]
        );
    }

    #[test]
    fn test_price_sorts() {
        let asc = CatalogQuery {
            sort: SortOrder::PriceAscending,
            ..CatalogQuery::default()
        };
        assert_eq!(
            names(&asc.apply(&catalog())),
            vec!["Alpha Lamp", "Alpha Rug", "Mid Keyboard", "Zeta Speaker"]
        );

        let desc = CatalogQuery {
            sort: SortOrder::PriceDescending,
            ..CatalogQuery::default()
        };
        assert_eq!(
            names(&desc.apply(&catalog())),
            vec!["Zeta Speaker", "Mid Keyboard", "Alpha Rug", "Alpha Lamp"]
        );
    }

    #[test]
    fn test_equal_prices_keep_filtered_order() {
        let list = vec![
            record("1", "First", "tech", "50"),
            record("2", "Second", "tech", "50"),
            record("3", "Third", "tech", "50"),
        ];
        let query = CatalogQuery {
            sort: SortOrder::PriceAscending,
            ..CatalogQuery::default()
        };
        assert_eq!(names(&query.apply(&list)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let list = catalog();
        let query = CatalogQuery {
            sort: SortOrder::NameAscending,
            ..CatalogQuery::default()
        };
        let _sorted = query.apply(&list);
        assert_eq!(names(&list).first().copied(), Some("Zeta Speaker"));
    }

    #[test]
    fn test_sort_order_round_trips_through_strings() {
        for raw in ["relevance", "price_asc", "price_desc", "name_asc"] {
            let order: SortOrder = raw.parse().unwrap();
            assert_eq!(order.to_string(), raw);
        }
        assert!("price".parse::<SortOrder>().is_err());
    }
}
