// src/catalog/filter.rs

//! Catalog narrowing and ordering for the shop page

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Product, ALL_CATEGORIES};
use crate::types::Money;
use crate::utils::strings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown price range '{0}' (expected all, low, medium or high)")]
    UnknownPriceRange(String),
    #[error("unknown sort key '{0}' (expected name, price-low, price-high or rating)")]
    UnknownSortKey(String),
}

/// Price buckets. Bounds are inclusive on the medium bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriceRange {
    pub const LOW_LIMIT: Money = Money(1500);
    pub const HIGH_LIMIT: Money = Money(3000);

    pub const ALL: [PriceRange; 4] = [Self::All, Self::Low, Self::Medium, Self::High];

    pub fn contains(self, price: Money) -> bool {
        match self {
            Self::All => true,
            Self::Low => price < Self::LOW_LIMIT,
            Self::Medium => price >= Self::LOW_LIMIT && price <= Self::HIGH_LIMIT,
            Self::High => price > Self::HIGH_LIMIT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Select option label, e.g. "Moins de 1500 F CFA"
    pub fn label(self, currency_label: &str) -> String {
        match self {
            Self::All => "Tous les prix".to_string(),
            Self::Low => format!("Moins de {} {}", Self::LOW_LIMIT.amount(), currency_label),
            Self::Medium => format!(
                "{} - {} {}",
                Self::LOW_LIMIT.amount(),
                Self::HIGH_LIMIT.amount(),
                currency_label
            ),
            Self::High => format!("Plus de {} {}", Self::HIGH_LIMIT.amount(), currency_label),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseFilterError::UnknownPriceRange(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::Name, Self::PriceLow, Self::PriceHigh, Self::Rating];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nom A-Z",
            Self::PriceLow => "Prix croissant",
            Self::PriceHigh => "Prix décroissant",
            Self::Rating => "Mieux notés",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => strings::fold_accents(&a.name).cmp(&strings::fold_accents(&b.name)),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            _ => Err(ParseFilterError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Shop page filter state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub search: String,
    /// Category id or [`ALL_CATEGORIES`]
    pub category: String,
    pub price_range: PriceRange,
    pub sort: SortKey,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::All,
            sort: SortKey::Name,
        }
    }
}

impl FilterQuery {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    /// True when some filter narrows the list. Sorting alone does not count.
    pub fn is_narrowing(&self) -> bool {
        !self.search.trim().is_empty()
            || self.category != ALL_CATEGORIES
            || self.price_range != PriceRange::All
    }

    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search.trim();
        let matches_search = strings::contains_ignore_case(&product.name, term)
            || strings::contains_ignore_case(&product.description, term);
        let matches_category =
            self.category == ALL_CATEGORIES || product.category == self.category;

        matches_search && matches_category && self.price_range.contains(product.price)
    }
}

/// Filters then sorts. The sort is stable so ties keep their input order.
pub fn apply<'a, I>(products: I, query: &FilterQuery) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut result: Vec<&Product> = products
        .into_iter()
        .filter(|product| query.matches(product))
        .collect();
    result.sort_by(|a, b| query.sort.compare(a, b));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_name() {
        let catalog = Catalog::seed();
        let names: Vec<&str> = apply(catalog.products(), &FilterQuery::default())
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "Carottes Bio du Potager",
                "Courgettes Bio",
                "Épinards Frais",
                "Poivrons Colorés",
                "Radis Roses",
                "Salade Verte Fraîche",
                "Tomates Anciennes",
                "Tomates Cerises Bio",
            ]
        );
    }

    #[test]
    fn test_low_price_range() {
        let catalog = Catalog::seed();
        let query = FilterQuery {
            price_range: PriceRange::Low,
            sort: SortKey::PriceHigh,
            ..FilterQuery::default()
        };

        let prices: Vec<u64> = apply(catalog.products(), &query)
            .iter()
            .map(|p| p.price.amount())
            .collect();
        assert_eq!(prices, vec![1400, 975, 750]);
    }

    #[test]
    fn test_price_bounds() {
        assert!(PriceRange::Low.contains(Money(1499)));
        assert!(!PriceRange::Low.contains(Money(1500)));
        assert!(PriceRange::Medium.contains(Money(1500)));
        assert!(PriceRange::Medium.contains(Money(3000)));
        assert!(!PriceRange::High.contains(Money(3000)));
        assert!(PriceRange::High.contains(Money(3001)));
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = Catalog::seed();

        let by_name = FilterQuery {
            search: "TOMATES".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(ids(&apply(catalog.products(), &by_name)), vec!["5", "1"]);

        let by_description = FilterQuery {
            search: "fer".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(ids(&apply(catalog.products(), &by_description)), vec!["6"]);
    }

    #[test]
    fn test_search_ignores_surrounding_spaces() {
        let catalog = Catalog::seed();

        let padded = FilterQuery {
            search: " tomates ".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(ids(&apply(catalog.products(), &padded)), vec!["5", "1"]);

        let blank = FilterQuery {
            search: "   ".to_string(),
            ..FilterQuery::default()
        };
        assert!(!blank.is_narrowing());
        assert_eq!(apply(catalog.products(), &blank).len(), catalog.len());
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::seed();
        let query = FilterQuery::with_category("roots");

        assert_eq!(ids(&apply(catalog.products(), &query)), vec!["2", "7"]);
        assert!(query.is_narrowing());
        assert!(apply(catalog.products(), &FilterQuery::with_category("herbs")).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = Catalog::seed();
        for sort in SortKey::ALL {
            for price_range in PriceRange::ALL {
                let query = FilterQuery {
                    search: "o".to_string(),
                    price_range,
                    sort,
                    ..FilterQuery::default()
                };
                let once = apply(catalog.products(), &query);
                let twice = apply(once.iter().copied(), &query);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_price_low_reversed_is_price_high() {
        let catalog = Catalog::seed();
        let mut ascending = apply(
            catalog.products(),
            &FilterQuery {
                sort: SortKey::PriceLow,
                ..FilterQuery::default()
            },
        );
        let descending = apply(
            catalog.products(),
            &FilterQuery {
                sort: SortKey::PriceHigh,
                ..FilterQuery::default()
            },
        );

        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = Catalog::seed();
        let query = FilterQuery {
            sort: SortKey::Rating,
            ..FilterQuery::default()
        };

        // 2 and 5 both rate 4.9; 4 and 8 both rate 4.6
        assert_eq!(
            ids(&apply(catalog.products(), &query)),
            vec!["2", "5", "1", "3", "4", "8", "6", "7"]
        );
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("price-low".parse::<SortKey>(), Ok(SortKey::PriceLow));
        assert_eq!(" Medium ".parse::<PriceRange>(), Ok(PriceRange::Medium));
        assert_eq!(
            "cheapest".parse::<SortKey>(),
            Err(ParseFilterError::UnknownSortKey("cheapest".to_string()))
        );
        assert_eq!(SortKey::PriceHigh.to_string(), "price-high");
        assert_eq!(PriceRange::Low.label("F CFA"), "Moins de 1500 F CFA");
    }
}
