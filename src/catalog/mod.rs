// src/catalog/mod.rs

//! Product catalog
//!
//! The catalog is built once from the seed table and shared read-only by every
//! view through an `Arc`. Nothing mutates it after startup.

pub mod filter;
mod seed;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Money, ProductId};

pub use filter::{apply, FilterQuery, ParseFilterError, PriceRange, SortKey};

/// Sentinel category id meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Number of related products shown under a product page
pub const RELATED_LIMIT: usize = 3;

static SEED_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(seed::catalog()));

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    /// Category id, matching a [`CategoryInfo::id`]
    pub category: String,
    pub rating: f32,
    pub weight: String,
    pub description: String,
    pub badge: Option<String>,
    pub original_price: Option<Money>,
    pub season: Option<String>,
    pub details: Option<ProductDetails>,
}

impl Product {
    /// Savings against the struck-through price, if any
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original.saturating_sub(self.price))
    }

    /// Images for the product gallery; falls back to the main image
    pub fn gallery(&self) -> Vec<&str> {
        match &self.details {
            Some(details) if !details.gallery.is_empty() => {
                details.gallery.iter().map(String::as_str).collect()
            }
            _ => vec![self.image.as_str()],
        }
    }
}

/// Long-form content for the product page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDetails {
    pub long_description: String,
    pub features: Vec<String>,
    pub nutrition: Vec<NutritionFact>,
    pub storage: String,
    pub origin: String,
    pub producer: String,
    /// Availability window, e.g. "Octobre à Mai"
    pub harvest_season: String,
    pub review_count: u32,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionFact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
    pub description: String,
    pub image: String,
    /// Marketing blurb such as "12 variétés"
    pub variety_note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategoryInfo>,
    featured: Vec<ProductId>,
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        categories: Vec<CategoryInfo>,
        featured: Vec<ProductId>,
    ) -> Self {
        Self {
            products,
            categories,
            featured,
        }
    }

    /// The shared built-in catalog
    pub fn seed() -> Arc<Catalog> {
        Arc::clone(&SEED_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a product or reports it as not found
    pub fn lookup(&self, id: &str) -> Result<&Product> {
        self.get(id)
            .ok_or_else(|| Error::not_found("product", id).source("catalog"))
    }

    pub fn category(&self, id: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display label of a category id, or the id itself when unknown
    pub fn category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map(|c| c.label.as_str()).unwrap_or(id)
    }

    /// Products sharing the category of `id` come first, then the rest,
    /// each group by descending rating. `id` itself is never included.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };

        let mut candidates: Vec<&Product> =
            self.products.iter().filter(|p| p.id != product.id).collect();
        candidates.sort_by(|a, b| {
            let a_other = a.category != product.category;
            let b_other = b.category != product.category;
            a_other
                .cmp(&b_other)
                .then_with(|| b.rating.total_cmp(&a.rating))
        });
        candidates.truncate(limit);
        candidates
    }

    /// Featured products in display order. Ids missing from the table are skipped.
    pub fn featured(&self) -> Vec<&Product> {
        self.featured.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Featured products grouped into carousel slides of `per_slide`
    pub fn featured_slides(&self, per_slide: usize) -> Vec<Vec<&Product>> {
        let per_slide = per_slide.max(1);
        self.featured()
            .chunks(per_slide)
            .map(<[&Product]>::to_vec)
            .collect()
    }
}

/// Index of the slide after `current`, wrapping to the first
pub fn next_slide(current: usize, slides: usize) -> usize {
    if slides == 0 {
        0
    } else {
        (current + 1) % slides
    }
}

/// Index of the slide before `current`, wrapping to the last
pub fn prev_slide(current: usize, slides: usize) -> usize {
    if slides == 0 {
        0
    } else {
        (current + slides - 1) % slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_shared() {
        let a = Catalog::seed();
        let b = Catalog::seed();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 8);
        assert_eq!(a.categories().len(), 6);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::seed();

        let tomatoes = catalog.lookup("1").unwrap();
        assert_eq!(tomatoes.name, "Tomates Cerises Bio");
        assert_eq!(tomatoes.price, Money(2250));
        assert_eq!(tomatoes.savings(), Some(Money(350)));

        let err = catalog.lookup("42").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.source, "catalog");
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::seed();
        let mut ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        let catalog = Catalog::seed();
        for product in catalog.products() {
            assert!(
                catalog.category(&product.category).is_some(),
                "unknown category {}",
                product.category
            );
        }
        assert_eq!(catalog.category_label("leafy"), "Légumes-feuilles");
        assert_eq!(catalog.category_label("mystery"), "mystery");
    }

    #[test]
    fn test_related_prefers_same_category() {
        let catalog = Catalog::seed();
        let related: Vec<&str> = catalog
            .related("1", RELATED_LIMIT)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        // 5 shares the tomato category, then the best rated of the rest
        assert_eq!(related, vec!["5", "2", "3"]);
        assert!(catalog.related("missing", RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_gallery_falls_back_to_main_image() {
        let catalog = Catalog::seed();
        let radishes = catalog.lookup("7").unwrap();

        assert_eq!(radishes.gallery(), vec![radishes.image.as_str()]);
        assert_eq!(catalog.lookup("1").unwrap().gallery().len(), 2);
    }

    #[test]
    fn test_featured_slides() {
        let catalog = Catalog::seed();
        let slides = catalog.featured_slides(3);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].len(), 3);
        assert_eq!(slides[1].len(), 1);
        assert_eq!(slides[1][0].id, "4");
    }

    #[test]
    fn test_slide_navigation_wraps() {
        assert_eq!(next_slide(0, 2), 1);
        assert_eq!(next_slide(1, 2), 0);
        assert_eq!(prev_slide(0, 2), 1);
        assert_eq!(prev_slide(1, 2), 0);
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(prev_slide(0, 0), 0);
    }
}
