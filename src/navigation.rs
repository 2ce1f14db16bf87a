// src/navigation.rs

//! In-memory page selection
//!
//! The storefront is one window with six views. Navigation is a plain state
//! machine over [`Page`] plus the product and category parameters; URL paths
//! are only an optional rendering of that state, used for logging.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ProductId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Shop,
    Product,
    Cart,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Self::Home,
        Self::Shop,
        Self::Product,
        Self::Cart,
        Self::About,
        Self::Contact,
    ];

    /// Entries of the header and footer menus
    pub const MENU: [Page; 4] = [Self::Home, Self::Shop, Self::About, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Shop => "shop",
            Self::Product => "product",
            Self::Cart => "cart",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Accueil",
            Self::Shop => "Boutique",
            Self::Product => "Produit",
            Self::Cart => "Panier",
            Self::About => "À propos",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| Error::not_found("page", s).source("navigation"))
    }
}

/// Current view plus the parameters views read on entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current: Page,
    pub selected_product_id: Option<ProductId>,
    pub selected_category: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `page`. Parameters that are given replace the stored ones;
    /// parameters left out keep their previous value.
    pub fn navigate(
        &mut self,
        page: Page,
        product_id: Option<ProductId>,
        category: Option<String>,
    ) {
        self.current = page;
        if let Some(id) = product_id.filter(|id| !id.is_empty()) {
            self.selected_product_id = Some(id);
        }
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            self.selected_category = Some(category);
        }
        tracing::debug!(path = %self.to_path(), "navigated");
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    /// URL path for the current view, e.g. `/product/3` or `/shop?category=roots`
    pub fn to_path(&self) -> String {
        match self.current {
            Page::Home => "/".to_string(),
            Page::Shop => match &self.selected_category {
                Some(category) => format!("/shop?category={}", category),
                None => "/shop".to_string(),
            },
            Page::Product => match &self.selected_product_id {
                Some(id) => format!("/product/{}", id),
                None => "/product".to_string(),
            },
            page => format!("/{}", page.as_str()),
        }
    }

    /// Parses a path produced by [`NavigationState::to_path`]
    pub fn from_path(path: &str) -> Result<Self> {
        let (route, query) = match path.split_once('?') {
            Some((route, query)) => (route, Some(query)),
            None => (path, None),
        };
        let mut segments = route.trim_matches('/').split('/').filter(|s| !s.is_empty());

        let page = match segments.next() {
            None => Page::Home,
            Some(segment) => segment.parse::<Page>()?,
        };

        let mut state = Self {
            current: page,
            ..Self::default()
        };

        if page == Page::Product {
            state.selected_product_id = segments.next().map(str::to_string);
        }
        if let Some(query) = query {
            state.selected_category = query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == "category")
                .map(|(_, value)| value.to_string())
                .filter(|value| !value.is_empty());
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_home() {
        let nav = NavigationState::new();
        assert_eq!(nav.current, Page::Home);
        assert!(nav.is_active(Page::Home));
        assert_eq!(nav.selected_product_id, None);
    }

    #[test]
    fn test_navigate_primes_parameters() {
        let mut nav = NavigationState::new();

        nav.navigate(Page::Shop, None, Some("roots".to_string()));
        assert_eq!(nav.current, Page::Shop);
        assert_eq!(nav.selected_category.as_deref(), Some("roots"));

        nav.navigate(Page::Product, Some("3".to_string()), None);
        assert_eq!(nav.current, Page::Product);
        assert_eq!(nav.selected_product_id.as_deref(), Some("3"));
        // untouched parameter survives
        assert_eq!(nav.selected_category.as_deref(), Some("roots"));
    }

    #[test]
    fn test_paths() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.to_path(), "/");

        nav.navigate(Page::Product, Some("1".to_string()), None);
        assert_eq!(nav.to_path(), "/product/1");

        nav.navigate(Page::Cart, None, None);
        assert_eq!(nav.to_path(), "/cart");
    }

    #[test]
    fn test_from_path() {
        let product = NavigationState::from_path("/product/5").unwrap();
        assert_eq!(product.current, Page::Product);
        assert_eq!(product.selected_product_id.as_deref(), Some("5"));

        let shop = NavigationState::from_path("/shop?category=leafy").unwrap();
        assert_eq!(shop.current, Page::Shop);
        assert_eq!(shop.selected_category.as_deref(), Some("leafy"));

        assert_eq!(NavigationState::from_path("/").unwrap().current, Page::Home);

        let err = NavigationState::from_path("/checkout").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<&str> = Page::MENU.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Accueil", "Boutique", "À propos", "Contact"]);
    }
}
