// src/cart/mod.rs

//! Shopping cart
//!
//! Lines are kept in first-add order and are unique by product id. Each line
//! snapshots the product's name, price, image and weight when it is first
//! added; later catalog reads never rewrite it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::error::Result;
use crate::types::{Money, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub weight: String,
    pub quantity: u32,
}

impl CartLineItem {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            weight: product.weight.clone(),
            quantity,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// What a cart mutation did, for user notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added { id: ProductId, name: String, quantity: u32 },
    Updated { id: ProductId, name: String, quantity: u32 },
    Removed { id: ProductId, name: String },
}

impl CartEvent {
    pub fn message(&self) -> String {
        match self {
            CartEvent::Added { name, .. } => format!("Ajouté au panier : {}", name),
            CartEvent::Updated { name, .. } => format!("Quantité mise à jour : {}", name),
            CartEvent::Removed { name, .. } => format!("{} retiré du panier", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds `quantity` units of a catalog product. An unknown id leaves the
    /// cart untouched and returns a not-found error. A zero quantity counts as one.
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        quantity: u32,
    ) -> Result<CartEvent> {
        let product = catalog.lookup(product_id)?;
        let quantity = quantity.max(1);

        let event = match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity);
                CartEvent::Updated {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                }
            }
            None => {
                self.items.push(CartLineItem::snapshot(product, quantity));
                CartEvent::Added {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    quantity,
                }
            }
        };

        tracing::info!(product_id, quantity, "cart line {:?}", event);
        Ok(event)
    }

    /// Sets a line's quantity. Zero removes the line; an unknown id is a no-op.
    /// Only a removal produces an event.
    pub fn update_quantity(&mut self, item_id: &str, new_quantity: u32) -> Option<CartEvent> {
        if new_quantity == 0 {
            return self.remove_item(item_id);
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.quantity = new_quantity;
            tracing::debug!(item_id, new_quantity, "cart quantity set");
        }
        None
    }

    pub fn remove_item(&mut self, item_id: &str) -> Option<CartEvent> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        let item = self.items.remove(index);

        tracing::info!(item_id, "removed from cart");
        Some(CartEvent::Removed {
            id: item.id,
            name: item.name,
        })
    }

    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}

/// Which way a quantity stepper button moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

/// Next stepper value, never below 1. Removal goes through the delete button.
pub fn step_quantity(current: u32, step: Step) -> u32 {
    match step {
        Step::Increment => current.saturating_add(1),
        Step::Decrement => current.saturating_sub(1).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();

        let first = cart.add_to_cart(&catalog, "1", 1).unwrap();
        let second = cart.add_to_cart(&catalog, "1", 2).unwrap();

        assert!(matches!(first, CartEvent::Added { quantity: 1, .. }));
        assert!(matches!(second, CartEvent::Updated { quantity: 3, .. }));
        assert_eq!(cart.line_count(), 1);

        let line = cart.get("1").unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.line_total(), Money(6750));
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_unchanged() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, "2", 1).unwrap();
        let before = cart.clone();

        let err = cart.add_to_cart(&catalog, "99", 1).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_lines_keep_first_add_order() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        for id in ["4", "1", "7", "1"] {
            cart.add_to_cart(&catalog, id, 1).unwrap();
        }

        let order: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["4", "1", "7"]);
        assert_eq!(cart.total_item_count(), 4);
        assert_eq!(cart.subtotal(), Money(975 + 2250 * 2 + 750));
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let catalog = Catalog::seed();
        let mut updated = Cart::new();
        updated.add_to_cart(&catalog, "3", 2).unwrap();
        updated.add_to_cart(&catalog, "6", 1).unwrap();
        let mut removed = updated.clone();

        let update_event = updated.update_quantity("3", 0);
        let remove_event = removed.remove_item("3");

        assert_eq!(updated, removed);
        assert_eq!(update_event, remove_event);
        assert_eq!(
            remove_event.unwrap().message(),
            "Poivrons Colorés retiré du panier"
        );
    }

    #[test]
    fn test_update_unknown_or_remove_absent_is_noop() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, "5", 1).unwrap();
        let before = cart.clone();

        assert_eq!(cart.update_quantity("8", 4), None);
        assert_eq!(cart.remove_item("8"), None);
        assert_eq!(cart, before);

        assert_eq!(cart.update_quantity("5", 4), None);
        assert_eq!(cart.get("5").unwrap().quantity, 4);
    }

    #[test]
    fn test_snapshot_is_taken_at_add_time() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, "2", 1).unwrap();

        let line = cart.get("2").unwrap();
        assert_eq!(line.name, "Carottes Bio du Potager");
        assert_eq!(line.price, Money(1400));
        assert_eq!(line.weight, "1kg");
    }

    #[test]
    fn test_event_messages() {
        let added = CartEvent::Added {
            id: "7".into(),
            name: "Radis Roses".into(),
            quantity: 1,
        };
        assert_eq!(added.message(), "Ajouté au panier : Radis Roses");

        let updated = CartEvent::Updated {
            id: "7".into(),
            name: "Radis Roses".into(),
            quantity: 2,
        };
        assert_eq!(updated.message(), "Quantité mise à jour : Radis Roses");
    }

    #[test]
    fn test_stepper_floor() {
        assert_eq!(step_quantity(1, Step::Decrement), 1);
        assert_eq!(step_quantity(3, Step::Decrement), 2);
        assert_eq!(step_quantity(3, Step::Increment), 4);
        assert_eq!(step_quantity(u32::MAX, Step::Increment), u32::MAX);
    }
}
