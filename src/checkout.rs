// src/checkout.rs

//! Order totals, promo codes and the simulated checkout

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::Cart;
use crate::config::ShopConfig;
use crate::submission::{SubmissionResult, SubmissionService};
use crate::types::Money;
use crate::utils::Time;

pub const CHECKOUT_CONFIRMATION: &str = "Commande confirmée ! Merci pour votre achat.";

/// A percentage discount unlocked by a fixed code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub percent: u8,
}

impl PromoCode {
    pub fn new(code: impl Into<String>, percent: u8) -> Self {
        Self {
            code: code.into(),
            percent,
        }
    }

    pub fn from_config(shop: &ShopConfig) -> Self {
        Self::new(shop.promo_code.clone(), shop.promo_percent)
    }

    /// Case-insensitive match, ignoring surrounding whitespace
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        !input.is_empty() && input.eq_ignore_ascii_case(self.code.trim())
    }

    pub fn discount_on(&self, subtotal: Money) -> Money {
        subtotal.percent(self.percent)
    }
}

/// Pricing rules applied to a cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRules {
    pub free_shipping_threshold: Money,
    pub delivery_fee: Money,
    pub promo: PromoCode,
}

impl PricingRules {
    pub fn from_config(shop: &ShopConfig) -> Self {
        Self {
            free_shipping_threshold: shop.free_shipping_threshold,
            delivery_fee: shop.delivery_fee,
            promo: PromoCode::from_config(shop),
        }
    }

    /// Delivery is free only strictly above the threshold
    pub fn delivery_fee_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::ZERO
        } else {
            self.delivery_fee
        }
    }

    /// How much more to spend before delivery is free; `None` once it already is.
    /// Present exactly when [`PricingRules::delivery_fee_for`] charges the fee.
    pub fn free_shipping_remaining(&self, subtotal: Money) -> Option<Money> {
        (subtotal <= self.free_shipping_threshold)
            .then(|| (self.free_shipping_threshold + Money(1)).saturating_sub(subtotal))
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::from_config(&ShopConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
    pub promo_applied: bool,
    pub free_shipping_remaining: Option<Money>,
}

impl OrderSummary {
    pub fn compute(cart: &Cart, promo_input: &str, rules: &PricingRules) -> Self {
        Self::from_subtotal(cart.subtotal(), cart.total_item_count(), promo_input, rules)
    }

    pub fn from_subtotal(
        subtotal: Money,
        item_count: u32,
        promo_input: &str,
        rules: &PricingRules,
    ) -> Self {
        let delivery_fee = rules.delivery_fee_for(subtotal);
        let promo_applied = rules.promo.matches(promo_input);
        let discount = if promo_applied {
            rules.promo.discount_on(subtotal)
        } else {
            Money::ZERO
        };

        Self {
            item_count,
            subtotal,
            delivery_fee,
            discount,
            total: (subtotal + delivery_fee).saturating_sub(discount),
            promo_applied,
            free_shipping_remaining: rules.free_shipping_remaining(subtotal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub total: Money,
    pub message: String,
}

/// Waits for the configured delay, then always confirms. No order is stored.
#[derive(Debug, Clone)]
pub struct SimulatedCheckout {
    delay: Duration,
}

impl SimulatedCheckout {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(shop: &ShopConfig) -> Self {
        Self::new(shop.checkout_delay())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SubmissionService<OrderSummary> for SimulatedCheckout {
    type Ack = OrderConfirmation;

    fn operation(&self) -> &str {
        "checkout"
    }

    async fn submit(&self, order: &OrderSummary) -> SubmissionResult<OrderConfirmation> {
        tracing::info!(total = %order.total, items = order.item_count, "checkout started");
        Time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            reference: Uuid::new_v4(),
            total: order.total,
            message: CHECKOUT_CONFIRMATION.to_string(),
        };
        tracing::info!(reference = %confirmation.reference, "checkout confirmed");
        SubmissionResult::Success(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cart_with(lines: &[(&str, u32)]) -> Cart {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        for (id, quantity) in lines {
            cart.add_to_cart(&catalog, id, *quantity).unwrap();
        }
        cart
    }

    #[test]
    fn test_promo_matches_any_case() {
        let promo = PromoCode::new("welcome10", 10);

        assert!(promo.matches("WELCOME10"));
        assert!(promo.matches("Welcome10 "));
        assert!(!promo.matches("welcome"));
        assert!(!promo.matches(""));
        assert_eq!(promo.discount_on(Money(10_000)), Money(1_000));
    }

    #[test]
    fn test_summary_with_promo_and_fee() {
        let rules = PricingRules::default();
        let summary = OrderSummary::from_subtotal(Money(10_000), 4, "WELCOME10", &rules);

        assert_eq!(summary.discount, Money(1_000));
        assert_eq!(summary.delivery_fee, Money(2_500));
        assert_eq!(summary.total, Money(11_500));
        assert!(summary.promo_applied);
        assert_eq!(summary.free_shipping_remaining, Some(Money(15_001)));
    }

    #[test]
    fn test_free_shipping_is_strictly_above_threshold() {
        let rules = PricingRules::default();

        let at = OrderSummary::from_subtotal(Money(25_000), 1, "", &rules);
        assert_eq!(at.delivery_fee, Money(2_500));
        assert_eq!(at.free_shipping_remaining, Some(Money(1)));

        let above = OrderSummary::from_subtotal(Money(25_001), 1, "", &rules);
        assert_eq!(above.delivery_fee, Money::ZERO);
        assert_eq!(above.free_shipping_remaining, None);
        assert_eq!(above.total, Money(25_001));
    }

    #[test]
    fn test_remaining_hint_shown_whenever_fee_is_charged() {
        let rules = PricingRules::default();
        for amount in [0, 1, 12_500, 24_999, 25_000, 25_001, 40_000] {
            let subtotal = Money(amount);
            let charged = !rules.delivery_fee_for(subtotal).is_zero();
            let remaining = rules.free_shipping_remaining(subtotal);
            assert_eq!(charged, remaining.is_some(), "subtotal {}", amount);
            if let Some(remaining) = remaining {
                assert!(rules.delivery_fee_for(subtotal + remaining).is_zero());
            }
        }
    }

    #[test]
    fn test_summary_from_cart() {
        // 3 x 2250 + 2 x 3450 = 13650
        let cart = cart_with(&[("1", 3), ("3", 2)]);
        let summary = OrderSummary::compute(&cart, "nope", &PricingRules::default());

        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.subtotal, Money(13_650));
        assert_eq!(summary.discount, Money::ZERO);
        assert_eq!(summary.total, Money(16_150));
    }

    #[test]
    fn test_threshold_comes_from_config() {
        let mut shop = ShopConfig::default();
        shop.free_shipping_threshold = Money(5_000);
        let rules = PricingRules::from_config(&shop);

        let cart = cart_with(&[("3", 2)]);
        let summary = OrderSummary::compute(&cart, "", &rules);
        assert_eq!(summary.delivery_fee, Money::ZERO);
    }

    #[tokio::test]
    async fn test_simulated_checkout_confirms() {
        let checkout = SimulatedCheckout::new(Duration::from_millis(5));
        let order = OrderSummary::from_subtotal(Money(2_250), 1, "", &PricingRules::default());

        let result = checkout.submit(&order).await;

        let confirmation = result.success().unwrap();
        assert_eq!(confirmation.total, Money(4_750));
        assert_eq!(confirmation.message, CHECKOUT_CONFIRMATION);
        assert_eq!(checkout.operation(), "checkout");
    }

    #[test]
    fn test_simulated_checkout_with_block_on() {
        let checkout = SimulatedCheckout::new(Duration::ZERO);
        let order = OrderSummary::from_subtotal(Money(30_000), 2, "welcome10", &PricingRules::default());

        let result = tokio_test::block_on(checkout.submit(&order));
        assert_eq!(result.into_result("checkout").unwrap().total, Money(27_000));
    }
}
