// src/ui/services/mod.rs - Shared services injected into every view

use std::sync::Arc;

use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::checkout::{OrderConfirmation, OrderSummary, PricingRules, SimulatedCheckout};
use crate::config::StoreConfig;
use crate::contact::{
    ContactForm, ContactReceipt, NewsletterSignup, SimulatedContact, SimulatedNewsletter,
};
use crate::submission::SubmissionService;

pub type CheckoutService = dyn SubmissionService<OrderSummary, Ack = OrderConfirmation>;
pub type ContactService = dyn SubmissionService<ContactForm, Ack = ContactReceipt>;
pub type NewsletterService = dyn SubmissionService<NewsletterSignup, Ack = String>;

/// Read-only catalog, settings and submission backends shared by all views
#[derive(Clone)]
pub struct StoreServices {
    pub catalog: Arc<Catalog>,
    pub config: Arc<StoreConfig>,
    pub pricing: PricingRules,
    pub checkout: Arc<CheckoutService>,
    pub contact: Arc<ContactService>,
    pub newsletter: Arc<NewsletterService>,
}

impl StoreServices {
    /// Seed catalog plus the simulated backends, timed from `config`
    pub fn simulated(config: StoreConfig) -> Self {
        Self {
            catalog: Catalog::seed(),
            pricing: PricingRules::from_config(&config.shop),
            checkout: Arc::new(SimulatedCheckout::from_config(&config.shop)),
            contact: Arc::new(SimulatedContact::from_config(&config.shop)),
            newsletter: Arc::new(SimulatedNewsletter::from_config(&config.shop)),
            config: Arc::new(config),
        }
    }

    pub fn format_money(&self, amount: crate::types::Money) -> String {
        self.config.shop.format_money(amount)
    }
}

impl std::fmt::Debug for StoreServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreServices")
            .field("products", &self.catalog.len())
            .field("pricing", &self.pricing)
            .finish()
    }
}

/// Hook to access the shared services
pub fn use_services() -> StoreServices {
    use_context::<StoreServices>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;

    #[test]
    fn test_simulated_services_share_the_seed_catalog() {
        let services = StoreServices::simulated(StoreConfig::default());

        assert!(Arc::ptr_eq(&services.catalog, &Catalog::seed()));
        assert_eq!(services.pricing.free_shipping_threshold, Money(25_000));
        assert_eq!(services.checkout.operation(), "checkout");
        assert_eq!(services.format_money(Money(975)), "975 F CFA");
    }
}
