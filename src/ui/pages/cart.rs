// src/ui/pages/cart.rs - Cart lines, promo code, order summary and checkout

use dioxus::prelude::*;

use super::PageWrapper;
use crate::cart::CartLineItem;
use crate::checkout::OrderSummary;
use crate::navigation::Page;
use crate::submission::{SubmissionResult, SubmissionService};
use crate::types::Money;
use crate::ui::components::{
    Alert, Button, Card, EmptyState, ImageWithFallback, Input, QuantityStepper,
};
use crate::ui::services::use_services;
use crate::ui::state::{use_store_dispatch, use_store_state, StoreAction};
use crate::ui::Notification;
use crate::utils::strings::pluralize;

/// Cart page component
#[component]
pub fn CartPage() -> Element {
    let state = use_store_state();
    let dispatch = use_store_dispatch();

    let back_to_shop = rsx! {
        button {
            r#type: "button",
            class: "text-sm text-gray-600 hover:text-green-600",
            onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
            "← Continuer mes achats"
        }
    };

    if state.cart.is_empty() {
        return rsx! {
            PageWrapper {
                {back_to_shop}
                EmptyState {
                    icon: "🛍".to_string(),
                    title: "Votre panier est vide".to_string(),
                    message: "Découvrez notre sélection de légumes biologiques frais".to_string(),
                    action: rsx! {
                        Button {
                            size: "lg".to_string(),
                            onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                            "Découvrir nos produits"
                        }
                    },
                }
            }
        };
    }

    let title = format!("Mon panier ({})", pluralize(state.cart.line_count(), "article"));
    let items = state.cart.items().to_vec();

    rsx! {
        PageWrapper {
            {back_to_shop}
            h1 {
                class: "text-3xl font-bold text-gray-900",
                "{title}"
            }
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                div {
                    class: "lg:col-span-2 space-y-4",
                    for item in items {
                        CartLine { key: "{item.id}", item: item.clone() }
                    }
                }
                CheckoutPanel {}
            }
        }
    }
}

#[component]
fn CartLine(item: CartLineItem) -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();

    let unit_price = services.format_money(item.price);
    let line_total = services.format_money(item.line_total());
    let update_id = item.id.clone();
    let remove_id = item.id.clone();

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-lg p-6 flex flex-col sm:flex-row sm:items-center gap-6",
            ImageWithFallback {
                src: item.image.clone(),
                alt: item.name.clone(),
                class: "w-24 h-24 rounded-lg object-cover".to_string(),
            }
            div {
                class: "flex-1",
                h3 { class: "font-semibold text-gray-900 mb-1", "{item.name}" }
                p { class: "text-sm text-gray-500 mb-2", "{item.weight}" }
                div {
                    class: "flex items-baseline gap-2",
                    span { class: "text-lg font-bold text-green-600", "{unit_price}" }
                    span { class: "text-sm text-gray-500", "/ pièce" }
                }
            }
            QuantityStepper {
                quantity: item.quantity,
                compact: true,
                on_change: move |quantity: u32| dispatch(StoreAction::UpdateQuantity {
                    item_id: update_id.clone(),
                    quantity,
                }),
            }
            div {
                class: "text-lg font-bold text-gray-900 sm:w-32 sm:text-right",
                "{line_total}"
            }
            Button {
                variant: "danger".to_string(),
                size: "icon".to_string(),
                onclick: move |_| dispatch(StoreAction::RemoveItem(remove_id.clone())),
                span { class: "sr-only", "Retirer" }
                "🗑"
            }
        }
    }
}

#[component]
fn CheckoutPanel() -> Element {
    let services = use_services();
    let state = use_store_state();
    let dispatch = use_store_dispatch();

    let mut promo_input = use_signal(String::new);
    let mut checking_out = use_signal(|| false);

    let summary = OrderSummary::compute(&state.cart, &promo_input.read(), &services.pricing);
    let promo = services.pricing.promo.clone();
    let money = |amount: Money| services.format_money(amount);

    let subtotal = money(summary.subtotal);
    let delivery = if summary.delivery_fee.is_zero() {
        "Gratuite".to_string()
    } else {
        money(summary.delivery_fee)
    };
    let discount = money(summary.discount);
    let total = money(summary.total);
    let remaining = summary.free_shipping_remaining.map(money);
    let promo_label = promo.code.to_uppercase();
    let free_shipping_from = money(services.pricing.free_shipping_threshold);

    let apply_promo = {
        let promo = promo.clone();
        move |_: MouseEvent| {
            let input = promo_input.peek().clone();
            let notification = if promo.matches(&input) {
                Notification::success(format!("Code appliqué : -{}% sur votre commande", promo.percent))
            } else {
                Notification::error("Code promo invalide")
            };
            dispatch(StoreAction::Notify(notification));
        }
    };

    let checkout = {
        let services = services.clone();
        let summary = summary.clone();
        move |_: MouseEvent| {
            if *checking_out.peek() {
                return;
            }
            checking_out.set(true);

            let service = services.checkout.clone();
            let order = summary.clone();
            spawn(async move {
                match service.submit(&order).await {
                    SubmissionResult::Success(confirmation) => {
                        tracing::info!(
                            reference = %confirmation.reference,
                            total = confirmation.total.amount(),
                            "order confirmed"
                        );
                        dispatch(StoreAction::Notify(Notification::success(confirmation.message)));
                    }
                    SubmissionResult::Failure(reason) => {
                        tracing::warn!(reason = %reason, "checkout failed");
                        dispatch(StoreAction::Notify(Notification::error(reason)));
                    }
                    SubmissionResult::Pending => {}
                }
                checking_out.set(false);
            });
        }
    };

    let pending = checking_out();

    rsx! {
        div {
            class: "space-y-6",

            Card {
                title: "Code promotionnel".to_string(),
                div {
                    class: "space-y-3",
                    div {
                        class: "flex gap-2",
                        Input {
                            placeholder: "Entrez votre code".to_string(),
                            value: promo_input(),
                            oninput: move |evt: FormEvent| promo_input.set(evt.value()),
                        }
                        Button {
                            variant: "outline".to_string(),
                            disabled: promo_input.read().trim().is_empty(),
                            onclick: apply_promo,
                            "Appliquer"
                        }
                    }
                    if summary.promo_applied {
                        p {
                            class: "text-green-600 text-sm",
                            "✓ Code appliqué : -{promo.percent}% sur votre commande"
                        }
                    }
                }
            }

            Card {
                title: "Résumé de la commande".to_string(),
                div {
                    class: "space-y-3",
                    SummaryRow { label: "Sous-total".to_string(), value: subtotal }
                    SummaryRow { label: "Livraison".to_string(), value: delivery }
                    if summary.promo_applied {
                        div {
                            class: "flex justify-between text-green-600",
                            span { "Remise ({promo_label})" }
                            span { "-{discount}" }
                        }
                    }
                    hr { class: "border-gray-200" }
                    div {
                        class: "flex justify-between text-lg font-bold",
                        span { "Total" }
                        span { class: "text-green-600", "{total}" }
                    }
                }

                if let Some(remaining) = remaining {
                    Alert {
                        class: "mt-4".to_string(),
                        "Ajoutez {remaining} pour bénéficier de la livraison gratuite !"
                    }
                }

                Button {
                    size: "lg".to_string(),
                    class: "w-full mt-6".to_string(),
                    loading: pending,
                    onclick: checkout,
                    if pending { "Traitement..." } else { "Procéder au paiement" }
                }
            }

            Card {
                title: "Livraison rapide".to_string(),
                ul {
                    class: "space-y-1 text-sm text-gray-600",
                    li { "• Livraison en 24h pour toute commande avant 14h" }
                    li { "• Livraison gratuite au-delà de {free_shipping_from}" }
                    li { "• Emballage éco-responsable" }
                    li { "• Fraîcheur garantie" }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between",
            span { class: "text-gray-600", "{label}" }
            span { class: "font-medium", "{value}" }
        }
    }
}
