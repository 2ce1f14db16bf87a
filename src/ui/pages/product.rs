// src/ui/pages/product.rs - Product detail page

use dioxus::prelude::*;

use super::PageWrapper;
use crate::catalog::{Product, ProductDetails, RELATED_LIMIT};
use crate::navigation::Page;
use crate::types::ProductId;
use crate::ui::components::{
    badge_variant, Badge, Button, Card, EmptyState, ImageWithFallback, PriceTag, ProductCard,
    QuantityStepper, RatingStars,
};
use crate::ui::services::use_services;
use crate::ui::state::{use_store_dispatch, StoreAction};

const GUARANTEES: [&str; 4] = [
    "🚚 Livraison 24h",
    "🛡 Qualité garantie",
    "🌿 100% biologique",
    "⏱ Fraîcheur optimale",
];

/// Product page for `product_id`; renders a not-found state for unknown ids
#[component]
pub fn ProductPage(#[props(default = None)] product_id: Option<ProductId>) -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();

    let product = product_id
        .as_deref()
        .and_then(|id| services.catalog.get(id))
        .cloned();

    let Some(product) = product else {
        tracing::debug!(product_id = ?product_id, "product page for unknown product");
        return rsx! {
            PageWrapper {
                EmptyState {
                    icon: "🥬".to_string(),
                    title: "Produit non trouvé".to_string(),
                    message: "Ce produit n'existe pas ou n'est plus disponible.".to_string(),
                    action: rsx! {
                        Button {
                            onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                            "Retour à la boutique"
                        }
                    },
                }
            }
        };
    };

    let related: Vec<Product> = services
        .catalog
        .related(&product.id, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        PageWrapper {
            button {
                r#type: "button",
                class: "text-sm text-gray-600 hover:text-green-600",
                onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                "← Retour à la boutique"
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-12",
                ProductGallery { product: product.clone() }
                ProductSummary { product: product.clone() }
            }

            if let Some(details) = product.details.clone() {
                ProductFacts { details, season: product.season.clone() }
            }

            if !related.is_empty() {
                section {
                    class: "pt-8",
                    h2 {
                        class: "text-2xl font-bold text-gray-900 mb-8",
                        "Produits similaires"
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        for item in related {
                            ProductCard { key: "{item.id}", product: item.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductGallery(product: Product) -> Element {
    let mut selected = use_signal(|| 0usize);
    let images: Vec<String> = product.gallery().into_iter().map(str::to_string).collect();
    let index = selected().min(images.len().saturating_sub(1));
    let main_image = images.get(index).cloned().unwrap_or_else(|| product.image.clone());

    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "relative rounded-2xl overflow-hidden shadow-lg",
                ImageWithFallback {
                    src: main_image,
                    alt: product.name.clone(),
                    class: "w-full h-96 object-cover".to_string(),
                }
                if let Some(badge) = product.badge.clone() {
                    Badge {
                        variant: badge_variant(&badge).to_string(),
                        class: "absolute top-4 left-4".to_string(),
                        "{badge}"
                    }
                }
            }
            if images.len() > 1 {
                div {
                    class: "grid grid-cols-4 gap-4",
                    for (position, image) in images.into_iter().enumerate() {
                        button {
                            key: "{position}",
                            r#type: "button",
                            class: if position == index { "rounded-lg overflow-hidden ring-2 ring-green-500" } else { "rounded-lg overflow-hidden" },
                            onclick: move |_| selected.set(position),
                            ImageWithFallback {
                                src: image,
                                alt: format!("{} {}", product.name, position + 1),
                                class: "w-full h-20 object-cover".to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductSummary(product: Product) -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();
    let mut quantity = use_signal(|| 1u32);

    let category = services.catalog.category_label(&product.category).to_string();
    let review_count = product.details.as_ref().map(|d| d.review_count);
    let description = product
        .details
        .as_ref()
        .map(|d| d.long_description.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| product.description.clone());
    let features = product
        .details
        .as_ref()
        .map(|d| d.features.clone())
        .unwrap_or_default();
    let savings = product.savings().map(|amount| services.format_money(amount));
    let line_price = services.format_money(product.price * quantity());
    let product_id = product.id.clone();

    rsx! {
        div {
            class: "space-y-6",
            div {
                Badge { variant: "light".to_string(), class: "mb-2".to_string(), "{category}" }
                h1 {
                    class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                    "{product.name}"
                }
                RatingStars { rating: product.rating, review_count }
                div {
                    class: "flex items-baseline gap-3 mt-4",
                    PriceTag {
                        price: product.price,
                        original_price: product.original_price,
                        size: "text-3xl".to_string(),
                    }
                    span {
                        class: "text-sm text-gray-600",
                        "/ {product.weight}"
                    }
                }
                if let Some(savings) = savings {
                    p { class: "text-sm font-medium text-red-600 mt-1", "Vous économisez {savings}" }
                }
            }

            hr { class: "border-gray-200" }

            div {
                h3 { class: "text-lg font-semibold text-gray-900 mb-3", "Description" }
                p { class: "text-gray-700 leading-relaxed", "{description}" }
            }

            if !features.is_empty() {
                div {
                    h3 { class: "text-lg font-semibold text-gray-900 mb-3", "Caractéristiques" }
                    ul {
                        class: "space-y-2",
                        for feature in features {
                            li {
                                key: "{feature}",
                                class: "flex items-center space-x-2 text-gray-700",
                                span { class: "text-green-500", "✓" }
                                span { "{feature}" }
                            }
                        }
                    }
                }
            }

            hr { class: "border-gray-200" }

            div {
                class: "space-y-4",
                div {
                    class: "flex items-center space-x-4",
                    label { class: "text-sm font-medium text-gray-700", "Quantité :" }
                    QuantityStepper {
                        quantity: quantity(),
                        on_change: move |next: u32| quantity.set(next),
                    }
                }
                Button {
                    size: "lg".to_string(),
                    class: "w-full sm:w-auto".to_string(),
                    onclick: move |_| dispatch(StoreAction::add_to_cart(product_id.clone(), quantity())),
                    "Ajouter au panier - {line_price}"
                }
            }

            div {
                class: "grid grid-cols-2 gap-4 text-sm text-gray-600",
                for guarantee in GUARANTEES {
                    span { key: "{guarantee}", "{guarantee}" }
                }
            }
        }
    }
}

#[component]
fn ProductFacts(details: ProductDetails, season: Option<String>) -> Element {
    let season = if details.harvest_season.is_empty() {
        season.unwrap_or_default()
    } else {
        details.harvest_season.clone()
    };

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-8",
            if !details.nutrition.is_empty() {
                Card {
                    title: "Informations nutritionnelles".to_string(),
                    div {
                        class: "space-y-3",
                        for fact in details.nutrition.iter() {
                            div {
                                key: "{fact.label}",
                                class: "flex justify-between",
                                span { class: "text-gray-600", "{fact.label}" }
                                span { class: "font-medium", "{fact.value}" }
                            }
                        }
                    }
                }
            }
            Card {
                title: "Origine & Conservation".to_string(),
                div {
                    class: "space-y-3",
                    FactRow { label: "Origine".to_string(), value: details.origin.clone() }
                    FactRow { label: "Producteur".to_string(), value: details.producer.clone() }
                    FactRow { label: "Saison".to_string(), value: season }
                    if !details.storage.is_empty() {
                        hr { class: "border-gray-200" }
                        p { class: "text-sm text-gray-600 leading-relaxed", "{details.storage}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FactRow(label: String, value: String) -> Element {
    if value.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex justify-between",
            span { class: "text-gray-600", "{label}" }
            span { class: "font-medium", "{value}" }
        }
    }
}
