// src/ui/components/product.rs - Product presentation components

use dioxus::prelude::*;

use super::{badge_variant, Badge, Button};
use crate::cart::{step_quantity, Step};
use crate::catalog::Product;
use crate::types::Money;
use crate::ui::services::use_services;
use crate::ui::state::{use_store_dispatch, StoreAction};

/// Source to render: the placeholder once `src` itself has failed to load.
/// A new `src` gets a fresh attempt.
pub fn displayed_image_src<'a>(
    src: &'a str,
    failed_src: Option<&str>,
    placeholder: &'a str,
) -> &'a str {
    if failed_src == Some(src) {
        placeholder
    } else {
        src
    }
}

/// Image that swaps to the configured placeholder when loading fails
#[component]
pub fn ImageWithFallback(
    src: String,
    alt: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut failed_src = use_signal(|| None::<String>);

    let shown = displayed_image_src(
        &src,
        failed_src.read().as_deref(),
        &services.config.shop.placeholder_image,
    )
    .to_string();

    rsx! {
        img {
            src: "{shown}",
            alt: "{alt}",
            class: "{class}",
            onerror: move |_| {
                if failed_src.peek().as_deref() != Some(src.as_str()) {
                    tracing::debug!(src = %src, "image failed to load, using placeholder");
                    failed_src.set(Some(src.clone()));
                }
            }
        }
    }
}

/// Five stars filled up to the rounded rating
pub fn filled_stars(rating: f32) -> usize {
    rating.round().clamp(0.0, 5.0) as usize
}

#[component]
pub fn RatingStars(
    rating: f32,
    #[props(default = None)] review_count: Option<u32>,
    #[props(default = "text-sm".to_string())] size: String,
) -> Element {
    let filled = filled_stars(rating);

    rsx! {
        div {
            class: "flex items-center gap-1",
            span {
                class: "{size}",
                for index in 0..5usize {
                    span {
                        key: "{index}",
                        class: if index < filled { "text-yellow-400" } else { "text-gray-300" },
                        "★"
                    }
                }
            }
            span {
                class: "text-sm text-gray-600",
                "({rating:.1})"
            }
            if let Some(count) = review_count {
                span {
                    class: "text-sm text-gray-500",
                    "· {count} avis"
                }
            }
        }
    }
}

/// Current price with the struck-through original when discounted
#[component]
pub fn PriceTag(
    price: Money,
    #[props(default = None)] original_price: Option<Money>,
    #[props(default = "text-xl".to_string())] size: String,
) -> Element {
    let services = use_services();
    let current = services.format_money(price);
    let original = original_price
        .filter(|original| *original > price)
        .map(|original| services.format_money(original));

    rsx! {
        div {
            class: "flex items-baseline gap-2",
            span {
                class: format!("font-bold text-green-600 {}", size),
                "{current}"
            }
            if let Some(original) = original {
                span {
                    class: "text-sm text-gray-400 line-through",
                    "{original}"
                }
            }
        }
    }
}

/// Minus/plus control. Never goes below 1; removal has its own button.
#[component]
pub fn QuantityStepper(
    quantity: u32,
    on_change: Callback<u32>,
    #[props(default = false)] compact: bool,
) -> Element {
    let button_class = if compact {
        "w-8 h-8 flex items-center justify-center rounded-full border border-gray-300 hover:bg-gray-100 disabled:opacity-40"
    } else {
        "w-10 h-10 flex items-center justify-center rounded-full border border-gray-300 hover:bg-gray-100 text-lg disabled:opacity-40"
    };

    rsx! {
        div {
            class: "flex items-center gap-3",
            button {
                r#type: "button",
                class: button_class,
                aria_label: "Diminuer la quantité",
                disabled: quantity <= 1,
                onclick: move |_| on_change.call(step_quantity(quantity, Step::Decrement)),
                "−"
            }
            span {
                class: "w-8 text-center font-semibold",
                "{quantity}"
            }
            button {
                r#type: "button",
                class: button_class,
                aria_label: "Augmenter la quantité",
                onclick: move |_| on_change.call(step_quantity(quantity, Step::Increment)),
                "+"
            }
        }
    }
}

/// Grid card used by the shop, home carousel and related products
#[component]
pub fn ProductCard(product: Product) -> Element {
    let dispatch = use_store_dispatch();
    let product_id = product.id.clone();
    let cart_id = product.id.clone();

    let open_product = move |_| dispatch(StoreAction::view_product(product_id.clone()));

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-lg overflow-hidden hover:shadow-xl transition-shadow group flex flex-col",

            div {
                class: "relative h-48 overflow-hidden cursor-pointer",
                onclick: open_product.clone(),
                ImageWithFallback {
                    src: product.image.clone(),
                    alt: product.name.clone(),
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300".to_string(),
                }
                if let Some(badge) = product.badge.clone() {
                    Badge {
                        variant: badge_variant(&badge).to_string(),
                        class: "absolute top-3 left-3".to_string(),
                        "{badge}"
                    }
                }
                if let Some(season) = product.season.clone() {
                    Badge {
                        variant: "light".to_string(),
                        class: "absolute top-3 right-3".to_string(),
                        "{season}"
                    }
                }
            }

            div {
                class: "p-5 flex flex-col flex-1",
                h3 {
                    class: "text-lg font-semibold text-gray-900 mb-1 cursor-pointer hover:text-green-600",
                    onclick: open_product,
                    "{product.name}"
                }
                p {
                    class: "text-sm text-gray-500 mb-2",
                    "{product.weight}"
                }
                p {
                    class: "text-sm text-gray-600 mb-3 flex-1",
                    "{product.description}"
                }
                div {
                    class: "mb-4",
                    RatingStars { rating: product.rating }
                }
                div {
                    class: "flex items-center justify-between",
                    PriceTag {
                        price: product.price,
                        original_price: product.original_price,
                    }
                    Button {
                        size: "sm".to_string(),
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            dispatch(StoreAction::add_to_cart(cart_id.clone(), 1));
                        },
                        "Ajouter"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_stars_rounds_and_clamps() {
        assert_eq!(filled_stars(4.8), 5);
        assert_eq!(filled_stars(4.4), 4);
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(9.0), 5);
    }

    #[test]
    fn test_image_falls_back_after_load_error() {
        let placeholder = crate::config::DEFAULT_PLACEHOLDER_IMAGE;
        let tomatoes = "https://images.example/tomatoes.jpg";
        let carrots = "https://images.example/carrots.jpg";

        // first load
        assert_eq!(displayed_image_src(tomatoes, None, placeholder), tomatoes);
        // the same source failed
        assert_eq!(displayed_image_src(tomatoes, Some(tomatoes), placeholder), placeholder);
        // a different source after a failure gets its own attempt
        assert_eq!(displayed_image_src(carrots, Some(tomatoes), placeholder), carrots);
    }
}
