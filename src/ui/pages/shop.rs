// src/ui/pages/shop.rs - Catalog browser with search, category, price and sort filters

use std::str::FromStr;

use dioxus::prelude::*;

use super::PageHero;
use crate::catalog::{self, FilterQuery, PriceRange, Product, SortKey, ALL_CATEGORIES};
use crate::ui::components::{Button, EmptyState, FormField, Input, ProductCard, Select, SelectOption};
use crate::ui::services::use_services;
use crate::utils::strings::pluralize;

/// Parses a select value, keeping the current one if it is not recognised
fn parse_or_keep<T>(value: &str, current: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(value, error = %err, "ignoring filter value");
            current
        }
    }
}

/// "3 produits trouvés"
pub fn results_label(count: usize) -> String {
    let found = if count > 1 { "trouvés" } else { "trouvé" };
    format!("{} {}", pluralize(count, "produit"), found)
}

/// Shop page. `initial_category` primes the category filter on mount.
#[component]
pub fn Shop(#[props(default = None)] initial_category: Option<String>) -> Element {
    let services = use_services();
    let mut query = use_signal(|| match initial_category {
        Some(category) if !category.is_empty() => FilterQuery::with_category(category),
        _ => FilterQuery::default(),
    });

    let current = query();
    let currency = services.config.shop.currency_label.clone();
    let products: Vec<Product> = catalog::apply(services.catalog.products(), &current)
        .into_iter()
        .cloned()
        .collect();

    let category_options: Vec<SelectOption> = std::iter::once(SelectOption::new(
        ALL_CATEGORIES,
        "Toutes les catégories",
    ))
    .chain(
        services
            .catalog
            .categories()
            .iter()
            .map(|c| SelectOption::new(c.id.clone(), c.label.clone())),
    )
    .collect();
    let price_options: Vec<SelectOption> = PriceRange::ALL
        .iter()
        .map(|range| SelectOption::new(range.as_str(), range.label(&currency)))
        .collect();
    let sort_options: Vec<SelectOption> = SortKey::ALL
        .iter()
        .map(|key| SelectOption::new(key.as_str(), key.label()))
        .collect();

    let count_label = results_label(products.len());

    rsx! {
        PageHero {
            title: "Notre boutique".to_string(),
            subtitle: "Découvrez notre sélection de légumes biologiques frais, cultivés avec passion par nos producteurs sénégalais. Des produits de qualité, directement du champ à votre table.".to_string(),
            div {
                class: "flex flex-wrap items-center justify-center gap-6 text-sm text-gray-600",
                span { "✓ Livraison gratuite à Dakar" }
                span { "✓ Produits 100% bio" }
                span { "✓ Fraîcheur garantie" }
            }
        }

        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            div {
                class: "grid grid-cols-1 lg:grid-cols-4 gap-8",

                aside {
                    class: "lg:col-span-1",
                    div {
                        class: "bg-white rounded-2xl shadow-lg p-6 space-y-6 lg:sticky lg:top-24",
                        h3 {
                            class: "text-lg font-semibold text-gray-900",
                            "Filtres"
                        }

                        FormField {
                            label: "Rechercher".to_string(),
                            id: "shop-search".to_string(),
                            Input {
                                id: "shop-search".to_string(),
                                placeholder: "Nom du produit...".to_string(),
                                value: current.search.clone(),
                                oninput: move |evt: FormEvent| query.write().search = evt.value(),
                            }
                        }

                        FormField {
                            label: "Catégorie".to_string(),
                            id: "shop-category".to_string(),
                            Select {
                                id: "shop-category".to_string(),
                                value: current.category.clone(),
                                options: category_options,
                                onchange: move |value: String| query.write().category = value,
                            }
                        }

                        FormField {
                            label: "Gamme de prix".to_string(),
                            id: "shop-price".to_string(),
                            Select {
                                id: "shop-price".to_string(),
                                value: current.price_range.as_str().to_string(),
                                options: price_options,
                                onchange: move |value: String| {
                                    let mut query = query.write();
                                    query.price_range = parse_or_keep(&value, query.price_range);
                                },
                            }
                        }

                        FormField {
                            label: "Trier par".to_string(),
                            id: "shop-sort".to_string(),
                            Select {
                                id: "shop-sort".to_string(),
                                value: current.sort.as_str().to_string(),
                                options: sort_options,
                                onchange: move |value: String| {
                                    let mut query = query.write();
                                    query.sort = parse_or_keep(&value, query.sort);
                                },
                            }
                        }

                        if current.is_narrowing() {
                            Button {
                                variant: "outline".to_string(),
                                class: "w-full".to_string(),
                                onclick: move |_| query.set(FilterQuery::default()),
                                "Effacer les filtres"
                            }
                        }
                    }
                }

                div {
                    class: "lg:col-span-3",
                    p {
                        class: "text-gray-600 mb-6",
                        "{count_label}"
                    }

                    if products.is_empty() {
                        EmptyState {
                            icon: "🥕".to_string(),
                            title: "Aucun résultat".to_string(),
                            message: "Aucun produit ne correspond à vos critères de recherche.".to_string(),
                            action: rsx! {
                                Button {
                                    variant: "outline".to_string(),
                                    onclick: move |_| query.set(FilterQuery::default()),
                                    "Effacer les filtres"
                                }
                            },
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8",
                            for product in products {
                                ProductCard { key: "{product.id}", product: product.clone() }
                            }
                        }
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
    fn test_results_label() {
        assert_eq!(results_label(0), "0 produit trouvé");
        assert_eq!(results_label(1), "1 produit trouvé");
        assert_eq!(results_label(8), "8 produits trouvés");
    }

    #[test]
    fn test_parse_or_keep() {
        assert_eq!(parse_or_keep("rating", SortKey::Name), SortKey::Rating);
        assert_eq!(parse_or_keep("cheapest", SortKey::Name), SortKey::Name);
        assert_eq!(parse_or_keep("high", PriceRange::All), PriceRange::High);
    }
}
