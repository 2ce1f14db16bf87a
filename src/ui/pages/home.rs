// src/ui/pages/home.rs - Landing page: hero, featured carousel, categories, testimonials

use dioxus::prelude::*;

use super::{SectionHeading, StatBlock};
use crate::catalog::{next_slide, prev_slide, CategoryInfo, Product};
use crate::navigation::Page;
use crate::ui::components::{Button, ImageWithFallback, ProductCard};
use crate::ui::services::use_services;
use crate::ui::state::{use_store_dispatch, StoreAction};
use crate::utils::strings::initials;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1618254676841-71055a17efc2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmcmVzaCUyMHZlZ2V0YWJsZXMlMjBiYXNrZXQlMjBmYXJtfGVufDF8fHx8MTc1NjgxOTUwMnww&ixlib=rb-4.1.0&q=80&w=1080";

struct Testimonial {
    name: &'static str,
    location: &'static str,
    rating: usize,
    comment: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Marie Dubois",
        location: "Paris",
        rating: 5,
        comment: "Des légumes d'une fraîcheur exceptionnelle ! La livraison est rapide et l'emballage soigné. Je recommande vivement FreshVeg.",
    },
    Testimonial {
        name: "Pierre Martin",
        location: "Lyon",
        rating: 5,
        comment: "Enfin des vrais légumes avec du goût ! Les tomates cerises sont un délice, on sent vraiment la différence avec le bio.",
    },
    Testimonial {
        name: "Sophie Laurent",
        location: "Marseille",
        rating: 5,
        comment: "Service client au top et produits de qualité. Mes enfants adorent les carottes, c'est un exploit ! Merci FreshVeg.",
    },
];

/// Home page component
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        FeaturedProducts {}
        Categories {}
        Testimonials {}
    }
}

#[component]
fn Hero() -> Element {
    let dispatch = use_store_dispatch();

    rsx! {
        section {
            class: "relative h-[90vh] min-h-[600px] overflow-hidden",
            div {
                class: "absolute inset-0",
                ImageWithFallback {
                    src: HERO_IMAGE.to_string(),
                    alt: "Légumes frais du potager".to_string(),
                    class: "w-full h-full object-cover".to_string(),
                }
                div { class: "absolute inset-0 bg-gradient-to-r from-black/70 via-black/40 to-transparent" }
            }
            div {
                class: "relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-full flex items-center",
                div {
                    class: "max-w-2xl",
                    div {
                        class: "inline-flex items-center space-x-2 bg-green-500/20 border border-green-400/40 text-green-300 px-4 py-2 rounded-full mb-6",
                        span { "★" }
                        span { class: "text-sm font-medium", "100% Bio & Local" }
                    }
                    h1 {
                        class: "text-4xl md:text-6xl font-bold text-white mb-6 leading-tight",
                        "Des légumes frais,"
                        span { class: "block text-green-400", "du champ à votre assiette" }
                    }
                    p {
                        class: "text-xl text-gray-200 mb-8 leading-relaxed",
                        "Découvrez notre sélection de légumes biologiques, cultivés avec passion par nos producteurs locaux. Fraîcheur et qualité garanties."
                    }
                    div {
                        class: "flex flex-col sm:flex-row gap-4",
                        Button {
                            size: "lg".to_string(),
                            onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                            "Découvrir nos produits →"
                        }
                        Button {
                            size: "lg".to_string(),
                            variant: "light".to_string(),
                            onclick: move |_| dispatch(StoreAction::navigate(Page::About)),
                            "En savoir plus"
                        }
                    }
                    div {
                        class: "flex items-center space-x-8 mt-12",
                        StatBlock { value: "500+".to_string(), label: "Produits frais".to_string(), value_class: "text-white".to_string(), label_class: "text-gray-300".to_string() }
                        StatBlock { value: "15".to_string(), label: "Producteurs locaux".to_string(), value_class: "text-white".to_string(), label_class: "text-gray-300".to_string() }
                        StatBlock { value: "4.8★".to_string(), label: "Satisfaction client".to_string(), value_class: "text-white".to_string(), label_class: "text-gray-300".to_string() }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedProducts() -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();
    let mut current = use_signal(|| 0usize);

    let slides: Vec<Vec<Product>> = services
        .catalog
        .featured_slides(services.config.ui.featured_per_slide)
        .into_iter()
        .map(|slide| slide.into_iter().cloned().collect())
        .collect();
    let slide_count = slides.len();
    let active = current().min(slide_count.saturating_sub(1));
    let visible = slides.get(active).cloned().unwrap_or_default();

    rsx! {
        section {
            class: "py-20 bg-white",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex items-end justify-between mb-12",
                    div {
                        h2 {
                            class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                            "Nos produits phares"
                        }
                        p {
                            class: "text-lg text-gray-600",
                            "Découvrez nos légumes les plus appréciés par nos clients"
                        }
                    }
                    if slide_count > 1 {
                        div {
                            class: "hidden md:flex space-x-2",
                            button {
                                r#type: "button",
                                class: "w-10 h-10 rounded-full border border-gray-300 hover:bg-green-50",
                                aria_label: "Précédent",
                                onclick: move |_| current.set(prev_slide(active, slide_count)),
                                "‹"
                            }
                            button {
                                r#type: "button",
                                class: "w-10 h-10 rounded-full border border-gray-300 hover:bg-green-50",
                                aria_label: "Suivant",
                                onclick: move |_| current.set(next_slide(active, slide_count)),
                                "›"
                            }
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for product in visible {
                        ProductCard { key: "{product.id}", product: product.clone() }
                    }
                }

                if slide_count > 1 {
                    div {
                        class: "flex justify-center space-x-2 mt-8",
                        for index in 0..slide_count {
                            button {
                                key: "{index}",
                                r#type: "button",
                                class: if index == active { "w-3 h-3 rounded-full bg-green-500" } else { "w-3 h-3 rounded-full bg-gray-300" },
                                aria_label: format!("Diapositive {}", index + 1),
                                onclick: move |_| current.set(index),
                            }
                        }
                    }
                }

                div {
                    class: "text-center mt-12",
                    Button {
                        size: "lg".to_string(),
                        variant: "outline".to_string(),
                        onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                        "Voir tous nos produits"
                    }
                }
            }
        }
    }
}

#[component]
fn Categories() -> Element {
    let services = use_services();
    let categories: Vec<CategoryInfo> = services.catalog.categories().to_vec();

    rsx! {
        section {
            class: "py-20 bg-gray-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Nos catégories de légumes".to_string(),
                    lead: "Explorez notre large gamme de légumes biologiques, soigneusement sélectionnés pour leur fraîcheur et leur qualité exceptionnelle.".to_string(),
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for category in categories {
                        CategoryCard { key: "{category.id}", category: category.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: CategoryInfo) -> Element {
    let dispatch = use_store_dispatch();
    let id = category.id.clone();

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-lg overflow-hidden cursor-pointer group hover:shadow-xl transition-shadow",
            onclick: move |_| dispatch(StoreAction::browse_category(id.clone())),
            div {
                class: "relative h-48 overflow-hidden",
                ImageWithFallback {
                    src: category.image.clone(),
                    alt: category.label.clone(),
                    class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-500".to_string(),
                }
                span {
                    class: "absolute bottom-3 left-3 bg-white/90 text-green-700 text-sm font-medium px-3 py-1 rounded-full",
                    "{category.variety_note}"
                }
            }
            div {
                class: "p-6",
                h3 {
                    class: "text-xl font-semibold text-gray-900 mb-2 group-hover:text-green-600 transition-colors duration-200",
                    "{category.label}"
                }
                p {
                    class: "text-gray-600 leading-relaxed",
                    "{category.description}"
                }
            }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    rsx! {
        section {
            class: "py-20 bg-green-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Ce que disent nos clients".to_string(),
                    lead: "Découvrez les avis de nos clients satisfaits qui ont choisi la qualité et la fraîcheur de nos légumes biologiques.".to_string(),
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for testimonial in TESTIMONIALS.iter() {
                        div {
                            key: "{testimonial.name}",
                            class: "bg-white rounded-2xl shadow-lg p-8",
                            div {
                                class: "text-yellow-400 mb-4",
                                for star in 0..testimonial.rating {
                                    span { key: "{star}", "★" }
                                }
                            }
                            p {
                                class: "text-gray-700 leading-relaxed mb-6 italic",
                                "« {testimonial.comment} »"
                            }
                            div {
                                class: "flex items-center space-x-3",
                                div {
                                    class: "w-12 h-12 rounded-full bg-green-100 text-green-700 font-semibold flex items-center justify-center",
                                    "{initials(testimonial.name)}"
                                }
                                div {
                                    div { class: "font-semibold text-gray-900", "{testimonial.name}" }
                                    div { class: "text-sm text-gray-500", "{testimonial.location}" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "mt-16 bg-white rounded-2xl p-8 shadow-lg grid grid-cols-2 md:grid-cols-4 gap-8",
                    StatBlock { value: "4.8/5".to_string(), label: "Note moyenne".to_string() }
                    StatBlock { value: "1 200+".to_string(), label: "Avis clients".to_string() }
                    StatBlock { value: "98%".to_string(), label: "Clients satisfaits".to_string() }
                    StatBlock { value: "24h".to_string(), label: "Livraison rapide".to_string() }
                }
            }
        }
    }
}
