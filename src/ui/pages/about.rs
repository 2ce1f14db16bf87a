// src/ui/pages/about.rs - Brand story, values and service highlights

use dioxus::prelude::*;

use super::{PageHero, SectionHeading, StatBlock};
use crate::navigation::Page;
use crate::ui::components::{Button, Card, ImageWithFallback};
use crate::ui::state::{use_store_dispatch, StoreAction};

const FARMER_IMAGE: &str = "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmYXJtZXIlMjB2ZWdldGFibGVzJTIwZmllbGR8ZW58MXx8fHwxNzU2ODI5NTAyfDA&ixlib=rb-4.1.0&q=80&w=1080";

const VALUES: [(&str, &str, &str); 4] = [
    ("🌿", "Agriculture Bio", "Nous soutenons l'agriculture biologique locale et respectueuse de l'environnement sénégalais."),
    ("🤝", "Producteurs Locaux", "Partenariat direct avec les agriculteurs des régions de Niayes, Casamance et Fleuve."),
    ("🏅", "Qualité Premium", "Sélection rigoureuse et contrôle qualité pour vous garantir le meilleur de nos terres."),
    ("❤", "Passion du Terroir", "L'amour de la terre sénégalaise et de ses produits guide chacune de nos actions."),
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Producteurs partenaires"),
    ("15+", "Régions couvertes"),
    ("1000+", "Familles servies"),
    ("24h", "Fraîcheur garantie"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("✓", "Certification Bio", "Tous nos légumes sont certifiés biologiques selon les standards internationaux."),
    ("🚚", "Livraison Express", "Livraison gratuite dans le Grand Dakar sous 24h, fraîcheur préservée."),
    ("📱", "Commande Facile", "Interface simple et paiement mobile (Orange Money, Wave) pour votre confort."),
];

/// About page component
#[component]
pub fn About() -> Element {
    let dispatch = use_store_dispatch();

    rsx! {
        PageHero {
            title: "À propos de FreshVeg".to_string(),
            subtitle: "Votre partenaire de confiance pour des légumes biologiques frais, cultivés avec passion par nos producteurs sénégalais.".to_string(),
            div {
                class: "flex flex-col sm:flex-row gap-4 justify-center",
                Button {
                    size: "lg".to_string(),
                    onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                    "Découvrir nos produits"
                }
                Button {
                    size: "lg".to_string(),
                    variant: "outline".to_string(),
                    onclick: move |_| dispatch(StoreAction::navigate(Page::Contact)),
                    "Nous contacter"
                }
            }
        }

        section {
            class: "py-20",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
                div {
                    h2 {
                        class: "text-3xl md:text-4xl font-bold text-gray-900 mb-6",
                        "Notre mission : Des légumes frais, du champ à votre assiette"
                    }
                    p {
                        class: "text-lg text-gray-700 mb-6 leading-relaxed",
                        "Depuis notre création à Dakar, nous nous engageons à révolutionner la distribution de légumes biologiques au Sénégal. Notre plateforme connecte directement les consommateurs aux meilleurs producteurs locaux."
                    }
                    p {
                        class: "text-lg text-gray-700 mb-8 leading-relaxed",
                        "Nous croyons fermement que l'agriculture biologique est l'avenir de notre alimentation et de notre environnement. C'est pourquoi nous soutenons activement les pratiques agricoles durables dans nos régions."
                    }
                    div {
                        class: "grid grid-cols-2 gap-6",
                        for (value, label) in STATS {
                            StatBlock { key: "{label}", value: value.to_string(), label: label.to_string() }
                        }
                    }
                }
                ImageWithFallback {
                    src: FARMER_IMAGE.to_string(),
                    alt: "Producteur sénégalais dans son champ".to_string(),
                    class: "w-full h-96 object-cover rounded-2xl shadow-xl".to_string(),
                }
            }
        }

        section {
            class: "py-20 bg-gray-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Nos valeurs".to_string(),
                    lead: "Ce qui nous guide chaque jour dans notre engagement envers une agriculture durable au Sénégal".to_string(),
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for (icon, title, description) in VALUES {
                        Card {
                            key: "{title}",
                            class: "text-center".to_string(),
                            div {
                                class: "w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4 text-3xl",
                                "{icon}"
                            }
                            h3 { class: "text-xl font-semibold text-gray-900 mb-3", "{title}" }
                            p { class: "text-gray-600 leading-relaxed", "{description}" }
                        }
                    }
                }
            }
        }

        section {
            class: "py-20",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Pourquoi choisir FreshVeg ?".to_string(),
                    lead: "Une expérience d'achat moderne, adaptée au mode de vie sénégalais".to_string(),
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for (icon, title, description) in FEATURES {
                        div {
                            key: "{title}",
                            class: "text-center",
                            div {
                                class: "w-20 h-20 bg-green-600 text-white rounded-2xl flex items-center justify-center mx-auto mb-6 text-3xl",
                                "{icon}"
                            }
                            h3 { class: "text-xl font-semibold text-gray-900 mb-3", "{title}" }
                            p { class: "text-gray-600 leading-relaxed", "{description}" }
                        }
                    }
                }
            }
        }

        section {
            class: "py-20 bg-green-600 text-center",
            div {
                class: "max-w-4xl mx-auto px-4",
                h2 {
                    class: "text-3xl md:text-4xl font-bold text-white mb-6",
                    "Rejoignez la communauté FreshVeg"
                }
                p {
                    class: "text-xl text-green-100 mb-8",
                    "Découvrez le goût authentique des légumes biologiques sénégalais et soutenez nos producteurs locaux"
                }
                Button {
                    size: "lg".to_string(),
                    variant: "light".to_string(),
                    onclick: move |_| dispatch(StoreAction::navigate(Page::Shop)),
                    "Commencer mes achats"
                }
            }
        }
    }
}
