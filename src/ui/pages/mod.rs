// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

mod about;
mod cart;
mod contact;
mod home;
mod product;
mod shop;

pub use about::About;
pub use cart::CartPage;
pub use contact::Contact;
pub use home::Home;
pub use product::ProductPage;
pub use shop::Shop;

/// Centered content column with an optional page title
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6 {}", class),

            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h1 {
                            class: "text-3xl font-bold text-gray-900",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-gray-600",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "mt-4 flex md:mt-0 md:ml-4",
                            {actions}
                        }
                    }
                }
            }

            {children}
        }
    }
}

/// Green gradient banner at the top of content pages
#[component]
pub fn PageHero(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-gradient-to-br from-green-50 to-green-100 py-20",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center",
                h1 {
                    class: "text-4xl md:text-6xl font-bold text-gray-900 mb-6",
                    "{title}"
                }
                p {
                    class: "text-xl md:text-2xl text-gray-700 max-w-4xl mx-auto mb-8 leading-relaxed",
                    "{subtitle}"
                }
                {children}
            }
        }
    }
}

/// Title and lead paragraph for a page section
#[component]
pub fn SectionHeading(
    title: String,
    #[props(default = "".to_string())] lead: String,
) -> Element {
    rsx! {
        div {
            class: "text-center mb-12",
            h2 {
                class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                "{title}"
            }
            if !lead.is_empty() {
                p {
                    class: "text-xl text-gray-600 max-w-2xl mx-auto",
                    "{lead}"
                }
            }
        }
    }
}

/// Big number with a caption
#[component]
pub fn StatBlock(
    value: String,
    label: String,
    #[props(default = "text-green-600".to_string())] value_class: String,
    #[props(default = "text-gray-600".to_string())] label_class: String,
) -> Element {
    rsx! {
        div {
            class: "text-center",
            div {
                class: format!("text-3xl font-bold mb-1 {}", value_class),
                "{value}"
            }
            div {
                class: format!("text-sm {}", label_class),
                "{label}"
            }
        }
    }
}
