// src/ui/layout/footer.rs - Newsletter band, site links and contact details

use chrono::Datelike;
use dioxus::prelude::*;

use super::header::LogoMark;
use super::ShopContact;
use crate::contact::NewsletterSignup;
use crate::navigation::Page;
use crate::submission::{SubmissionResult, SubmissionService};
use crate::ui::components::Button;
use crate::ui::services::use_services;
use crate::ui::state::{use_navigate, use_store_dispatch, StoreAction};
use crate::ui::Notification;
use crate::utils::Time;

/// Category shortcuts listed in the footer
const FOOTER_CATEGORIES: [&str; 4] = ["tomatoes", "leafy", "roots", "seasonal"];

/// Footer component
#[component]
pub fn Footer() -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();
    let navigate = use_navigate();

    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let subscribe = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *submitting.peek() {
                return;
            }

            let signup = NewsletterSignup {
                email: email.peek().trim().to_string(),
            };
            let newsletter = services.newsletter.clone();
            submitting.set(true);

            spawn(async move {
                match newsletter.submit(&signup).await {
                    SubmissionResult::Success(message) => {
                        email.set(String::new());
                        dispatch(StoreAction::Notify(Notification::success(message)));
                    }
                    SubmissionResult::Failure(reason) => {
                        tracing::debug!(reason = %reason, "newsletter signup refused");
                        dispatch(StoreAction::Notify(Notification::error(reason)));
                    }
                    SubmissionResult::Pending => {}
                }
                submitting.set(false);
            });
        }
    };

    let pending = submitting();
    let categories: Vec<(&'static str, String)> = FOOTER_CATEGORIES
        .iter()
        .map(|id| (*id, services.catalog.category_label(id).to_string()))
        .collect();
    let year = Time::now().year();
    let street = ShopContact::ADDRESS[0];
    let phone = ShopContact::PHONES[0];
    let mail = ShopContact::EMAILS[0];

    rsx! {
        footer {
            class: "bg-gray-900 text-white",

            div {
                class: "bg-green-600",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                    div {
                        class: "max-w-2xl mx-auto text-center",
                        h3 {
                            class: "text-2xl font-bold mb-3",
                            "Restez informé de nos dernières nouveautés"
                        }
                        p {
                            class: "text-green-100 mb-6",
                            "Inscrivez-vous à notre newsletter et recevez nos offres exclusives, conseils de jardinage et actualités des producteurs locaux."
                        }
                        form {
                            class: "flex flex-col sm:flex-row gap-3 max-w-md mx-auto",
                            onsubmit: subscribe,
                            input {
                                r#type: "email",
                                placeholder: "Votre adresse email",
                                value: "{email}",
                                disabled: pending,
                                class: "flex-1 rounded-lg px-4 py-2 text-gray-900 border-0 focus:ring-2 focus:ring-white",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            Button {
                                button_type: "submit".to_string(),
                                variant: "light".to_string(),
                                loading: pending,
                                "S'inscrire"
                            }
                        }
                    }
                }
            }

            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div {
                    class: "grid grid-cols-1 md:grid-cols-4 gap-8",

                    div {
                        class: "space-y-4",
                        LogoMark { text_class: "text-white".to_string() }
                        p {
                            class: "text-gray-400 text-sm",
                            "Votre partenaire de confiance pour des légumes biologiques frais, cultivés avec passion par nos producteurs locaux."
                        }
                    }

                    div {
                        h4 {
                            class: "font-semibold text-lg mb-4",
                            "Navigation"
                        }
                        ul {
                            class: "space-y-2",
                            for page in Page::MENU {
                                li {
                                    key: "{page.as_str()}",
                                    button {
                                        r#type: "button",
                                        class: "text-gray-400 hover:text-white transition-colors duration-200",
                                        onclick: move |_| dispatch(StoreAction::navigate(page)),
                                        "{page.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 {
                            class: "font-semibold text-lg mb-4",
                            "Catégories"
                        }
                        ul {
                            class: "space-y-2",
                            for (category, label) in categories {
                                li {
                                    key: "{category}",
                                    button {
                                        r#type: "button",
                                        class: "text-gray-400 hover:text-white transition-colors duration-200",
                                        onclick: move |_| navigate((Page::Shop, None, Some(category.to_string()))),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 {
                            class: "font-semibold text-lg mb-4",
                            "Contact"
                        }
                        div {
                            class: "space-y-3 text-gray-400 text-sm",
                            p {
                                "{street}"
                                br {}
                                "Dakar, Sénégal"
                            }
                            p { "{phone}" }
                            p { "{mail}" }
                        }
                    }
                }
            }

            div {
                class: "border-t border-gray-800",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-gray-400",
                    p { "© {year} FreshVeg. Tous droits réservés." }
                    div {
                        class: "flex space-x-6",
                        span { "Mentions légales" }
                        span { "Politique de confidentialité" }
                        span { "CGV" }
                    }
                }
            }
        }
    }
}
