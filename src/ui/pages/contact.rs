// src/ui/pages/contact.rs - Contact details, message form and FAQ

use dioxus::prelude::*;

use super::{PageHero, SectionHeading};
use crate::contact::{ContactForm, ContactSubject, PreferredContact};
use crate::submission::{SubmissionResult, SubmissionService};
use crate::ui::components::{
    Button, Card, FormField, Input, Select, SelectOption, TextArea,
};
use crate::ui::layout::ShopContact;
use crate::ui::services::use_services;
use crate::ui::state::{use_store_dispatch, StoreAction};
use crate::ui::Notification;

/// Contact page component
#[component]
pub fn Contact() -> Element {
    let services = use_services();
    let threshold = services.format_money(services.pricing.free_shipping_threshold);

    let faq = [
        (
            "Quels sont les délais de livraison ?",
            format!(
                "Nous livrons dans le Grand Dakar sous 24h. Pour les autres régions, comptez 2-3 jours ouvrés. La livraison est gratuite pour les commandes supérieures à {}.",
                threshold
            ),
        ),
        (
            "Comment payer ma commande ?",
            "Nous acceptons Orange Money, Wave, les virements bancaires et le paiement à la livraison. Tous les paiements sont sécurisés.".to_string(),
        ),
        (
            "Vos légumes sont-ils vraiment bio ?",
            "Oui, tous nos légumes sont certifiés biologiques. Nous travaillons uniquement avec des producteurs certifiés et effectuons des contrôles qualité réguliers.".to_string(),
        ),
        (
            "Que faire si je ne suis pas satisfait ?",
            "Nous garantissons la fraîcheur de nos produits. En cas de problème, contactez-nous sous 24h et nous procéderons au remboursement ou à l'échange.".to_string(),
        ),
    ];

    rsx! {
        PageHero {
            title: "Contactez-nous".to_string(),
            subtitle: "Une question ? Un problème ? Notre équipe est là pour vous aider. Contactez-nous par le moyen qui vous convient le mieux.".to_string(),
            div {
                class: "flex flex-wrap items-center justify-center gap-6 text-sm text-gray-600",
                span { "💬 Réponse sous 2h en moyenne" }
                span { "📱 WhatsApp disponible" }
                span { "📞 Support téléphonique" }
            }
        }

        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20",
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-12",
                ContactDetails {}
                div {
                    class: "lg:col-span-2",
                    ContactFormCard {}
                }
            }
        }

        div {
            class: "bg-gray-50 py-20",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                SectionHeading {
                    title: "Questions fréquentes".to_string(),
                    lead: "Les réponses aux questions les plus courantes".to_string(),
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto",
                    for (question, answer) in faq {
                        Card {
                            key: "{question}",
                            h3 { class: "font-semibold text-gray-900 mb-3", "{question}" }
                            p { class: "text-gray-600", "{answer}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactDetails() -> Element {
    let blocks: [(&str, &str, &[&str]); 4] = [
        ("📍", "Adresse", &ShopContact::ADDRESS),
        ("📞", "Téléphone", &ShopContact::PHONES),
        ("✉", "Email", &ShopContact::EMAILS),
        ("🕐", "Horaires", &ShopContact::HOURS),
    ];
    let whatsapp = ShopContact::WHATSAPP;
    let whatsapp_link = ShopContact::whatsapp_link();

    rsx! {
        div {
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-8",
                "Nos coordonnées"
            }
            div {
                class: "space-y-8",
                for (icon, title, lines) in blocks {
                    div {
                        key: "{title}",
                        class: "flex items-start space-x-4",
                        div {
                            class: "w-12 h-12 bg-green-100 rounded-xl flex items-center justify-center text-xl flex-shrink-0",
                            "{icon}"
                        }
                        div {
                            h3 { class: "font-semibold text-gray-900 mb-2", "{title}" }
                            for line in lines.iter() {
                                p { key: "{line}", class: "text-gray-600", "{line}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "mt-12 p-6 bg-green-50 rounded-2xl",
                h3 {
                    class: "font-semibold text-gray-900 mb-3",
                    "Besoin d'aide urgente ?"
                }
                p {
                    class: "text-gray-600 mb-4",
                    "Pour les questions urgentes liées aux livraisons en cours, contactez-nous directement par WhatsApp."
                }
                a {
                    href: "{whatsapp_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "block w-full text-center rounded-lg bg-green-600 hover:bg-green-700 text-white font-medium px-4 py-2",
                    "WhatsApp: {whatsapp}"
                }
            }
        }
    }
}

#[component]
fn ContactFormCard() -> Element {
    let services = use_services();
    let dispatch = use_store_dispatch();

    let mut form = use_signal(ContactForm::default);
    let mut show_errors = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }

        let snapshot = form.peek().clone();
        if !snapshot.validate().is_empty() {
            show_errors.set(true);
            return;
        }

        let service = services.contact.clone();
        submitting.set(true);
        spawn(async move {
            match service.submit(&snapshot).await {
                SubmissionResult::Success(receipt) => {
                    tracing::info!(reference = %receipt.reference, "contact receipt");
                    form.set(ContactForm::default());
                    show_errors.set(false);
                    dispatch(StoreAction::Notify(Notification::success(receipt.message)));
                }
                SubmissionResult::Failure(reason) => {
                    show_errors.set(true);
                    dispatch(StoreAction::Notify(Notification::error(reason)));
                }
                SubmissionResult::Pending => {}
            }
            submitting.set(false);
        });
    };

    let current = form();
    let error = |field: &str| -> Option<String> {
        if show_errors() {
            current.error_for(field).map(str::to_string)
        } else {
            None
        }
    };
    let pending = submitting();

    let contact_options: Vec<SelectOption> = PreferredContact::ALL
        .iter()
        .map(|channel| SelectOption::new(channel.as_str(), channel.label()))
        .collect();
    let subject_options: Vec<SelectOption> = ContactSubject::ALL
        .iter()
        .map(|subject| SelectOption::new(subject.label(), subject.label()))
        .collect();

    rsx! {
        Card {
            class: "shadow-xl".to_string(),
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-6",
                "Envoyez-nous un message"
            }
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    FormField {
                        label: "Nom complet".to_string(),
                        id: "contact-name".to_string(),
                        required: true,
                        error: error("name"),
                        Input {
                            id: "contact-name".to_string(),
                            placeholder: "Votre nom complet".to_string(),
                            value: current.name.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    FormField {
                        label: "Email".to_string(),
                        id: "contact-email".to_string(),
                        required: true,
                        error: error("email"),
                        Input {
                            id: "contact-email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "votre@email.com".to_string(),
                            value: current.email.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    FormField {
                        label: "Téléphone".to_string(),
                        id: "contact-phone".to_string(),
                        error: error("phone"),
                        Input {
                            id: "contact-phone".to_string(),
                            input_type: "tel".to_string(),
                            placeholder: "+221 XX XXX XX XX".to_string(),
                            value: current.phone.clone(),
                            disabled: pending,
                            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                        }
                    }
                    FormField {
                        label: "Contact préféré".to_string(),
                        id: "contact-preferred".to_string(),
                        Select {
                            id: "contact-preferred".to_string(),
                            value: current.preferred_contact.map(|c| c.as_str().to_string()).unwrap_or_default(),
                            placeholder: "Comment préférez-vous être contacté ?".to_string(),
                            options: contact_options,
                            onchange: move |value: String| form.write().preferred_contact = value.parse().ok(),
                        }
                    }
                }

                FormField {
                    label: "Sujet".to_string(),
                    id: "contact-subject".to_string(),
                    required: true,
                    error: error("subject"),
                    Select {
                        id: "contact-subject".to_string(),
                        value: current.subject.map(|s| s.label().to_string()).unwrap_or_default(),
                        placeholder: "Choisissez le sujet de votre message".to_string(),
                        options: subject_options,
                        onchange: move |value: String| form.write().subject = value.parse().ok(),
                    }
                }

                FormField {
                    label: "Message".to_string(),
                    id: "contact-message".to_string(),
                    required: true,
                    error: error("message"),
                    TextArea {
                        id: "contact-message".to_string(),
                        rows: 6,
                        placeholder: "Décrivez votre demande en détail...".to_string(),
                        value: current.message.clone(),
                        disabled: pending,
                        oninput: move |evt: FormEvent| form.write().message = evt.value(),
                    }
                }

                Button {
                    button_type: "submit".to_string(),
                    size: "lg".to_string(),
                    class: "w-full".to_string(),
                    loading: pending,
                    if pending { "Envoi en cours..." } else { "Envoyer le message" }
                }
            }
        }
    }
}
