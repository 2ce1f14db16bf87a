// src/contact.rs

//! Contact form model, validation and the simulated message service

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ShopConfig;
use crate::error::{Error, Result};
use crate::submission::{SubmissionResult, SubmissionService};
use crate::utils::{validation, Time};

pub const CONTACT_ACKNOWLEDGMENT: &str =
    "Message envoyé avec succès ! Nous vous répondrons dans les plus brefs délais.";
pub const NEWSLETTER_ACKNOWLEDGMENT: &str = "Merci ! Vous êtes inscrit à notre newsletter.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactSubject {
    OrderAndDelivery,
    ProductQuality,
    ProducerPartnership,
    CustomerService,
    Complaint,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 6] = [
        Self::OrderAndDelivery,
        Self::ProductQuality,
        Self::ProducerPartnership,
        Self::CustomerService,
        Self::Complaint,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OrderAndDelivery => "Commande et livraison",
            Self::ProductQuality => "Qualité des produits",
            Self::ProducerPartnership => "Partenariat producteur",
            Self::CustomerService => "Service client",
            Self::Complaint => "Réclamation",
            Self::Other => "Autre",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactSubject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.label() == s)
            .ok_or_else(|| Error::validation("subject", format!("Sujet inconnu : {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    Email,
    Phone,
    WhatsApp,
}

impl PreferredContact {
    pub const ALL: [PreferredContact; 3] = [Self::Email, Self::Phone, Self::WhatsApp];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::WhatsApp => "whatsapp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Téléphone",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

impl FromStr for PreferredContact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| Error::validation("preferred_contact", format!("Canal inconnu : {}", s)))
    }
}

/// One failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: Option<PreferredContact>,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

impl ContactForm {
    /// Every failed check, in form order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Le nom est requis",
            });
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "L'email est requis",
            });
        } else if !validation::is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Adresse email invalide",
            });
        }
        if !self.phone.trim().is_empty() && !validation::is_valid_phone(&self.phone) {
            errors.push(FieldError {
                field: "phone",
                message: "Numéro de téléphone invalide",
            });
        }
        if self.subject.is_none() {
            errors.push(FieldError {
                field: "subject",
                message: "Choisissez un sujet",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: "message",
                message: "Le message est requis",
            });
        }

        errors
    }

    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.validate()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Like [`ContactForm::validate`] but reports the first problem as an error
    pub fn ensure_valid(&self) -> Result<()> {
        match self.validate().into_iter().next() {
            None => Ok(()),
            Some(first) => Err(Error::validation(first.field, first.message).source("contact")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub reference: Uuid,
    pub message: String,
}

/// Waits for the configured delay and acknowledges. Invalid forms are refused
/// without waiting.
#[derive(Debug, Clone)]
pub struct SimulatedContact {
    delay: Duration,
}

impl SimulatedContact {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(shop: &ShopConfig) -> Self {
        Self::new(shop.contact_delay())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SubmissionService<ContactForm> for SimulatedContact {
    type Ack = ContactReceipt;

    fn operation(&self) -> &str {
        "contact"
    }

    async fn submit(&self, form: &ContactForm) -> SubmissionResult<ContactReceipt> {
        if let Err(err) = form.ensure_valid() {
            tracing::warn!(error = %err, "contact form rejected");
            return SubmissionResult::Failure(err.message);
        }

        Time::sleep(self.delay).await;
        tracing::info!(subject = ?form.subject, "contact message sent");
        SubmissionResult::Success(ContactReceipt {
            reference: Uuid::new_v4(),
            message: CONTACT_ACKNOWLEDGMENT.to_string(),
        })
    }
}

/// Newsletter sign-up request from the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SimulatedNewsletter {
    delay: Duration,
}

impl SimulatedNewsletter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(shop: &ShopConfig) -> Self {
        Self::new(shop.newsletter_delay())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SubmissionService<NewsletterSignup> for SimulatedNewsletter {
    type Ack = String;

    fn operation(&self) -> &str {
        "newsletter"
    }

    async fn submit(&self, signup: &NewsletterSignup) -> SubmissionResult<String> {
        if !validation::is_valid_email(&signup.email) {
            return SubmissionResult::Failure("Adresse email invalide".to_string());
        }

        Time::sleep(self.delay).await;
        tracing::info!("newsletter signup recorded");
        SubmissionResult::Success(NEWSLETTER_ACKNOWLEDGMENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Awa Ndiaye".to_string(),
            email: "awa@example.sn".to_string(),
            phone: String::new(),
            preferred_contact: Some(PreferredContact::Email),
            subject: Some(ContactSubject::ProductQuality),
            message: "Vos tomates sont délicieuses".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let fields: Vec<&str> = ContactForm::default()
            .validate()
            .iter()
            .map(|e| e.field)
            .collect();

        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().validate().is_empty());
        assert!(filled_form().ensure_valid().is_ok());
    }

    #[test]
    fn test_phone_rules() {
        let mut form = filled_form();
        form.phone = "abc".to_string();
        assert_eq!(form.error_for("phone"), Some("Numéro de téléphone invalide"));

        // optional, even when a call back is preferred
        form.phone = String::new();
        form.preferred_contact = Some(PreferredContact::Phone);
        assert!(form.validate().is_empty());

        for number in ["+221 77 987 65 43", "77.987.65.43", "(+221) 77 987 65 43"] {
            form.phone = number.to_string();
            assert!(form.validate().is_empty(), "{}", number);
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled_form();
        form.email = "awa.example.sn".to_string();

        let err = form.ensure_valid().unwrap_err();
        assert_eq!(err.message, "Adresse email invalide");
        assert_eq!(err.source, "contact");
    }

    #[test]
    fn test_subject_labels_round_trip() {
        assert_eq!(ContactSubject::ALL.len(), 6);
        assert_eq!(
            "Réclamation".parse::<ContactSubject>().unwrap(),
            ContactSubject::Complaint
        );
        assert!("Bonjour".parse::<ContactSubject>().is_err());
        assert_eq!("whatsapp".parse::<PreferredContact>().unwrap(), PreferredContact::WhatsApp);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_contact_waits_then_acknowledges() {
        let service = SimulatedContact::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();

        let result = service.submit(&filled_form()).await;

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(result.success().unwrap().message, CONTACT_ACKNOWLEDGMENT);
    }

    #[tokio::test]
    async fn test_simulated_contact_refuses_invalid_form() {
        let service = SimulatedContact::new(Duration::from_secs(60));

        let result = service.submit(&ContactForm::default()).await;

        assert_eq!(result, SubmissionResult::Failure("Le nom est requis".to_string()));
    }

    #[tokio::test]
    async fn test_newsletter_signup() {
        let service = SimulatedNewsletter::new(Duration::ZERO);

        let ok = service
            .submit(&NewsletterSignup {
                email: "client@freshveg.sn".to_string(),
            })
            .await;
        assert!(ok.is_success());

        let bad = service
            .submit(&NewsletterSignup {
                email: "pas-un-email".to_string(),
            })
            .await;
        assert!(!bad.is_success());
    }
}
