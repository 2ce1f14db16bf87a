// src/ui/mod.rs - Storefront UI

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use app::App;

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod services;
pub mod state;

pub use components::*;
pub use layout::*;
pub use services::{use_services, StoreServices};
pub use state::*;

/// Tailwind build served from the CDN; the app ships no stylesheet of its own
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Transient toast message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub notification_type: NotificationType,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            notification_type,
            timestamp: crate::utils::Time::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Info,
    Success,
    Error,
}

impl NotificationType {
    /// Tailwind classes and glyph for the toast
    pub fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("bg-green-600 text-white", "✓"),
            Self::Error => ("bg-red-600 text-white", "!"),
            Self::Info => ("bg-gray-900 text-white", "i"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let success = Notification::success("Ajouté au panier : Radis Roses");
        let error = Notification::error("Produit non trouvé");

        assert_eq!(success.notification_type, NotificationType::Success);
        assert_eq!(error.notification_type, NotificationType::Error);
        assert_ne!(success.id, error.id);
    }
}
