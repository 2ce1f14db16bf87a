// src/ui/layout/mod.rs - Page chrome shared by every view

use dioxus::prelude::*;

mod footer;
mod header;
mod main_layout;

pub use footer::Footer;
pub use header::Header;
pub use main_layout::{Layout, Toasts};

/// Layout configuration props
#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Children to render in the main content area
    pub children: Element,
    /// Optional custom class for the main element
    #[props(default = "".to_string())]
    pub class: String,
    /// Whether to show the footer
    #[props(default = true)]
    pub show_footer: bool,
}

/// Shop contact details shown in the footer and on the contact page
pub struct ShopContact;

impl ShopContact {
    pub const ADDRESS: [&'static str; 3] = ["Avenue Cheikh Anta Diop", "Point E, Dakar", "Sénégal"];
    pub const PHONES: [&'static str; 2] = ["+221 33 123 45 67", "+221 77 987 65 43"];
    pub const WHATSAPP: &'static str = "+221 77 987 65 43";
    pub const EMAILS: [&'static str; 2] = ["contact@freshveg.sn", "support@freshveg.sn"];
    pub const HOURS: [&'static str; 3] = [
        "Lun - Ven: 8h00 - 18h00",
        "Sam: 8h00 - 14h00",
        "Dimanche: Fermé",
    ];

    /// `wa.me` link for the WhatsApp number
    pub fn whatsapp_link() -> String {
        let digits: String = Self::WHATSAPP.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_keeps_digits_only() {
        assert_eq!(ShopContact::whatsapp_link(), "https://wa.me/221779876543");
    }
}
