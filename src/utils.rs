// src/utils.rs

//! Small helpers shared by the storefront modules and views.

mod time;

pub use time::Time;

/// String utilities
pub mod strings {
    /// Case-insensitive substring test. An empty needle always matches.
    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Lower-cases and strips French diacritics so "Épinards" sorts with "e"
    pub fn fold_accents(s: &str) -> String {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| match c {
                'à' | 'â' | 'ä' => 'a',
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'î' | 'ï' => 'i',
                'ô' | 'ö' => 'o',
                'ù' | 'û' | 'ü' => 'u',
                'ç' => 'c',
                other => other,
            })
            .collect()
    }

    /// Upper-case initials of the first two words ("Marie Dubois" -> "MD")
    pub fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// "1 produit" / "3 produits"
    pub fn pluralize(count: usize, singular: &str) -> String {
        if count > 1 {
            format!("{} {}s", count, singular)
        } else {
            format!("{} {}", count, singular)
        }
    }
}

/// Validation utilities
pub mod validation {
    /// Email validation (basic)
    pub fn is_valid_email(email: &str) -> bool {
        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        }
    }

    /// Phone validation (lenient): any punctuation, at least 7 digits
    pub fn is_valid_phone(phone: &str) -> bool {
        phone.chars().filter(char::is_ascii_digit).count() >= 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_utils() {
        assert!(strings::contains_ignore_case("Tomates Cerises Bio", "cerises"));
        assert!(strings::contains_ignore_case("Épinards Frais", "ÉPINARDS"));
        assert!(strings::contains_ignore_case("anything", ""));
        assert!(!strings::contains_ignore_case("Radis Roses", "carotte"));

        assert_eq!(strings::fold_accents("Épinards Frais"), "epinards frais");
        assert_eq!(strings::fold_accents("Poivrons Colorés"), "poivrons colores");

        assert_eq!(strings::initials("Marie Dubois"), "MD");
        assert_eq!(strings::initials("sophie"), "S");

        assert_eq!(strings::pluralize(1, "produit"), "1 produit");
        assert_eq!(strings::pluralize(8, "produit"), "8 produits");
    }

    #[test]
    fn test_validation() {
        assert!(validation::is_valid_email("contact@freshveg.sn"));
        assert!(!validation::is_valid_email("invalid-email"));
        assert!(!validation::is_valid_email("@freshveg.sn"));
        assert!(!validation::is_valid_email("a b@freshveg.sn"));

        assert!(validation::is_valid_phone("+221 77 987 65 43"));
        assert!(validation::is_valid_phone("33-123-45-67"));
        assert!(validation::is_valid_phone("77.987.65.43"));
        assert!(validation::is_valid_phone("(+221) 77 987 65 43"));
        assert!(!validation::is_valid_phone("12345"));
        assert!(!validation::is_valid_phone("+221 abc"));
    }
}
