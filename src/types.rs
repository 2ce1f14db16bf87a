use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Catalog key of a product ("1".."8" in the seed table)
pub type ProductId = String;

/// An amount in the smallest currency unit. F CFA has no subunit, so 2250 is 2 250 F CFA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn amount(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// `percent` of this amount, rounded down
    pub fn percent(self, percent: u8) -> Money {
        Money(self.0 * u64::from(percent) / 100)
    }

    /// Renders the amount with space-grouped thousands and a currency label
    pub fn display_with(self, currency_label: &str) -> String {
        format!("{} {}", group_thousands(self.0), currency_label)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.0))
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Money(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * u64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        assert_eq!(Money(0).to_string(), "0");
        assert_eq!(Money(975).to_string(), "975");
        assert_eq!(Money(2250).to_string(), "2 250");
        assert_eq!(Money(1_234_567).to_string(), "1 234 567");
        assert_eq!(Money(25000).display_with("F CFA"), "25 000 F CFA");
    }

    #[test]
    fn test_money_arithmetic() {
        assert_eq!(Money(2250) * 3, Money(6750));
        assert_eq!(Money(10000).percent(10), Money(1000));
        assert_eq!(Money(975).percent(10), Money(97));
        assert_eq!(Money(100).saturating_sub(Money(250)), Money::ZERO);

        let total: Money = vec![Money(750), Money(1400), Money(975)].into_iter().sum();
        assert_eq!(total, Money(3125));
    }
}
