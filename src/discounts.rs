//! Discounts

use std::fmt;

/// One of the fixed discount rules a purchase can be priced under.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Discount {
    /// Leave the amount unchanged.
    #[default]
    NoDiscount,

    /// Take 10% off the amount.
    TenPercent,

    /// Take 20% off the amount.
    TwentyPercent,
}

impl Discount {
    /// Every discount, in the order they are offered at the prompt.
    pub const ALL: [Discount; 3] = [
        Discount::NoDiscount,
        Discount::TenPercent,
        Discount::TwentyPercent,
    ];

    /// Multiplier applied to the amount.
    pub const fn factor(self) -> f64 {
        match self {
            Discount::NoDiscount => 1.0,
            Discount::TenPercent => 0.9,
            Discount::TwentyPercent => 0.8,
        }
    }

    /// Applies the discount to an amount.
    ///
    /// Plain floating-point multiplication; the result is not rounded to any
    /// currency precision and the amount is not validated.
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            Discount::NoDiscount => amount,
            Discount::TenPercent | Discount::TwentyPercent => amount * self.factor(),
        }
    }

    /// Human-readable description, as shown on the `Discount:` result line.
    pub const fn describe(self) -> &'static str {
        match self {
            Discount::NoDiscount => "No discount",
            Discount::TenPercent => "10% discount",
            Discount::TwentyPercent => "20% discount",
        }
    }

    /// The normalised selection label that picks this discount.
    pub const fn label(self) -> &'static str {
        match self {
            Discount::NoDiscount => "no discount",
            Discount::TenPercent => "10%",
            Discount::TwentyPercent => "20%",
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_returns_amount_unchanged() {
        assert_eq!(Discount::NoDiscount.apply(123.45).to_bits(), 123.45_f64.to_bits());
    }

    #[test]
    fn percentage_discounts_reduce_amount() {
        assert_eq!(Discount::TenPercent.apply(100.0).to_bits(), 90.0_f64.to_bits());
        assert_eq!(Discount::TwentyPercent.apply(100.0).to_bits(), 80.0_f64.to_bits());
    }

    #[test]
    fn apply_does_not_round() {
        let discounted = Discount::TenPercent.apply(33.33);

        assert_eq!(discounted.to_bits(), (33.33_f64 * 0.9).to_bits());
    }

    #[test]
    fn descriptions_match_result_line_text() {
        assert_eq!(Discount::NoDiscount.describe(), "No discount");
        assert_eq!(Discount::TenPercent.describe(), "10% discount");
        assert_eq!(Discount::TwentyPercent.describe(), "20% discount");
        assert_eq!(Discount::TwentyPercent.to_string(), "20% discount");
    }

    #[test]
    fn labels_are_distinct() {
        for (index, discount) in Discount::ALL.iter().enumerate() {
            for other in Discount::ALL.iter().skip(index + 1) {
                assert_ne!(discount.label(), other.label());
            }
        }
    }

    #[test]
    fn default_is_no_discount() {
        assert_eq!(Discount::default(), Discount::NoDiscount);
    }
}
