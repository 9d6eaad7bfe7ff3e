//! Calculator
//!
//! Holds the discount currently selected for a purchase and prices amounts
//! with it.

use crate::discounts::Discount;

/// Description reported before any discount has been selected.
pub const UNSET_DESCRIPTION: &str = "No discount set";

/// Single-slot holder of the active discount.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Calculator {
    discount: Option<Discount>,
}

impl Calculator {
    /// Creates a calculator with no discount selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with `discount` already selected.
    pub fn with_discount(discount: Discount) -> Self {
        Self {
            discount: Some(discount),
        }
    }

    /// Replaces the selected discount. The previous one is dropped.
    pub fn select(&mut self, discount: Discount) {
        self.discount = Some(discount);
    }

    /// Returns the selected discount, if any.
    pub fn discount(&self) -> Option<Discount> {
        self.discount
    }

    /// Prices `amount` with the selected discount, or returns it unchanged
    /// when nothing is selected.
    pub fn calculate(&self, amount: f64) -> f64 {
        self.discount.map_or(amount, |discount| discount.apply(amount))
    }

    /// Description of the selected discount, or [`UNSET_DESCRIPTION`].
    pub fn describe(&self) -> &'static str {
        self.discount.map_or(UNSET_DESCRIPTION, Discount::describe)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_calculator_reports_unset_description() {
        let calculator = Calculator::new();

        assert_eq!(calculator.describe(), UNSET_DESCRIPTION);
        assert_ne!(calculator.describe(), Discount::NoDiscount.describe());
        assert_eq!(calculator.discount(), None);
    }

    #[test]
    fn new_calculator_returns_amount_unchanged() {
        let calculator = Calculator::new();

        assert_eq!(calculator.calculate(42.5).to_bits(), 42.5_f64.to_bits());
    }

    #[test]
    fn select_replaces_previous_discount() {
        let mut calculator = Calculator::with_discount(Discount::TenPercent);

        calculator.select(Discount::TwentyPercent);

        assert_eq!(calculator.discount(), Some(Discount::TwentyPercent));
        assert_eq!(calculator.describe(), "20% discount");
        assert_eq!(calculator.calculate(100.0).to_bits(), 80.0_f64.to_bits());
    }

    #[test]
    fn explicit_no_discount_is_not_unset() {
        let mut calculator = Calculator::new();

        calculator.select(Discount::NoDiscount);

        assert_eq!(calculator.describe(), "No discount");
    }

    #[test]
    fn negative_amounts_are_not_validated() {
        let calculator = Calculator::with_discount(Discount::TwentyPercent);

        assert_eq!(calculator.calculate(-10.0).to_bits(), (-10.0_f64 * 0.8).to_bits());
    }

    #[test]
    fn nan_passes_through() {
        let calculator = Calculator::with_discount(Discount::TenPercent);

        assert!(calculator.calculate(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn calculate_multiplies_by_factor(amount in 0.0_f64..1.0e12, index in 0_usize..3) {
            let discount = Discount::ALL.get(index).copied().unwrap_or_default();
            let calculator = Calculator::with_discount(discount);

            prop_assert_eq!(
                calculator.calculate(amount).to_bits(),
                (amount * discount.factor()).to_bits()
            );
        }

        #[test]
        fn calculate_never_increases_amount(amount in 0.0_f64..1.0e12) {
            for discount in Discount::ALL {
                prop_assert!(Calculator::with_discount(discount).calculate(amount) <= amount);
            }
        }
    }
}
