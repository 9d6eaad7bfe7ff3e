//! Selection
//!
//! Maps free-text discount choices onto the fixed catalogue. Matching is
//! case-insensitive over ASCII letters only; digits, `%` and whitespace are
//! compared as typed.

use tracing::{debug, info};

use crate::discounts::Discount;

/// Notice shown when the typed option is not recognised.
pub const INVALID_OPTION_NOTICE: &str = "Invalid discount option. Using no discount by default.";

/// Outcome of resolving a typed discount option.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    discount: Discount,
    recognised: bool,
}

impl Selection {
    /// The discount to price with.
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Whether the text named a discount, or the default was substituted.
    pub fn is_recognised(&self) -> bool {
        self.recognised
    }
}

/// Lowercases ASCII letters, leaving everything else untouched.
pub fn normalise(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Looks up the discount named by `input`, if any.
pub fn lookup(input: &str) -> Option<Discount> {
    match normalise(input).as_str() {
        "no discount" => Some(Discount::NoDiscount),
        "10%" => Some(Discount::TenPercent),
        "20%" => Some(Discount::TwentyPercent),
        _ => None,
    }
}

/// Resolves `input`, falling back to [`Discount::NoDiscount`] when it is not
/// recognised. A miss is never an error; callers check
/// [`Selection::is_recognised`] to decide whether to show
/// [`INVALID_OPTION_NOTICE`].
pub fn select(input: &str) -> Selection {
    if let Some(discount) = lookup(input) {
        debug!(input, ?discount, "discount option recognised");

        Selection {
            discount,
            recognised: true,
        }
    } else {
        info!(input, "unrecognised discount option, using no discount");

        Selection {
            discount: Discount::NoDiscount,
            recognised: false,
        }
    }
}
