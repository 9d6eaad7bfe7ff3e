//! Amounts
//!
//! Parsing of the purchase amount and rendering of the discounted total.

use std::fmt;

use thiserror::Error;

/// Significant digits shown when rendering a total.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Smallest decimal exponent still rendered in fixed notation.
const MIN_FIXED_EXPONENT: i32 = -4;

/// Errors raised while reading a purchase amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Input ended before any amount was entered.
    #[error("no amount entered")]
    Missing,

    /// The entered text is not a number.
    #[error("invalid amount {token:?}; expected a number such as 100 or 19.99")]
    Invalid {
        /// The offending token.
        token: String,
    },

    /// The entered number is infinite or NaN.
    #[error("amount {token:?} is not a finite number")]
    NotFinite {
        /// The offending token.
        token: String,
    },
}

/// Returns the first whitespace-separated token of `line`, if it has one.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Parses a single amount token.
///
/// Accepts anything `f64` parsing does (`100`, `.5`, `1e3`, `-4`) as long as
/// the result is finite. Negative amounts are allowed.
///
/// # Errors
///
/// - [`AmountError::Invalid`]: the token is not a number.
/// - [`AmountError::NotFinite`]: the token is `inf`, `nan` or overflows.
pub fn parse(token: &str) -> Result<f64, AmountError> {
    let amount: f64 = token.parse().map_err(|_parse_error| AmountError::Invalid {
        token: token.to_string(),
    })?;

    if !amount.is_finite() {
        return Err(AmountError::NotFinite {
            token: token.to_string(),
        });
    }

    Ok(amount)
}

/// A total rendered the way a default-configured console stream prints a
/// double: six significant digits, no trailing zeros, and exponent notation
/// for very large or very small magnitudes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Total(pub f64);

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }

        if value.is_infinite() {
            return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
        }

        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent must come from the value already rounded to six
        // significant digits, so 999999.5 becomes 1e+06 rather than 1000000.
        let scientific = format!("{:.*e}", fraction_digits(0), value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return f.write_str(&scientific);
        };

        if exponent < MIN_FIXED_EXPONENT || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };

            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let precision = fraction_digits(exponent);
            let fixed = format!("{value:.precision$}");

            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Digits after the point that keep six significant digits for a value whose
/// leading digit sits at `exponent`.
fn fraction_digits(exponent: i32) -> usize {
    usize::try_from(SIGNIFICANT_DIGITS - 1 - exponent).unwrap_or(0)
}

/// Strips trailing zeros after a decimal point, and the point itself.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
