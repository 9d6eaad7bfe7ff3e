//! Session
//!
//! The console conversation: ask for an amount, ask for a discount, print the
//! priced result. Generic over the reader and writer so it can be driven from
//! in-memory buffers as well as the terminal.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    amount::{self, AmountError, Total},
    calculator::Calculator,
    config::SessionConfig,
    discounts::Discount,
    selection::{self, INVALID_OPTION_NOTICE, Selection},
};

/// Prompt for the purchase amount.
pub const AMOUNT_PROMPT: &str = "Enter Amount: ";

/// Prompt for the discount option.
pub const DISCOUNT_PROMPT: &str = "Enter discount (No discount, 10%, 20%): ";

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The amount could not be read.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// The result of one session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quote {
    amount: f64,
    selection: Selection,
    total: f64,
}

impl Quote {
    /// The amount as entered.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The discount that was applied.
    pub fn discount(&self) -> Discount {
        self.selection.discount()
    }

    /// Whether the typed option was recognised.
    pub fn is_recognised(&self) -> bool {
        self.selection.is_recognised()
    }

    /// The discounted total.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Runs one session against `input` and `output`.
///
/// Values preset in `config` are used as-is and their prompts are skipped.
///
/// # Errors
///
/// - [`SessionError::Amount`]: the amount is missing or malformed.
/// - [`SessionError::Io`]: the console could not be read or written.
pub fn run<R, W>(mut input: R, mut output: W, config: &SessionConfig) -> Result<Quote, SessionError>
where
    R: BufRead,
    W: Write,
{
    let amount = if let Some(amount) = config.amount {
        amount
    } else {
        prompt(&mut output, AMOUNT_PROMPT)?;
        read_amount(&mut input)?
    };

    debug!(amount, "amount read");

    let option = if let Some(option) = &config.discount {
        option.clone()
    } else {
        prompt(&mut output, DISCOUNT_PROMPT)?;
        read_option(&mut input)?
    };

    let selection = selection::select(&option);

    if !selection.is_recognised() {
        writeln!(output, "{INVALID_OPTION_NOTICE}")?;
    }

    let mut calculator = Calculator::new();
    calculator.select(selection.discount());

    let total = calculator.calculate(amount);

    info!(amount, discount = ?selection.discount(), total, "total calculated");

    writeln!(output, "Discount: {}", calculator.describe())?;
    writeln!(output, "Total: {}", Total(total))?;
    output.flush()?;

    Ok(Quote {
        amount,
        selection,
        total,
    })
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()
}

/// Reads lines until one holds a token, parses that token and drops the rest
/// of the line.
fn read_amount<R: BufRead>(input: &mut R) -> Result<f64, SessionError> {
    loop {
        let Some(line) = read_line_lossy(input)? else {
            return Err(AmountError::Missing.into());
        };

        if let Some(token) = amount::first_token(&line) {
            return Ok(amount::parse(token)?);
        }
    }
}

/// Reads one line without its terminator. End of input reads as empty.
fn read_option<R: BufRead>(input: &mut R) -> io::Result<String> {
    let line = read_line_lossy(input)?.unwrap_or_default();

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    Ok(line.to_string())
}

/// Reads one raw line, replacing invalid UTF-8 rather than failing on it.
/// Returns `None` at end of input.
fn read_line_lossy<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();

    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
