//! Rebate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amount::{AmountError, Total},
    calculator::{Calculator, UNSET_DESCRIPTION},
    config::{Config, LogFormat, LoggingConfig, SessionConfig},
    discounts::Discount,
    selection::{INVALID_OPTION_NOTICE, Selection},
    session::{Quote, SessionError},
};
