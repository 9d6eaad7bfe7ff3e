//! Rebate
//!
//! Rebate prices a single purchase under one of a fixed set of discounts:
//! no discount, 10% off or 20% off. The [`session`] module drives the console
//! conversation; the rest of the crate is the pure pricing logic behind it.

pub mod amount;
pub mod calculator;
pub mod config;
pub mod discounts;
pub mod logging;
pub mod prelude;
pub mod selection;
pub mod session;
