//! Time, currency, and error types.
//!
//! This module provides:
//! - `time`: Date and the ACT/365.25 year fraction
//! - `currency`: ISO 4217 currency codes
//! - `error`: Structured error types for date and currency parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`year_fraction`], [`DAYS_PER_YEAR`] from `time`
//! - [`CurrencyCode`] from `currency`
//! - [`DateError`], [`CurrencyError`] from `error`

pub mod currency;
pub mod error;
pub mod time;

pub use currency::CurrencyCode;
pub use error::{CurrencyError, DateError};
pub use time::{year_fraction, Date, DAYS_PER_YEAR};
