//! Currency codes for hedging-set assignment.
//!
//! Interest-rate hedging sets are keyed by trade currency. Trade files may
//! carry any ISO 4217 code, so the code is kept as a validated three-letter
//! value instead of a closed list of currencies.
//!
//! # Examples
//!
//! ```
//! use saccr_core::types::currency::CurrencyCode;
//!
//! let usd: CurrencyCode = "usd".parse().unwrap();
//! assert_eq!(usd.as_str(), "USD");
//! assert_eq!(usd, CurrencyCode::new("USD").unwrap());
//!
//! assert!("US".parse::<CurrencyCode>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Validated three-letter ISO 4217 currency code, stored upper-case.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validates and normalises a currency code.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidCode` unless the trimmed input is
    /// exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        let trimmed = code.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(CurrencyError::InvalidCode(code.to_string()))
        }
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(s: String) -> Result<Self, CurrencyError> {
        Self::new(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
