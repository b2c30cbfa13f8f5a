//! # saccr_core: Foundation Types for the SA-CCR Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! saccr_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` and the ACT/365.25 `year_fraction` (`types::time`)
//! - Currency codes used as hedging-set keys: `CurrencyCode` (`types::currency`)
//! - Error types: `DateError`, `CurrencyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use saccr_core::types::{year_fraction, CurrencyCode, Date};
//!
//! let valuation = Date::from_ymd(2009, 1, 17).unwrap();
//! let maturity = Date::parse("2019-01-17T00:00:00Z").unwrap();
//!
//! let years = year_fraction(valuation, maturity);
//! assert!((years - 9.9986).abs() < 1e-4);
//!
//! let usd: CurrencyCode = "usd".parse().unwrap();
//! assert_eq!(usd.as_str(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and CurrencyCode

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
