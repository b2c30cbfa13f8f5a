//! Engine error types.
//!
//! Any error raised while building a netting set or computing its metrics
//! aborts the calculation for the whole netting set: a misclassified trade
//! invalidates the hedging-set aggregate it belongs to.

use thiserror::Error;

use crate::netting::{AssetClass, LegType};

/// Errors raised by the SA-CCR engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaccrError {
    /// Pay and receive legs have the same type, so no supervisory delta exists.
    #[error("Unsupported trade direction for trade {trade}: pays {payment}, receives {receive}")]
    UnsupportedTradeDirection {
        /// Offending trade
        trade: String,
        /// Pay leg type
        payment: LegType,
        /// Receive leg type
        receive: LegType,
    },

    /// Only linear interest-rate trades are supported.
    #[error("Unsupported asset class for trade {trade}: {asset_class}")]
    UnsupportedAssetClass {
        /// Offending trade
        trade: String,
        /// Asset class found on the trade
        asset_class: AssetClass,
    },

    /// Two trades in one netting set share an identifier.
    #[error("Duplicate trade ID: {0}")]
    DuplicateTrade(String),

    /// A required trade field was not supplied to the builder.
    #[error("Trade {trade} is missing required field '{field}'")]
    MissingField {
        /// Trade identifier, or `<unnamed>` when the id itself is missing
        trade: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric trade field is NaN or infinite.
    #[error("Trade {trade} has non-finite {field}: {value}")]
    NonFiniteValue {
        /// Offending trade
        trade: String,
        /// Name of the field
        field: &'static str,
        /// Value supplied
        value: f64,
    },

    /// Unknown leg type tag.
    #[error("Unknown leg type: {0}")]
    UnknownLegType(String),

    /// Unknown asset class tag.
    #[error("Unknown asset class: {0}")]
    UnknownAssetClass(String),
}
