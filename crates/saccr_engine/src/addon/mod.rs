//! Interest-rate add-on (BCBS 279 paragraphs 166-169).
//!
//! ```text
//! EN_j     = sqrt(D1² + D2² + D3² + 1.4·D2·D3 + 0.6·D1·D3)
//! AddOn_j  = SF · EN_j,   SF = 0.5%
//! AddOn    = sum_j AddOn_j
//! ```
//!
//! The short and medium buckets carry no cross term. Hedging sets are summed
//! without a cross-currency term.

use std::collections::BTreeMap;

use saccr_core::types::CurrencyCode;

use crate::hedging::{BucketNotionals, HedgingSetNotionals};

/// Supervisory factor for interest-rate derivatives.
pub const IR_SUPERVISORY_FACTOR: f64 = 0.005;

/// Cross term between the medium and long maturity buckets.
pub const MEDIUM_LONG_CORRELATION: f64 = 1.4;

/// Cross term between the short and long maturity buckets.
pub const SHORT_LONG_CORRELATION: f64 = 0.6;

/// Effective notional of a hedging set before the supervisory factor.
///
/// The radicand is a positive semi-definite form, so it is clamped at zero
/// only against rounding.
#[inline]
pub fn aggregated_effective_notional(notionals: &BucketNotionals) -> f64 {
    let [d1, d2, d3] = notionals.as_array();
    let radicand = d1 * d1
        + d2 * d2
        + d3 * d3
        + MEDIUM_LONG_CORRELATION * d2 * d3
        + SHORT_LONG_CORRELATION * d1 * d3;
    radicand.max(0.0).sqrt()
}

/// Add-on of a single hedging set.
///
/// ```
/// use saccr_engine::addon::hedging_set_addon;
/// use saccr_engine::hedging::BucketNotionals;
///
/// let addon = hedging_set_addon(&BucketNotionals::new([0.0, 0.0, 10_000.0]));
/// assert!((addon - 50.0).abs() < 1e-12);
/// ```
#[inline]
pub fn hedging_set_addon(notionals: &BucketNotionals) -> f64 {
    IR_SUPERVISORY_FACTOR * aggregated_effective_notional(notionals)
}

/// Add-ons per hedging set and their sum.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddOnBreakdown {
    by_hedging_set: BTreeMap<CurrencyCode, f64>,
    aggregate: f64,
}

impl AddOnBreakdown {
    /// Computes every hedging-set add-on and the aggregate.
    pub fn compute(notionals: &HedgingSetNotionals) -> Self {
        let by_hedging_set: BTreeMap<CurrencyCode, f64> = notionals
            .iter()
            .map(|(ccy, buckets)| (ccy.clone(), hedging_set_addon(buckets)))
            .collect();
        let aggregate = by_hedging_set.values().sum();
        Self {
            by_hedging_set,
            aggregate,
        }
    }

    /// Aggregate add-on across hedging sets.
    #[inline]
    pub fn aggregate(&self) -> f64 {
        self.aggregate
    }

    /// Add-on per hedging set.
    #[inline]
    pub fn by_hedging_set(&self) -> &BTreeMap<CurrencyCode, f64> {
        &self.by_hedging_set
    }
}
