//! Exposure-at-default calculation for one netting set.
//!
//! [`ExposureAtDefault`] runs the whole pipeline on construction
//! (per-trade metrics, hedging-set aggregation, add-on, combiner) and then
//! only hands out the stored results. Accessors are therefore idempotent and
//! never fail.

use saccr_core::types::CurrencyCode;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::addon::AddOnBreakdown;
use crate::error::SaccrError;
use crate::exposure::{exposure_at_default, multiplier, net_market_value, replacement_cost};
use crate::hedging::{BucketNotionals, HedgingSetNotionals};
use crate::metrics::TradeMetricsTable;
use crate::netting::{NettingSet, NettingSetId, Trade};
use crate::parallel::ParallelConfig;

/// SA-CCR exposure at default of a netting set.
///
/// # Examples
///
/// ```
/// use saccr_engine::calculator::ExposureAtDefault;
/// use saccr_engine::netting::{NettingSet, NettingSetId};
///
/// let empty = NettingSet::empty(NettingSetId::new("NS0"));
/// let ead = ExposureAtDefault::new(&empty).unwrap();
/// assert_eq!(ead.calculate(), 0.0);
/// assert_eq!(ead.multiplier(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ExposureAtDefault {
    netting_set_id: NettingSetId,
    metrics: TradeMetricsTable,
    notionals: HedgingSetNotionals,
    addons: AddOnBreakdown,
    net_market_value: f64,
    replacement_cost: f64,
    multiplier: f64,
    ead: f64,
}

impl ExposureAtDefault {
    /// Runs the calculation with the default parallel configuration.
    ///
    /// # Errors
    ///
    /// Any unsupported trade (non interest-rate, or legs without a
    /// supervisory delta) aborts the calculation.
    pub fn new(netting_set: &NettingSet) -> Result<Self, SaccrError> {
        Self::with_config(netting_set, ParallelConfig::default())
    }

    /// Runs the calculation with an explicit parallel configuration.
    pub fn with_config(netting_set: &NettingSet, config: ParallelConfig) -> Result<Self, SaccrError> {
        let metrics = TradeMetricsTable::compute(netting_set, &config)?;
        let notionals = HedgingSetNotionals::aggregate(&metrics);
        let addons = AddOnBreakdown::compute(&notionals);
        debug!(addon = addons.aggregate(), "computed add-on");

        let net_market_value = net_market_value(netting_set.trades().iter().map(Trade::mtm_dirty));
        let replacement_cost = replacement_cost(net_market_value);
        let multiplier = multiplier(net_market_value, addons.aggregate());
        let ead = exposure_at_default(replacement_cost, multiplier, addons.aggregate());

        info!(
            netting_set = %netting_set.id(),
            trades = netting_set.trade_count(),
            replacement_cost,
            addon = addons.aggregate(),
            multiplier,
            ead,
            "computed exposure at default"
        );

        Ok(Self {
            netting_set_id: netting_set.id().clone(),
            metrics,
            notionals,
            addons,
            net_market_value,
            replacement_cost,
            multiplier,
            ead,
        })
    }

    /// Returns the exposure at default.
    #[inline]
    pub fn calculate(&self) -> f64 {
        self.ead
    }

    /// Returns the netting set the figures belong to.
    #[inline]
    pub fn netting_set_id(&self) -> &NettingSetId {
        &self.netting_set_id
    }

    /// Unmargined replacement cost `max(V, 0)`.
    #[inline]
    pub fn replacement_cost(&self) -> f64 {
        self.replacement_cost
    }

    /// Sum of trade MTMs `V`.
    #[inline]
    pub fn net_market_value(&self) -> f64 {
        self.net_market_value
    }

    /// Aggregate add-on over all hedging sets.
    #[inline]
    pub fn addon(&self) -> f64 {
        self.addons.aggregate()
    }

    /// PFE multiplier.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Supervisory duration per trade, in input order.
    pub fn supervisory_duration(&self) -> Vec<f64> {
        self.metrics.column(|m| m.supervisory_duration)
    }

    /// Adjusted notional per trade, in input order.
    pub fn adjusted_notional(&self) -> Vec<f64> {
        self.metrics.column(|m| m.adjusted_notional)
    }

    /// `(S, E)` in years per trade, in input order.
    pub fn start_end_dates(&self) -> Vec<(f64, f64)> {
        self.metrics.rows().iter().map(|m| (m.start, m.end)).collect()
    }

    /// Remaining maturity in years per trade, in input order.
    pub fn maturity(&self) -> Vec<f64> {
        self.metrics.column(|m| m.maturity)
    }

    /// Maturity factor per trade, in input order.
    pub fn maturity_factor(&self) -> Vec<f64> {
        self.metrics.column(|m| m.maturity_factor)
    }

    /// Supervisory delta per trade, in input order.
    pub fn supervisory_delta(&self) -> Vec<f64> {
        self.metrics.column(|m| m.supervisory_delta)
    }

    /// Bucketed effective notionals per hedging set.
    #[inline]
    pub fn effective_notionals(&self) -> &HedgingSetNotionals {
        &self.notionals
    }

    /// Add-on per hedging set.
    #[inline]
    pub fn hedging_set_addons(&self) -> &BTreeMap<CurrencyCode, f64> {
        self.addons.by_hedging_set()
    }

    /// All per-trade metrics.
    #[inline]
    pub fn trade_metrics(&self) -> &TradeMetricsTable {
        &self.metrics
    }

    /// Collects the netting-set figures into one value for reporting.
    pub fn breakdown(&self) -> EadBreakdown {
        let hedging_sets = self
            .notionals
            .iter()
            .map(|(currency, buckets)| HedgingSetBreakdown {
                currency: currency.clone(),
                effective_notionals: *buckets,
                addon: self
                    .addons
                    .by_hedging_set()
                    .get(currency)
                    .copied()
                    .unwrap_or(0.0),
            })
            .collect();

        EadBreakdown {
            netting_set_id: self.netting_set_id.clone(),
            trade_count: self.metrics.len(),
            net_market_value: self.net_market_value,
            replacement_cost: self.replacement_cost,
            addon: self.addon(),
            multiplier: self.multiplier,
            ead: self.ead,
            hedging_sets,
        }
    }
}

/// Figures of one hedging set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HedgingSetBreakdown {
    /// Hedging set currency
    pub currency: CurrencyCode,
    /// `[D1, D2, D3]`
    pub effective_notionals: BucketNotionals,
    /// Hedging-set add-on
    pub addon: f64,
}

/// Netting-set level results of an EAD calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EadBreakdown {
    /// Netting set identifier
    pub netting_set_id: NettingSetId,
    /// Number of trades
    pub trade_count: usize,
    /// Sum of trade MTMs
    pub net_market_value: f64,
    /// Replacement cost
    pub replacement_cost: f64,
    /// Aggregate add-on
    pub addon: f64,
    /// PFE multiplier
    pub multiplier: f64,
    /// Exposure at default
    pub ead: f64,
    /// Per hedging set, in currency order
    pub hedging_sets: Vec<HedgingSetBreakdown>,
}

impl EadBreakdown {
    /// Potential future exposure `multiplier * addon`.
    #[inline]
    pub fn pfe(&self) -> f64 {
        self.multiplier * self.addon
    }
}

/// Convenience for one-off callers.
pub fn calculate_ead(netting_set: &NettingSet) -> Result<f64, SaccrError> {
    Ok(ExposureAtDefault::new(netting_set)?.calculate())
}
