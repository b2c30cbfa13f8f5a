//! Replacement cost, PFE multiplier and exposure at default
//! (BCBS 279 paragraphs 136, 146-149).
//!
//! ```text
//! RC         = max(V, 0)                      V = sum of trade MTMs
//! multiplier = min(1, floor + (1 - floor) · exp(V / (2 (1 - floor) AddOn)))
//! EAD        = alpha · (RC + multiplier · AddOn)
//! ```
//!
//! Collateral is not modelled, so `V - C = V`.

/// Regulatory alpha applied to the sum of RC and PFE.
pub const ALPHA: f64 = 1.4;

/// Lower bound of the PFE multiplier.
pub const MULTIPLIER_FLOOR: f64 = 0.0;

/// Sum of trade MTMs.
#[inline]
pub fn net_market_value<I>(mtms: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    mtms.into_iter().sum()
}

/// Unmargined replacement cost `max(V, 0)`.
///
/// ```
/// use saccr_engine::exposure::replacement_cost;
///
/// assert_eq!(replacement_cost(10.0), 10.0);
/// assert_eq!(replacement_cost(-25.0), 0.0);
/// ```
#[inline]
pub fn replacement_cost(net_market_value: f64) -> f64 {
    net_market_value.max(0.0)
}

/// PFE multiplier for a net market value and aggregate add-on.
///
/// An add-on that is not strictly positive leaves nothing to scale, so the
/// multiplier is one.
///
/// ```
/// use saccr_engine::exposure::multiplier;
///
/// assert_eq!(multiplier(10.0, 296.3), 1.0);
/// assert_eq!(multiplier(-50.0, 0.0), 1.0);
/// assert!(multiplier(-50.0, 100.0) < 1.0);
/// ```
pub fn multiplier(net_market_value: f64, addon: f64) -> f64 {
    if addon <= 0.0 {
        return 1.0;
    }
    let floor = MULTIPLIER_FLOOR;
    let scaled = (net_market_value / (2.0 * (1.0 - floor) * addon)).exp();
    (floor + (1.0 - floor) * scaled).min(1.0)
}

/// Exposure at default `alpha · (RC + multiplier · AddOn)`.
#[inline]
pub fn exposure_at_default(replacement_cost: f64, multiplier: f64, addon: f64) -> f64 {
    ALPHA * (replacement_cost + multiplier * addon)
}
