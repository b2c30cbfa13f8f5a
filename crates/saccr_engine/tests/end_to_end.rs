//! End-to-end EAD for the two-swap interest-rate netting set.
//!
//! Swap A: spot-starting ten-year swap paying fixed, MTM +30, as of 2009-01-17.
//! Swap B: spot-starting four-year swap receiving fixed, MTM -20, as of
//! 2015-01-17. Both are USD and share one hedging set.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use saccr_core::types::{CurrencyCode, Date};
use saccr_engine::hedging::MaturityBucket;
use saccr_engine::netting::{AssetClass, LegType, NettingSet, NettingSetId, Trade, TradeId};
use saccr_engine::{ExposureAtDefault, ParallelConfig, SaccrError};

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

fn swap(
    id: &str,
    as_of: &str,
    start: &str,
    end: &str,
    payment: LegType,
    receive: LegType,
    mtm: f64,
) -> Trade {
    Trade::builder()
        .id(id)
        .asset_class(AssetClass::InterestRate)
        .currency(CurrencyCode::new("USD").unwrap())
        .notional(10_000.0)
        .legs(payment, receive)
        .valuation_date(date(as_of))
        .start_date(date(start))
        .end_date(date(end))
        .mtm_dirty(mtm)
        .product_type(Some("vanilla_swap".to_string()))
        .build()
        .unwrap()
}

fn two_swaps() -> NettingSet {
    NettingSet::new(
        NettingSetId::new("NS001"),
        vec![
            swap(
                "swap_a",
                "2009-01-17",
                "2009-01-17",
                "2019-01-17",
                LegType::Fixed,
                LegType::Floating,
                30.0,
            ),
            swap(
                "swap_b",
                "2015-01-17",
                "2015-01-17",
                "2019-01-17",
                LegType::Floating,
                LegType::Fixed,
                -20.0,
            ),
        ],
    )
    .unwrap()
}

#[test]
fn test_replacement_cost() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();
    assert_eq!(ead.net_market_value(), 10.0);
    assert_eq!(ead.replacement_cost(), 10.0);
}

#[test]
fn test_per_trade_metrics() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();

    let sd = ead.supervisory_duration();
    assert_abs_diff_eq!(sd[0], 7.8686, epsilon = 1e-4);
    assert_abs_diff_eq!(sd[1], 3.6254, epsilon = 1e-4);

    let d = ead.adjusted_notional();
    assert_abs_diff_eq!(d[0], 78_686.0, epsilon = 1.0);
    assert_abs_diff_eq!(d[1], 36_254.0, epsilon = 1.0);

    let se = ead.start_end_dates();
    assert_eq!(se[0].0, 0.0);
    assert_eq!(se[1], (0.0, 4.0));

    let m = ead.maturity();
    assert_abs_diff_eq!(m[0], 10.0, epsilon = 0.01);
    assert_eq!(m[1], 4.0);

    assert_eq!(ead.maturity_factor(), vec![1.0, 1.0]);
    assert_eq!(ead.supervisory_delta(), vec![1.0, -1.0]);
}

#[test]
fn test_hedging_set_buckets() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();
    let usd = CurrencyCode::new("USD").unwrap();
    let buckets = ead.effective_notionals().get(&usd).unwrap();

    assert_eq!(buckets[MaturityBucket::UpToOneYear], 0.0);
    assert_abs_diff_eq!(buckets[MaturityBucket::OneToFiveYears], -36_253.85, epsilon = 0.01);
    assert_abs_diff_eq!(buckets[MaturityBucket::OverFiveYears], 78_685.56, epsilon = 0.01);
}

#[test]
fn test_addon_multiplier_and_ead() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();

    assert_abs_diff_eq!(ead.addon(), 296.31, epsilon = 0.01);
    assert_eq!(ead.multiplier(), 1.0);
    assert_abs_diff_eq!(ead.calculate(), 428.84, epsilon = 0.01);
    assert_relative_eq!(
        ead.calculate(),
        1.4 * (ead.replacement_cost() + ead.multiplier() * ead.addon()),
        epsilon = 1e-12
    );
}

#[test]
fn test_accessors_are_idempotent() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();
    assert_eq!(ead.calculate(), ead.calculate());
    assert_eq!(ead.supervisory_duration(), ead.supervisory_duration());
    assert_eq!(ead.breakdown(), ead.breakdown());
}

#[test]
fn test_trade_lookup_by_id() {
    let ead = ExposureAtDefault::new(&two_swaps()).unwrap();
    let b = ead.trade_metrics().get(&TradeId::new("swap_b")).unwrap();
    assert_eq!(b.supervisory_delta, -1.0);
    assert!(ead.trade_metrics().get(&TradeId::new("swap_c")).is_none());
}

#[test]
fn test_parallel_and_sequential_agree() {
    let ns = two_swaps();
    let sequential = ExposureAtDefault::with_config(&ns, ParallelConfig::sequential()).unwrap();
    let parallel = ExposureAtDefault::with_config(&ns, ParallelConfig::new(1, 1)).unwrap();
    assert_eq!(sequential.breakdown(), parallel.breakdown());
}

#[test]
fn test_empty_netting_set_has_zero_ead() {
    let ead = ExposureAtDefault::new(&NettingSet::empty(NettingSetId::new("NS000"))).unwrap();
    assert_eq!(ead.calculate(), 0.0);
    assert_eq!(ead.addon(), 0.0);
    assert_eq!(ead.multiplier(), 1.0);
}

#[test]
fn test_same_leg_types_fail_the_netting_set() {
    let mut trades = two_swaps().trades().to_vec();
    trades.push(swap(
        "swap_c",
        "2015-01-17",
        "2015-01-17",
        "2016-01-17",
        LegType::Fixed,
        LegType::Fixed,
        0.0,
    ));
    let ns = NettingSet::new(NettingSetId::new("NS001"), trades).unwrap();

    match ExposureAtDefault::new(&ns) {
        Err(SaccrError::UnsupportedTradeDirection { trade, .. }) => assert_eq!(trade, "swap_c"),
        other => panic!("expected unsupported direction, got {:?}", other),
    }
}

#[test]
fn test_non_rates_trade_rejected() {
    let fx = Trade::builder()
        .id("fx_1")
        .asset_class(AssetClass::ForeignExchange)
        .currency(CurrencyCode::new("EUR").unwrap())
        .notional(1.0)
        .legs(LegType::Fixed, LegType::Floating)
        .valuation_date(date("2020-01-01"))
        .start_date(date("2020-01-01"))
        .end_date(date("2021-01-01"))
        .mtm_dirty(0.0)
        .build()
        .unwrap();
    let ns = NettingSet::new(NettingSetId::new("NS002"), vec![fx]).unwrap();

    assert!(matches!(
        ExposureAtDefault::new(&ns),
        Err(SaccrError::UnsupportedAssetClass { .. })
    ));
}
