//! Loader tests against fixture files and temporary files.

use std::io::Write;
use std::path::PathBuf;

use adapter_loader::{load_netting_set, JsonTradeLoader, LoaderError};
use approx::assert_abs_diff_eq;
use saccr_engine::{ExposureAtDefault, LegType, TradeId};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_two_swap_fixture_end_to_end() {
    let netting_set = JsonTradeLoader::from_path(fixture("two_swaps.json"))
        .unwrap()
        .with_netting_set_id("NS001")
        .into_netting_set()
        .unwrap();
    assert_eq!(netting_set.trade_count(), 2);

    let swap_b = netting_set.trade(&TradeId::new("swap_b")).unwrap();
    assert_eq!(swap_b.receive_type(), LegType::Fixed);
    assert!(swap_b.trade_date().is_some());

    let ead = ExposureAtDefault::new(&netting_set).unwrap();
    assert_eq!(ead.replacement_cost(), 10.0);
    assert_abs_diff_eq!(ead.addon(), 296.31, epsilon = 0.01);
    assert_abs_diff_eq!(ead.calculate(), 428.84, epsilon = 0.01);
}

#[test]
fn test_invalid_fixture_reports_every_bad_record() {
    let err = load_netting_set(fixture("invalid_records.json")).unwrap_err();
    let issues = err.issues();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].id.as_deref(), Some("bad_currency"));
    assert_eq!(issues[0].field, "currency_code");
    assert_eq!(issues[1].id.as_deref(), Some("bad_dates"));
    assert_eq!(issues[1].field, "end_date");
}

#[test]
fn test_loads_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"data": [{{
            "id": "T1", "date": "2021-06-30", "asset_class": "Interest Rate",
            "currency_code": "gbp", "notional_amount": 1e6,
            "payment_type": "Fixed", "receive_type": "Floating",
            "start_date": "2021-06-30", "end_date": "2021-12-30", "mtm_dirty": -5.0
        }}]}}"#
    )
    .unwrap();

    let netting_set = load_netting_set(file.path()).unwrap();
    let trade = &netting_set.trades()[0];
    assert_eq!(trade.currency().as_str(), "GBP");
    assert_eq!(trade.payment_type(), LegType::Fixed);

    let ead = ExposureAtDefault::new(&netting_set).unwrap();
    assert_eq!(ead.replacement_cost(), 0.0);
    assert!(ead.multiplier() < 1.0);
}

#[test]
fn test_truncated_file_is_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"data": [{{"id": "T1""#).unwrap();

    assert!(matches!(
        JsonTradeLoader::from_path(file.path()),
        Err(LoaderError::Json(_))
    ));
}

#[test]
fn test_non_rates_trade_fails_in_engine_not_loader() {
    let json = r#"{"data": [{
        "id": "fx_fwd", "date": "2020-01-01", "asset_class": "fx",
        "currency_code": "JPY", "notional_amount": 100,
        "payment_type": "fixed", "receive_type": "floating",
        "start_date": "2020-01-01", "end_date": "2020-06-01", "mtm_dirty": 0
    }]}"#;
    let netting_set = json.parse::<JsonTradeLoader>().unwrap().into_netting_set().unwrap();
    assert!(ExposureAtDefault::new(&netting_set).is_err());
}
