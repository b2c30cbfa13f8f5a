//! Integration tests for module exports.
//!
//! Verify that all public types are reachable via both their module path
//! and the `types` re-exports.

#[test]
fn test_time_module_exports() {
    use saccr_core::types::time::{year_fraction, Date};

    let start = Date::from_ymd(2009, 1, 17).unwrap();
    let end = Date::parse("2019-01-17").unwrap();
    let yf = year_fraction(start, end);
    assert!(yf > 9.99 && yf < 10.0);
}

#[test]
fn test_currency_module_exports() {
    use saccr_core::types::currency::CurrencyCode;

    let code = CurrencyCode::new("gbp").unwrap();
    assert_eq!(code.as_str(), "GBP");
}

#[test]
fn test_error_module_exports() {
    use saccr_core::types::error::{CurrencyError, DateError};

    let date_err = DateError::InvalidDate {
        year: 2023,
        month: 2,
        day: 29,
    };
    assert!(date_err.to_string().contains("2023-2-29"));

    let ccy_err = CurrencyError::InvalidCode("X".to_string());
    assert!(ccy_err.to_string().contains('X'));
}

#[test]
fn test_type_reexports() {
    use saccr_core::types::{CurrencyCode, CurrencyError, Date, DateError, DAYS_PER_YEAR};

    let _: Result<Date, DateError> = Date::parse("2024-06-15");
    let _: Result<CurrencyCode, CurrencyError> = "CHF".parse();
    assert_eq!(DAYS_PER_YEAR, 365.25);
}
