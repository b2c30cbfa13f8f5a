//! Trade records for SA-CCR netting sets.
//!
//! A [`Trade`] is one row of the validated trade table: identifiers, dates,
//! notional, leg types and current mark-to-market. Trades are immutable once
//! built; derived metrics live in [`crate::metrics`].

use std::fmt;
use std::str::FromStr;

use saccr_core::types::{CurrencyCode, Date};

use super::ids::TradeId;
use crate::error::SaccrError;

/// Type of a swap leg.
///
/// # Examples
///
/// ```
/// use saccr_engine::netting::LegType;
///
/// let leg: LegType = "floating".parse().unwrap();
/// assert_eq!(leg, LegType::Floating);
/// assert!("indexed".parse::<LegType>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegType {
    /// Fixed-rate leg
    Fixed,
    /// Floating-rate leg
    Floating,
}

impl LegType {
    /// Returns the lower-case tag used in trade files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegType::Fixed => "fixed",
            LegType::Floating => "floating",
        }
    }
}

impl FromStr for LegType {
    type Err = SaccrError;

    fn from_str(s: &str) -> Result<Self, SaccrError> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(LegType::Fixed),
            "floating" => Ok(LegType::Floating),
            _ => Err(SaccrError::UnknownLegType(s.to_string())),
        }
    }
}

impl fmt::Display for LegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regulatory asset class of a trade.
///
/// Only [`AssetClass::InterestRate`] is handled by the add-on aggregation;
/// the remaining classes are recognised so they can be rejected explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetClass {
    /// Interest rate
    InterestRate,
    /// Foreign exchange
    ForeignExchange,
    /// Credit
    Credit,
    /// Equity
    Equity,
    /// Commodity
    Commodity,
}

impl AssetClass {
    /// Returns the short code used in FIRE trade files.
    pub fn code(&self) -> &'static str {
        match self {
            AssetClass::InterestRate => "ir",
            AssetClass::ForeignExchange => "fx",
            AssetClass::Credit => "cr",
            AssetClass::Equity => "eq",
            AssetClass::Commodity => "co",
        }
    }
}

impl FromStr for AssetClass {
    type Err = SaccrError;

    /// Accepts both the short codes and the long names.
    ///
    /// ```
    /// use saccr_engine::netting::AssetClass;
    ///
    /// assert_eq!("ir".parse::<AssetClass>().unwrap(), AssetClass::InterestRate);
    /// assert_eq!("Interest Rate".parse::<AssetClass>().unwrap(), AssetClass::InterestRate);
    /// ```
    fn from_str(s: &str) -> Result<Self, SaccrError> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "ir" | "interest_rate" | "rates" => Ok(AssetClass::InterestRate),
            "fx" | "foreign_exchange" => Ok(AssetClass::ForeignExchange),
            "cr" | "credit" => Ok(AssetClass::Credit),
            "eq" | "equity" => Ok(AssetClass::Equity),
            "co" | "commodity" => Ok(AssetClass::Commodity),
            _ => Err(SaccrError::UnknownAssetClass(s.to_string())),
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One trade of a netting set.
///
/// # Examples
///
/// ```
/// use saccr_engine::netting::{AssetClass, LegType, Trade};
/// use saccr_core::types::{CurrencyCode, Date};
///
/// let trade = Trade::builder()
///     .id("swap_1")
///     .asset_class(AssetClass::InterestRate)
///     .currency(CurrencyCode::new("USD").unwrap())
///     .notional(10_000.0)
///     .legs(LegType::Fixed, LegType::Floating)
///     .valuation_date(Date::from_ymd(2009, 1, 17).unwrap())
///     .start_date(Date::from_ymd(2009, 1, 17).unwrap())
///     .end_date(Date::from_ymd(2019, 1, 17).unwrap())
///     .mtm_dirty(30.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(trade.id().as_str(), "swap_1");
/// assert_eq!(trade.supervisory_delta().unwrap(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    id: TradeId,
    asset_class: AssetClass,
    currency: CurrencyCode,
    notional: f64,
    payment_type: LegType,
    receive_type: LegType,
    valuation_date: Date,
    start_date: Date,
    end_date: Date,
    trade_date: Option<Date>,
    value_date: Option<Date>,
    mtm_dirty: f64,
    product_type: Option<String>,
}

impl Trade {
    /// Returns a builder for a trade.
    #[inline]
    pub fn builder() -> TradeBuilder {
        TradeBuilder::new()
    }

    /// Returns the trade ID.
    #[inline]
    pub fn id(&self) -> &TradeId {
        &self.id
    }

    /// Returns the asset class.
    #[inline]
    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Returns the trade currency, which is also its hedging set.
    #[inline]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the pay leg type.
    #[inline]
    pub fn payment_type(&self) -> LegType {
        self.payment_type
    }

    /// Returns the receive leg type.
    #[inline]
    pub fn receive_type(&self) -> LegType {
        self.receive_type
    }

    /// Returns the as-of date the trade's time buckets are measured from.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the start date of the trade period.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the trade period.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the trade date, if known.
    #[inline]
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Returns the value date, if known.
    #[inline]
    pub fn value_date(&self) -> Option<Date> {
        self.value_date
    }

    /// Returns the dirty mark-to-market value.
    #[inline]
    pub fn mtm_dirty(&self) -> f64 {
        self.mtm_dirty
    }

    /// Returns the product type tag (e.g. `vanilla_swap`), if known.
    #[inline]
    pub fn product_type(&self) -> Option<&str> {
        self.product_type.as_deref()
    }

    /// Supervisory delta of a linear trade (BCBS 279 paragraph 159).
    ///
    /// +1 when receiving floating, -1 when receiving fixed.
    ///
    /// # Errors
    ///
    /// `SaccrError::UnsupportedTradeDirection` when both legs have the same type.
    pub fn supervisory_delta(&self) -> Result<f64, SaccrError> {
        match (self.payment_type, self.receive_type) {
            (LegType::Fixed, LegType::Floating) => Ok(1.0),
            (LegType::Floating, LegType::Fixed) => Ok(-1.0),
            (payment, receive) => Err(SaccrError::UnsupportedTradeDirection {
                trade: self.id.to_string(),
                payment,
                receive,
            }),
        }
    }

    /// Checks that the trade can be handled by the interest-rate add-on.
    pub fn ensure_supported(&self) -> Result<(), SaccrError> {
        if self.asset_class != AssetClass::InterestRate {
            return Err(SaccrError::UnsupportedAssetClass {
                trade: self.id.to_string(),
                asset_class: self.asset_class,
            });
        }
        self.supervisory_delta().map(|_| ())
    }
}

/// Builder for creating trades.
#[derive(Debug, Default)]
pub struct TradeBuilder {
    id: Option<TradeId>,
    asset_class: Option<AssetClass>,
    currency: Option<CurrencyCode>,
    notional: Option<f64>,
    payment_type: Option<LegType>,
    receive_type: Option<LegType>,
    valuation_date: Option<Date>,
    start_date: Option<Date>,
    end_date: Option<Date>,
    trade_date: Option<Date>,
    value_date: Option<Date>,
    mtm_dirty: Option<f64>,
    product_type: Option<String>,
}

impl TradeBuilder {
    /// Creates a new trade builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trade ID.
    pub fn id(mut self, id: impl Into<TradeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the asset class.
    pub fn asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = Some(asset_class);
        self
    }

    /// Sets the currency.
    pub fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the notional amount.
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets both leg types.
    pub fn legs(mut self, payment_type: LegType, receive_type: LegType) -> Self {
        self.payment_type = Some(payment_type);
        self.receive_type = Some(receive_type);
        self
    }

    /// Sets the as-of date.
    pub fn valuation_date(mut self, date: Date) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date.
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the trade date.
    pub fn trade_date(mut self, date: Option<Date>) -> Self {
        self.trade_date = date;
        self
    }

    /// Sets the value date.
    pub fn value_date(mut self, date: Option<Date>) -> Self {
        self.value_date = date;
        self
    }

    /// Sets the dirty mark-to-market value.
    pub fn mtm_dirty(mut self, mtm: f64) -> Self {
        self.mtm_dirty = Some(mtm);
        self
    }

    /// Sets the product type tag.
    pub fn product_type(mut self, product_type: Option<String>) -> Self {
        self.product_type = product_type;
        self
    }

    /// Builds the trade.
    ///
    /// # Errors
    ///
    /// - `SaccrError::MissingField` naming the first required field not set
    /// - `SaccrError::NonFiniteValue` when the notional or MTM is NaN or infinite
    pub fn build(self) -> Result<Trade, SaccrError> {
        let id = self.id.ok_or(SaccrError::MissingField {
            trade: "<unnamed>".to_string(),
            field: "id",
        })?;
        let missing = |field: &'static str| SaccrError::MissingField {
            trade: id.to_string(),
            field,
        };

        let finite = |field: &'static str, value: f64| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SaccrError::NonFiniteValue {
                    trade: id.to_string(),
                    field,
                    value,
                })
            }
        };

        Ok(Trade {
            asset_class: self.asset_class.ok_or_else(|| missing("asset_class"))?,
            currency: self.currency.ok_or_else(|| missing("currency_code"))?,
            notional: self
                .notional
                .ok_or_else(|| missing("notional_amount"))
                .and_then(|v| finite("notional_amount", v))?,
            payment_type: self.payment_type.ok_or_else(|| missing("payment_type"))?,
            receive_type: self.receive_type.ok_or_else(|| missing("receive_type"))?,
            valuation_date: self.valuation_date.ok_or_else(|| missing("date"))?,
            start_date: self.start_date.ok_or_else(|| missing("start_date"))?,
            end_date: self.end_date.ok_or_else(|| missing("end_date"))?,
            mtm_dirty: self
                .mtm_dirty
                .ok_or_else(|| missing("mtm_dirty"))
                .and_then(|v| finite("mtm_dirty", v))?,
            trade_date: self.trade_date,
            value_date: self.value_date,
            product_type: self.product_type,
            id,
        })
    }
}
