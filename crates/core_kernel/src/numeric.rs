//! Lenient numeric values with fixed-precision display
//!
//! Monetary and quantity fields arrive from the backend as JSON numbers,
//! numeric strings, arbitrary strings, or nothing at all. A `LenientNumber`
//! captures whichever of those it was handed and renders it without ever
//! producing a fault: missing input becomes a zero string at the requested
//! precision, a non-numeric string passes through unchanged.

use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Number of decimal places for monetary amounts (USD)
pub const MONEY_PRECISION: u32 = 2;
/// Number of decimal places for mileage quantities
pub const MILEAGE_PRECISION: u32 = 0;
/// Number of decimal places for foreign exchange selling rates
pub const FX_RATE_PRECISION: u32 = 4;

/// A numeric field value as received from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LenientNumber {
    /// Field absent, null, or not number-like
    Missing,
    /// A parseable numeric value
    Value(Decimal),
    /// A string that failed numeric parsing; rendered verbatim
    Raw(String),
}

impl LenientNumber {
    /// Builds a lenient number from a raw payload value.
    ///
    /// JSON numbers and numeric strings parse to `Value`; empty or
    /// whitespace-only strings and nulls collapse to `Missing`;
    /// non-numeric strings are preserved as `Raw`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => LenientNumber::Missing,
            Some(Value::Number(n)) => match parse_decimal(&n.to_string()) {
                Some(d) => LenientNumber::Value(d),
                None => LenientNumber::Raw(n.to_string()),
            },
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    LenientNumber::Missing
                } else {
                    match parse_decimal(trimmed) {
                        Some(d) => LenientNumber::Value(d),
                        None => LenientNumber::Raw(s.clone()),
                    }
                }
            }
            Some(_) => LenientNumber::Missing,
        }
    }

    /// Wraps a known decimal value
    pub fn from_decimal(value: Decimal) -> Self {
        LenientNumber::Value(value)
    }

    /// Returns the numeric value, if one was parsed
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            LenientNumber::Value(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns true when no usable input was received
    pub fn is_missing(&self) -> bool {
        matches!(self, LenientNumber::Missing)
    }

    /// Renders the value with exactly `precision` decimal places.
    ///
    /// `Missing` renders as zero at the same precision ("0", "0.00",
    /// "0.0000"); `Raw` renders the original string unchanged.
    pub fn display(&self, precision: u32) -> String {
        match self {
            LenientNumber::Missing => {
                format!("{:.prec$}", Decimal::ZERO, prec = precision as usize)
            }
            LenientNumber::Value(d) => {
                format!("{:.prec$}", d.round_dp(precision), prec = precision as usize)
            }
            LenientNumber::Raw(s) => s.clone(),
        }
    }

    /// Renders as a monetary amount (2 decimal places)
    pub fn display_money(&self) -> String {
        self.display(MONEY_PRECISION)
    }
}

impl Default for LenientNumber {
    fn default() -> Self {
        LenientNumber::Missing
    }
}

impl fmt::Display for LenientNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(MONEY_PRECISION))
    }
}

fn parse_decimal(input: &str) -> Option<Decimal> {
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}
