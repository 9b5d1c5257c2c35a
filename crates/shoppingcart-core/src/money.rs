//! # Money Module
//!
//! Tax rates and display formatting for monetary values.
//!
//! ## Precision First, Rounding Last
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Decimal everywhere, round only for display               │
//! │    price, qty, tax ──► exact Decimal math ──► NumberFormat::format()    │
//! │                                                 (only place we round)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use shoppingcart_core::money::{NumberFormat, TaxRate};
//!
//! let price = Decimal::new(1000, 2); // 10.00
//! let tax = TaxRate::from_percentage(Decimal::from(21)).tax_on(price);
//! assert_eq!(NumberFormat::PLAIN.format(tax), "2.10");
//! ```

use std::borrow::Cow;
use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry.
pub const MAX_DECIMALS: u32 = 28;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a percentage (`21` means 21%).
///
/// Fractional rates like `8.25` are kept exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a tax rate from a percentage.
    #[inline]
    pub const fn from_percentage(percentage: Decimal) -> Self {
        TaxRate(percentage)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Tax owed on `amount`: `amount * rate / 100`, unrounded.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use shoppingcart_core::money::TaxRate;
    ///
    /// let rate = TaxRate::from_percentage(Decimal::new(825, 2)); // 8.25%
    /// assert_eq!(rate.tax_on(Decimal::from(10)), Decimal::new(825, 3));
    /// ```
    pub fn tax_on(&self, amount: Decimal) -> Decimal {
        amount * (self.0 / Decimal::ONE_HUNDRED)
    }
}

impl From<Decimal> for TaxRate {
    fn from(percentage: Decimal) -> Self {
        TaxRate(percentage)
    }
}

impl From<i32> for TaxRate {
    fn from(percentage: i32) -> Self {
        TaxRate(Decimal::from(percentage))
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Number Format
// =============================================================================

/// Display options for monetary values.
///
/// ## Config Mapping
/// ```toml
/// [format]
/// decimals = 2
/// decimal_point = ","
/// thousands_separator = "."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Digits after the decimal point.
    #[serde(default = "default_decimals")]
    pub decimals: u32,

    #[serde(default = "default_decimal_point")]
    pub decimal_point: Cow<'static, str>,

    /// Separator between groups of three integer digits. Empty by default.
    #[serde(default)]
    pub thousands_separator: Cow<'static, str>,
}

fn default_decimals() -> u32 {
    2
}

fn default_decimal_point() -> Cow<'static, str> {
    Cow::Borrowed(".")
}

impl NumberFormat {
    /// Two decimals, `.` as decimal point, no thousands separator.
    pub const PLAIN: NumberFormat = NumberFormat {
        decimals: 2,
        decimal_point: Cow::Borrowed("."),
        thousands_separator: Cow::Borrowed(""),
    };

    pub fn new(
        decimals: u32,
        decimal_point: impl Into<Cow<'static, str>>,
        thousands_separator: impl Into<Cow<'static, str>>,
    ) -> Self {
        NumberFormat {
            decimals,
            decimal_point: decimal_point.into(),
            thousands_separator: thousands_separator.into(),
        }
    }

    /// Formats `value`, rounding half away from zero to `decimals` places.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use shoppingcart_core::money::NumberFormat;
    ///
    /// let eu = NumberFormat::new(2, ",", ".");
    /// assert_eq!(eu.format(Decimal::new(123456789, 2)), "1.234.567,89");
    /// assert_eq!(NumberFormat::PLAIN.format(Decimal::new(5, 3)), "0.01");
    /// ```
    pub fn format(&self, value: Decimal) -> String {
        let decimals = self.decimals.min(MAX_DECIMALS);

        let mut rounded =
            value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(decimals);

        let digits = rounded.abs().to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&group_thousands(whole, &self.thousands_separator));
        if decimals > 0 {
            out.push_str(&self.decimal_point);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::PLAIN
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
fn group_thousands(whole: &str, separator: &str) -> String {
    if separator.is_empty() || whole.len() <= 3 {
        return whole.to_string();
    }

    let mut out = String::with_capacity(whole.len() + separator.len() * (whole.len() / 3));
    let lead = whole.len() % 3;
    for (i, ch) in whole.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_tax_on() {
        let rate = TaxRate::from(21);
        assert_eq!(rate.tax_on(dec("10.00")), dec("2.1"));
        assert_eq!(TaxRate::zero().tax_on(dec("10.00")), Decimal::ZERO);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from(dec("8.250")).to_string(), "8.25%");
        assert_eq!(TaxRate::from(21).to_string(), "21%");
    }

    #[test]
    fn test_plain_format() {
        let f = NumberFormat::PLAIN;
        assert_eq!(f.format(dec("36.3")), "36.30");
        assert_eq!(f.format(dec("10")), "10.00");
        assert_eq!(f.format(Decimal::ZERO), "0.00");
        assert_eq!(f.format(dec("1234567.891")), "1234567.89");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let f = NumberFormat::PLAIN;
        assert_eq!(f.format(dec("0.825")), "0.83");
        assert_eq!(f.format(dec("0.835")), "0.84");
        assert_eq!(f.format(dec("-0.825")), "-0.83");
        assert_eq!(f.format(dec("-0.001")), "0.00");
    }

    #[test]
    fn test_custom_separators() {
        let f = NumberFormat::new(2, ",", ".");
        assert_eq!(f.format(dec("1234.5")), "1.234,50");
        assert_eq!(f.format(dec("123")), "123,00");
        assert_eq!(f.format(dec("-1234567")), "-1.234.567,00");

        let f = NumberFormat::new(2, ".", " ");
        assert_eq!(f.format(dec("12345")), "12 345.00");
    }

    #[test]
    fn test_zero_decimals() {
        let f = NumberFormat::new(0, ".", ",");
        assert_eq!(f.format(dec("1999.5")), "2,000");
        assert_eq!(f.format(dec("12.4")), "12");
    }

    #[test]
    fn test_more_decimals() {
        let f = NumberFormat::new(4, ".", "");
        assert_eq!(f.format(dec("2.1")), "2.1000");
    }

    #[test]
    fn test_format_does_not_touch_input() {
        let value = dec("2.105");
        let _ = NumberFormat::PLAIN.format(value);
        let _ = NumberFormat::new(0, ".", "").format(value);
        assert_eq!(value, dec("2.105"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("1000", ","), "1,000");
        assert_eq!(group_thousands("100000", ","), "100,000");
        assert_eq!(group_thousands("1000000", ","), "1,000,000");
        assert_eq!(group_thousands("1000000", ""), "1000000");
    }

    #[test]
    fn test_number_format_deserialize_defaults() {
        let f: NumberFormat = serde_json::from_str(r#"{"decimal_point": ","}"#).unwrap();
        assert_eq!(f.decimals, 2);
        assert_eq!(f.decimal_point, ",");
        assert_eq!(f.thousands_separator, "");
    }
}
