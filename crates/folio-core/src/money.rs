//! # Money Module
//!
//! Provides the `Money` type for book prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices:                                                  │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart of 1,000 entries at $0.10 drifts away from $100.00             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Micros (1/1,000,000 of a dollar)                 │
//! │    Prices keep up to six fractional digits exactly as entered.         │
//! │    Totals are summed exactly; rounding to cents happens only in        │
//! │    Display, never in a stored price or a running total.                │
//! │                                                                         │
//! │    0.333 + 0.333 + 0.333 = 0.999  ──Display──►  "$1.00"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bounds
//! A single price is at most [`Money::MAX_PRICE`] ($1,000,000,000). At that
//! scale every price is an integer below 2^53 micros, so the JSON number
//! written to storage reads back to the same value. Addition saturates
//! instead of overflowing.
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! let gatsby: Money = "12.99".parse().unwrap();
//! let habits = Money::from_cents(2450);
//!
//! assert_eq!((gatsby + habits).to_string(), "$37.49");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// Micros per dollar.
const MICROS_PER_MAJOR: i64 = 1_000_000;

/// Micros per cent.
const MICROS_PER_CENT: i64 = 10_000;

/// Fractional digits kept exactly.
const SCALE_DIGITS: usize = 6;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in millionths of a dollar.
///
/// ## Where Money is Used
/// ```text
/// BookDraft.price ("12.99") ──► parse ──► Book.price ──► CartEntry snapshot
///                                              │                 │
///                                              ▼                 ▼
///                                     BookCard.price      Cart.total()
///                                        "$12.99"           "$37.49"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest accepted price, in dollars.
    pub const MAX_PRICE_DOLLARS: i64 = 1_000_000_000;

    /// Largest accepted price.
    pub const MAX_PRICE: Money = Money(Self::MAX_PRICE_DOLLARS * MICROS_PER_MAJOR);

    /// Creates a Money value from whole cents.
    ///
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(1499);
    /// assert_eq!(price.cents(), 1499);
    /// assert_eq!(price.to_string(), "$14.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents.saturating_mul(MICROS_PER_CENT))
    }

    /// Creates a Money value from millionths of a dollar.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Money(micros)
    }

    /// Returns the exact value in millionths of a dollar.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to the nearest cent (half away from zero).
    pub const fn cents(&self) -> i64 {
        let whole = self.0 / MICROS_PER_CENT;
        let rest = self.0 % MICROS_PER_CENT;
        if rest >= MICROS_PER_CENT / 2 {
            whole + 1
        } else if rest <= -MICROS_PER_CENT / 2 {
            whole - 1
        } else {
            whole
        }
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the value is a valid price: between zero and `MAX_PRICE`.
    #[inline]
    pub const fn is_valid_price(&self) -> bool {
        self.0 >= 0 && self.0 <= Self::MAX_PRICE.0
    }

    /// Converts a float price to the nearest micro.
    ///
    /// Only used at the storage boundary, where prices arrive as JSON
    /// numbers. Returns `None` for non-finite, negative or too-large values.
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let micros = (amount * MICROS_PER_MAJOR as f64).round();
        if micros < 0.0 || micros > Self::MAX_PRICE.0 as f64 {
            return None;
        }
        Some(Money(micros as i64))
    }

    /// Returns the amount as a float in dollars, for JSON output.
    ///
    /// Exact round trip through [`Money::from_f64`] for every valid price.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / MICROS_PER_MAJOR as f64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a price string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("value is empty")]
    Empty,

    #[error("not a number")]
    Invalid,

    #[error("must not be negative")]
    Negative,

    #[error("must be at most {}", Money::MAX_PRICE_DOLLARS)]
    TooLarge,
}

/// Parses a plain decimal string: `"12"`, `"12.5"`, `"12.999"`, `".5"`.
///
/// Up to six fractional digits are kept exactly; further digits round to
/// the nearest micro. Exponents, signs other than a leading `-`, thousands
/// separators and `NaN`/`inf` are rejected. Surrounding whitespace is
/// ignored.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::Invalid);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::Invalid);
        }

        let whole = whole.trim_start_matches('0');
        let is_zero = whole.is_empty() && fraction.bytes().all(|b| b == b'0');
        if negative && !is_zero {
            return Err(ParseMoneyError::Negative);
        }

        // more than 10 integer digits is past MAX_PRICE
        if whole.len() > 10 {
            return Err(ParseMoneyError::TooLarge);
        }
        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Invalid)?
        };

        let (kept, dropped) = fraction.split_at(fraction.len().min(SCALE_DIGITS));
        let mut fraction_value: i64 = 0;
        for b in kept.bytes() {
            fraction_value = fraction_value * 10 + i64::from(b - b'0');
        }
        // "5" means half a dollar: pad to six digits
        for _ in kept.len()..SCALE_DIGITS {
            fraction_value *= 10;
        }
        if dropped.bytes().next().is_some_and(|b| b >= b'5') {
            fraction_value += 1;
        }

        let micros = whole_value * MICROS_PER_MAJOR + fraction_value;
        let money = Money(micros);
        if !money.is_valid_price() {
            return Err(ParseMoneyError::TooLarge);
        }

        Ok(money)
    }
}

// =============================================================================
// Decimal serde representation
// =============================================================================

/// Serde adapter storing money as a decimal JSON number (`12.99`).
///
/// Use with `#[serde(with = "crate::money::decimal")]`. Deserialization
/// also accepts numeric strings (`"12.99"`, `"0.333"`), which older stored
/// carts contain. Values outside `0..=MAX_PRICE` are rejected.
pub mod decimal {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Money::from_f64(n)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {n}"))),
            Raw::Text(s) => s
                .parse::<Money>()
                .map_err(|e| serde::de::Error::custom(format!("invalid price {s:?}: {e}"))),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the storefront price format rounded to cents, e.g. `$12.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the `i64` bounds instead of overflowing.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.micros(), 10_990_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Money::from_cents(1500).to_string(), "$15.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Money::from_micros(12_999_000).to_string(), "$13.00");
        assert_eq!(Money::from_micros(12_994_999).to_string(), "$12.99");
        assert_eq!(Money::from_micros(12_995_000).to_string(), "$13.00");
        assert_eq!(Money::from_micros(4_000).to_string(), "$0.00");
    }

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!("12.99".parse::<Money>().unwrap().cents(), 1299);
        assert_eq!("24.5".parse::<Money>().unwrap().cents(), 2450);
        assert_eq!("15".parse::<Money>().unwrap().cents(), 1500);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
        assert_eq!(" 0.05 ".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("0".parse::<Money>().unwrap(), Money::zero());
        assert_eq!("-0".parse::<Money>().unwrap(), Money::zero());
        assert_eq!("-0.00".parse::<Money>().unwrap(), Money::zero());
        assert_eq!("007.10".parse::<Money>().unwrap().cents(), 710);
    }

    #[test]
    fn test_parse_keeps_sub_cent_digits() {
        assert_eq!("12.999".parse::<Money>().unwrap().micros(), 12_999_000);
        assert_eq!("0.333".parse::<Money>().unwrap().micros(), 333_000);
        assert_eq!("1.123456".parse::<Money>().unwrap().micros(), 1_123_456);
        // past six digits rounds to the nearest micro
        assert_eq!("1.0000005".parse::<Money>().unwrap().micros(), 1_000_001);
        assert_eq!("1.0000004999".parse::<Money>().unwrap().micros(), 1_000_000);
    }

    #[test]
    fn test_parse_rejects_bad_prices() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("abc".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!(".".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!("1e3".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!("NaN".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!("1,000".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!("1.2.3".parse::<Money>(), Err(ParseMoneyError::Invalid));
        assert_eq!("-1".parse::<Money>(), Err(ParseMoneyError::Negative));
        assert_eq!("-0.001".parse::<Money>(), Err(ParseMoneyError::Negative));
    }

    #[test]
    fn test_parse_caps_price() {
        assert_eq!("1000000000".parse::<Money>().unwrap(), Money::MAX_PRICE);
        assert_eq!(
            "1000000000.000001".parse::<Money>(),
            Err(ParseMoneyError::TooLarge)
        );
        assert_eq!(
            "50000000000000000".parse::<Money>(),
            Err(ParseMoneyError::TooLarge)
        );
        assert_eq!(
            "99999999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::TooLarge)
        );
        assert_eq!(
            "0000000000001.5".parse::<Money>().unwrap().cents(),
            150
        );
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = [Money::from_cents(1299), Money::from_cents(2450)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.to_string(), "$37.49");

        // 1,000 dimes are exactly $100.00
        let dimes: Money = std::iter::repeat(Money::from_cents(10)).take(1000).sum();
        assert_eq!(dimes.cents(), 10_000);

        // rounding happens once, on the total
        let thirds: Money = std::iter::repeat("0.333".parse::<Money>().unwrap())
            .take(3)
            .sum();
        assert_eq!(thirds.micros(), 999_000);
        assert_eq!(thirds.to_string(), "$1.00");
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let total: Money = std::iter::repeat(Money::MAX_PRICE).take(20_000).sum();
        assert_eq!(total.micros(), i64::MAX);

        let mut running = Money::from_micros(i64::MAX - 1);
        running += Money::from_cents(1);
        assert_eq!(running.micros(), i64::MAX);
        assert!(!running.to_string().is_empty());
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
    }

    #[test]
    fn test_decimal_serde_writes_number() {
        let json = serde_json::to_string(&Priced {
            price: Money::from_cents(1299),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":12.99}"#);
    }

    #[test]
    fn test_decimal_serde_accepts_numbers_and_strings() {
        let from_number: Priced = serde_json::from_str(r#"{"price":24.5}"#).unwrap();
        assert_eq!(from_number.price.cents(), 2450);

        let from_string: Priced = serde_json::from_str(r#"{"price":"14.99"}"#).unwrap();
        assert_eq!(from_string.price.cents(), 1499);

        let sub_cent: Priced = serde_json::from_str(r#"{"price":"0.333"}"#).unwrap();
        assert_eq!(sub_cent.price.micros(), 333_000);

        assert!(serde_json::from_str::<Priced>(r#"{"price":"cheap"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":-3}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"-3"}"#).is_err());
    }

    #[test]
    fn test_decimal_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Priced>(r#"{"price":5e16}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"50000000000000000"}"#).is_err());
    }

    #[test]
    fn test_decimal_serde_round_trips_largest_price() {
        for price in [
            Money::MAX_PRICE,
            Money::from_micros(Money::MAX_PRICE.micros() - 1),
            "999999999.999999".parse::<Money>().unwrap(),
            "12.999".parse::<Money>().unwrap(),
        ] {
            let json = serde_json::to_string(&Priced { price }).unwrap();
            let back: Priced = serde_json::from_str(&json).unwrap();
            assert_eq!(back.price, price, "{json}");
        }
    }
}
