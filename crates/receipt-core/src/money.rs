//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Points rules ask questions like "is the total a multiple of 0.25?"    │
//! │  and "what is ceil(price × 0.2)?". With floats:                        │
//! │    15.00 × 0.2 = 3.0000000000000004  → ceil = 4  ❌ WRONG!              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1500 cents × 2000 bps / 1_000_000 = exactly 3                       │
//! │    1225 cents % 25 == 0  → exact quarter check                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! // Parse the decimal text clients send
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // Or build directly from cents
//! let price = Money::from_cents(1099); // $10.99
//! assert!(!price.is_whole_dollars());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

/// Basis points in 100%.
const BPS_PER_UNIT: i128 = 10_000;

/// Cents in one dollar.
const CENTS_PER_DOLLAR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing accepts a leading minus; the validator is the
///   one that rejects negative receipt amounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No float constructor**: Amounts arrive as decimal text and are parsed
///   digit by digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"35.35"`, `"9"`, `"6.4"` or `".25"`.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Optional leading `+` or `-`
    /// - Digits, optionally followed by `.` and more digits
    /// - At most two fractional digits once trailing zeros are dropped
    ///   (`"12.000"` is fine, `"1.255"` is not)
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.25").unwrap().cents(), 1225);
    /// assert_eq!(Money::parse("6.4").unwrap().cents(), 640);
    /// assert!(Money::parse("twelve").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(MoneyError::InvalidFormat(trimmed.to_string()));
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > 2 {
            return Err(MoneyError::SubCentPrecision(trimmed.to_string()));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            // Only digits reach this point, so the only failure is overflow
            whole
                .parse()
                .map_err(|_| MoneyError::OutOfRange(trimmed.to_string()))?
        };

        let fraction_digits = fraction
            .bytes()
            .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        let minor = if fraction.len() == 1 {
            fraction_digits * 10
        } else {
            fraction_digits
        };

        let cents = whole_value
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| MoneyError::OutOfRange(trimmed.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_DOLLAR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// True when the amount has no cents ("9.00", "120").
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.cents_part() == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(1225).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(1226).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Takes `rate_bps` basis points of the amount and rounds UP to whole
    /// dollars.
    ///
    /// ## Implementation
    /// `ceil(cents × bps / (10_000 × 100))` in i128, using Euclidean division
    /// so negative amounts round toward positive infinity as well.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // 20% of $12.25 = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_dollars_at_rate(2000), 3);
    /// // 20% of $15.00 = $3.00 exactly → 3 (a float would say 4)
    /// assert_eq!(Money::from_cents(1500).ceil_dollars_at_rate(2000), 3);
    /// ```
    pub fn ceil_dollars_at_rate(&self, rate_bps: u32) -> i64 {
        let numerator = i128::from(self.0) * i128::from(rate_bps);
        let denominator = BPS_PER_UNIT * i128::from(CENTS_PER_DOLLAR);
        let ceiled = -((-numerator).div_euclid(denominator));
        // Saturate: rates above 100% on huge amounts can leave i64
        i64::try_from(ceiled).unwrap_or(if ceiled < 0 { i64::MIN } else { i64::MAX })
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs. Clients never receive formatted money.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
