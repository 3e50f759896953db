use std::{fmt, iter::Sum, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Largest magnitude, in minor units, a parsed or coerced amount may have
/// (10^13 major units).
pub const MAX_MINOR: i64 = 1_000_000_000_000_000;

/// Signed money amount represented as **integer minor units** (cents).
///
/// Every total the engine produces is summed in this type, so category and
/// monthly breakdowns add up exactly to the grand total.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Saturating addition, clamps at the `i64` bounds.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction, clamps at the `i64` bounds.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    /// Converts a major-unit float, rounding half away from zero to the
    /// nearest minor unit.
    ///
    /// Returns `None` for NaN, infinities and magnitudes above [`MAX_MINOR`].
    #[must_use]
    pub fn from_major(value: f64) -> Option<Money> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * 100.0).round();
        if scaled.abs() > MAX_MINOR as f64 {
            return None;
        }
        Some(Money(scaled as i64))
    }

    /// Like [`Money::from_major`], but rejects values with more than two
    /// fractional digits instead of rounding them.
    pub fn try_from_major(value: f64) -> Result<Money, EngineError> {
        let money = Money::from_major(value)
            .ok_or_else(|| EngineError::InvalidAmount(format!("amount out of range: {value}")))?;
        if ((value * 100.0) - money.0 as f64).abs() > 1e-6 {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }
        Ok(money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let minor = abs % 100;
        write!(f, "{sign}{major}.{minor:02}")
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidAmount(reason.to_string())
}

/// Parses an unsigned run of ASCII digits. Empty input is rejected.
fn digits(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

impl FromStr for Money {
    type Err = EngineError;

    /// Strict decimal parser used for typed input.
    ///
    /// `.` and `,` are both accepted as decimal separator, a leading `+` or
    /// `-` is allowed, at most two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, trimmed[1..].trim_start()),
            Some(b'+') => (false, trimmed[1..].trim_start()),
            Some(_) => (false, trimmed),
            None => return Err(invalid("empty amount")),
        };

        let normalized = unsigned.replace(',', ".");
        let (whole, fraction) = match normalized.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (normalized.as_str(), ""),
        };

        let whole = digits(whole).ok_or_else(|| invalid("invalid amount"))?;
        let fraction = match fraction.len() {
            0 => 0,
            1 => digits(fraction).ok_or_else(|| invalid("invalid amount"))? * 10,
            2 => digits(fraction).ok_or_else(|| invalid("invalid amount"))?,
            _ if fraction.contains('.') => return Err(invalid("invalid amount")),
            _ => return Err(invalid("too many decimals")),
        };

        let minor = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(fraction))
            .filter(|v| *v <= MAX_MINOR)
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -minor } else { minor }))
    }
}
