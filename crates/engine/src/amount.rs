//! Raw amounts as they arrive in a snapshot, and the coercion policy that
//! turns them into [`Money`].

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine};

/// An expense amount before validation.
///
/// Records fetched from the store or decoded from JSON may carry a number, a
/// numeric string, garbage text or nothing at all. Aggregation goes through
/// [`RawAmount::coerce`], the input boundary goes through
/// [`RawAmount::validate`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawAmount {
    /// Coerces the amount for summation.
    ///
    /// Anything that is not a finite number in range counts as zero. Numeric
    /// strings are parsed, numbers are rounded to the nearest minor unit and
    /// keep their sign.
    #[must_use]
    pub fn coerce(&self) -> Money {
        let coerced = match self {
            RawAmount::Number(value) => Money::from_major(*value),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Money::from_major),
            RawAmount::Missing => None,
        };
        coerced.unwrap_or_else(|| {
            tracing::debug!(amount = ?self, "amount is not numeric, counted as zero");
            Money::ZERO
        })
    }

    /// Strict conversion used before a record enters the store: the amount
    /// must be present, numeric, non-negative and have at most two decimals.
    pub fn validate(&self) -> ResultEngine<Money> {
        let money = match self {
            RawAmount::Number(value) => Money::try_from_major(*value)?,
            RawAmount::Text(text) => text.parse::<Money>()?,
            RawAmount::Missing => return Err(EngineError::MissingField("amount".to_string())),
        };
        if money.is_negative() {
            return Err(EngineError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(money)
    }
}

impl From<Money> for RawAmount {
    fn from(value: Money) -> Self {
        RawAmount::Number(value.minor() as f64 / 100.0)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}
