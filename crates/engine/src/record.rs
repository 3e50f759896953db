//! Expense records: the snapshot value the aggregation functions read, and the
//! validated draft the store writes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Money, RawAmount, ResultEngine, util::normalize_category_display};

/// Categories offered by default. Any other label is accepted as well.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Food", "Transport", "Rent", "Shopping", "Other"];

/// Month bucket used for records without a usable date.
pub const UNKNOWN_MONTH: &str = "Unknown";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense as seen in a snapshot.
///
/// Fields are loose: the aggregation functions must stay total
/// even when the store hands back a malformed amount or date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Present once the record has been persisted.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: RawAmount,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
}

impl ExpenseRecord {
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<RawAmount>,
        date: Option<&str>,
    ) -> Self {
        Self {
            id: None,
            category: category.into(),
            amount: amount.into(),
            date: date.map(ToString::to_string),
        }
    }

    /// Amount used for every total, see [`RawAmount::coerce`].
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount.coerce()
    }

    /// Calendar date, or `None` when missing or malformed.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// `YYYY-MM` bucket key, or [`UNKNOWN_MONTH`].
    #[must_use]
    pub fn month_bucket(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%Y-%m").to_string(),
            None => {
                tracing::debug!(id = ?self.id, date = ?self.date, "unusable date, bucketed as unknown");
                UNKNOWN_MONTH.to_string()
            }
        }
    }
}

/// Parses a `YYYY-MM-DD` string, tolerating surrounding whitespace.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// A validated expense ready to be written to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Validates raw input from the edge of the system.
    ///
    /// Every field is required. The category is trimmed and its inner
    /// whitespace collapsed, the amount must be non-negative with at most two
    /// decimals, the date must be `YYYY-MM-DD`.
    pub fn new(category: Option<&str>, amount: &RawAmount, date: Option<&str>) -> ResultEngine<Self> {
        let category = category
            .and_then(normalize_category_display)
            .ok_or_else(|| EngineError::MissingField("category".to_string()))?;
        let amount = amount.validate()?;
        let date = date
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| EngineError::MissingField("date".to_string()))?;
        let date = parse_date(date)
            .ok_or_else(|| EngineError::InvalidDate(format!("expected YYYY-MM-DD, got '{date}'")))?;

        Ok(Self {
            category,
            amount,
            date,
        })
    }

    /// Builds the snapshot record for this draft under the given id.
    #[must_use]
    pub fn into_record(self, id: Uuid) -> ExpenseRecord {
        ExpenseRecord {
            id: Some(id),
            category: self.category,
            amount: self.amount.into(),
            date: Some(self.date.format(DATE_FORMAT).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bucket_uses_year_and_month() {
        let record = ExpenseRecord::new("Food", 10.0, Some("2024-01-05"));
        assert_eq!(record.month_bucket(), "2024-01");
    }

    #[test]
    fn month_bucket_falls_back_to_unknown() {
        for date in [None, Some(""), Some("yesterday"), Some("2024-13-01"), Some("2024/01/05")] {
            let record = ExpenseRecord::new("Food", 10.0, date);
            assert_eq!(record.month_bucket(), UNKNOWN_MONTH, "date {date:?}");
        }
    }

    #[test]
    fn record_decodes_with_missing_fields() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"category":"Food","amount":"abc"}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.date, None);
        assert_eq!(record.amount(), Money::ZERO);

        let record: ExpenseRecord = serde_json::from_str(r#"{"amount":null,"date":null}"#).unwrap();
        assert_eq!(record.category, "");
        assert_eq!(record.amount, RawAmount::Missing);
    }

    #[test]
    fn draft_normalizes_category() {
        let draft = ExpenseDraft::new(
            Some("  Eating   out "),
            &RawAmount::from(12.5),
            Some("2024-03-01"),
        )
        .unwrap();
        assert_eq!(draft.category, "Eating out");
        assert_eq!(draft.amount, Money::new(1250));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn draft_requires_every_field() {
        let amount = RawAmount::from(1.0);
        assert_eq!(
            ExpenseDraft::new(None, &amount, Some("2024-03-01")),
            Err(EngineError::MissingField("category".to_string()))
        );
        assert_eq!(
            ExpenseDraft::new(Some("   "), &amount, Some("2024-03-01")),
            Err(EngineError::MissingField("category".to_string()))
        );
        assert_eq!(
            ExpenseDraft::new(Some("Food"), &RawAmount::Missing, Some("2024-03-01")),
            Err(EngineError::MissingField("amount".to_string()))
        );
        assert_eq!(
            ExpenseDraft::new(Some("Food"), &amount, None),
            Err(EngineError::MissingField("date".to_string()))
        );
        assert!(matches!(
            ExpenseDraft::new(Some("Food"), &amount, Some("03/01/2024")),
            Err(EngineError::InvalidDate(_))
        ));
        assert!(matches!(
            ExpenseDraft::new(Some("Food"), &RawAmount::from(-5.0), Some("2024-03-01")),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn draft_into_record_keeps_iso_date() {
        let id = Uuid::new_v4();
        let record = ExpenseDraft::new(Some("Rent"), &RawAmount::from("500"), Some("2024-02-01"))
            .unwrap()
            .into_record(id);
        assert_eq!(record.id, Some(id));
        assert_eq!(record.date.as_deref(), Some("2024-02-01"));
        assert_eq!(record.amount(), Money::new(50_000));
    }
}
