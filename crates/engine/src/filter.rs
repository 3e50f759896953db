//! Record filtering.
//!
//! Criteria combine with AND. The output keeps the input order, so a filtered
//! list renders in the same order the store returned it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ExpenseRecord, util::fold};

/// Optional filter criteria. An absent field imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case- and accent-insensitive substring of the category.
    pub category: Option<String>,
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Returns `true` when no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_needle().is_none() && self.from.is_none() && self.to.is_none()
    }

    /// Returns `true` if `record` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.matches_with(record, self.category_needle().as_deref())
    }

    /// Same as [`FilterCriteria::matches`] with the folded category needle
    /// computed once by the caller.
    fn matches_with(&self, record: &ExpenseRecord, needle: Option<&str>) -> bool {
        Self::matches_category(record, needle) && self.matches_dates(record)
    }

    fn category_needle(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
            .map(fold)
    }

    fn matches_category(record: &ExpenseRecord, needle: Option<&str>) -> bool {
        needle.is_none_or(|needle| fold(&record.category).contains(needle))
    }

    fn matches_dates(&self, record: &ExpenseRecord) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(date) = record.parsed_date() else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Returns the records matching `criteria`, in input order.
#[must_use]
pub fn filter(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
    let needle = criteria.category_needle();
    records
        .iter()
        .filter(|record| criteria.matches_with(record, needle.as_deref()))
        .cloned()
        .collect()
}
