//! Category and monthly breakdowns.
//!
//! Both functions sum with [`RawAmount::coerce`](crate::RawAmount::coerce),
//! so their totals always add up to the grand total of the same records.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{ExpenseRecord, Money};

/// Output order of [`by_category`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Order in which each category first appears in the input.
    #[default]
    FirstSeen,
    /// Ascending by category string (byte-wise).
    Alphabetical,
}

/// Knobs shared by every consumer of the aggregation functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationOptions {
    pub category_order: CategoryOrder,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// `YYYY-MM` or [`UNKNOWN_MONTH`](crate::UNKNOWN_MONTH).
    pub month: String,
    pub total: Money,
}

/// Sums amounts per exact category label.
///
/// Grouping is case-sensitive: `"Food"` and `"food"` are two entries.
#[must_use]
pub fn by_category(records: &[ExpenseRecord], order: CategoryOrder) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        let amount = record.amount();
        match index.get(record.category.as_str()) {
            Some(&pos) => totals[pos].total = totals[pos].total.saturating_add(amount),
            None => {
                index.insert(record.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: record.category.clone(),
                    total: amount,
                });
            }
        }
    }

    if order == CategoryOrder::Alphabetical {
        totals.sort_by(|a, b| a.category.cmp(&b.category));
    }
    totals
}

/// Sums amounts per `YYYY-MM` bucket, ascending by bucket key.
///
/// Keys compare as plain strings, which is chronological for ISO months. The
/// `"Unknown"` bucket therefore lands after every dated month.
#[must_use]
pub fn by_month(records: &[ExpenseRecord]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<String, Money> = BTreeMap::new();
    for record in records {
        let total = buckets.entry(record.month_bucket()).or_default();
        *total = total.saturating_add(record.amount());
    }

    buckets
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}
