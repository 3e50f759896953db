//! A point-in-time copy of the store and every view derived from it.

use serde::{Deserialize, Serialize};

use crate::{
    AggregationOptions, CategoryTotal, ComparisonEntry, ExpenseRecord, FilterCriteria, Money,
    MonthlyTotal, Salary, SummaryFigures, aggregate, filter, summary,
};

/// Records and salary fetched together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub records: Vec<ExpenseRecord>,
    pub salary: Money,
}

/// Everything the display layer needs, computed from one filtered set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedViews {
    pub salary: Money,
    pub filtered: Vec<ExpenseRecord>,
    pub summary: SummaryFigures,
    pub by_category: Vec<CategoryTotal>,
    pub by_month: Vec<MonthlyTotal>,
    pub comparison: [ComparisonEntry; 3],
}

impl Snapshot {
    pub fn new(records: Vec<ExpenseRecord>, salary: Money) -> Self {
        Self { records, salary }
    }

    /// Builds a snapshot from the store listings. The first salary, if any,
    /// is the current one.
    pub fn from_listing(records: Vec<ExpenseRecord>, salaries: &[Salary]) -> Self {
        let salary = salaries.first().map(|s| s.amount).unwrap_or_default();
        Self { records, salary }
    }

    /// Filters once, then derives every view from the filtered set.
    ///
    /// Pure: the same snapshot, criteria and options always give the same
    /// result.
    #[must_use]
    pub fn derive(&self, criteria: &FilterCriteria, options: &AggregationOptions) -> DerivedViews {
        let filtered = filter::filter(&self.records, criteria);
        let figures = summary::summarize(&filtered, self.salary);
        let by_category = aggregate::by_category(&filtered, options.category_order);
        let by_month = aggregate::by_month(&filtered);
        let comparison = summary::compare(figures.total, self.salary, figures.remaining);

        DerivedViews {
            salary: self.salary,
            filtered,
            summary: figures,
            by_category,
            by_month,
            comparison,
        }
    }
}
