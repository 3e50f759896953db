//! Grand total, remaining balance and the salary/expenses/remaining series.

use serde::{Deserialize, Serialize};

use crate::{ExpenseRecord, Money};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFigures {
    pub total: Money,
    /// `salary - total`. Negative when overspent.
    pub remaining: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonLabel {
    Salary,
    Expenses,
    Remaining,
}

impl ComparisonLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Expenses => "Expenses",
            Self::Remaining => "Remaining",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub label: ComparisonLabel,
    pub value: Money,
}

/// Total of all records and what is left of `salary`.
#[must_use]
pub fn summarize(records: &[ExpenseRecord], salary: Money) -> SummaryFigures {
    let total: Money = records.iter().map(ExpenseRecord::amount).sum();
    SummaryFigures {
        total,
        remaining: salary.saturating_sub(total),
    }
}

/// Salary, Expenses, Remaining, always in that order.
#[must_use]
pub fn compare(total: Money, salary: Money, remaining: Money) -> [ComparisonEntry; 3] {
    [
        ComparisonEntry {
            label: ComparisonLabel::Salary,
            value: salary,
        },
        ComparisonEntry {
            label: ComparisonLabel::Expenses,
            value: total,
        },
        ComparisonEntry {
            label: ComparisonLabel::Remaining,
            value: remaining,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_leave_salary_untouched() {
        let figures = summarize(&[], Money::new(100_000));
        assert_eq!(figures.total, Money::ZERO);
        assert_eq!(figures.remaining, Money::new(100_000));
    }

    #[test]
    fn overspend_is_negative_not_clamped() {
        let records = vec![
            ExpenseRecord::new("Food", 100.0, Some("2024-01-01")),
            ExpenseRecord::new("Food", 50.0, Some("2024-01-02")),
        ];
        let figures = summarize(&records, Money::new(10_000));
        assert_eq!(figures.total, Money::new(15_000));
        assert_eq!(figures.remaining, Money::new(-5_000));
    }

    #[test]
    fn comparison_has_fixed_order() {
        let series = compare(Money::new(580), Money::new(1000), Money::new(420));
        let labels: Vec<&str> = series.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Salary", "Expenses", "Remaining"]);
        assert_eq!(series[0].value, Money::new(1000));
        assert_eq!(series[1].value, Money::new(580));
        assert_eq!(series[2].value, Money::new(420));
    }
}
