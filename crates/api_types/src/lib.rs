//! JSON bodies exchanged with the expense tracker REST API.
//!
//! Money leaves the server as integer minor units (`*_minor` fields). Money
//! enters it as a plain number or numeric string, the way a form submits it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An amount typed by a user: `12.5` or `"12.5"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

pub mod expense {
    use super::*;

    /// Request body for creating or replacing an expense.
    ///
    /// Every field is optional on the wire so a missing one is reported as a
    /// validation error naming the field, not as a decoding failure.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: Option<String>,
        pub amount: Option<AmountInput>,
        /// `YYYY-MM-DD`.
        pub date: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Option<Uuid>,
        pub category: String,
        pub amount_minor: i64,
        pub date: Option<String>,
    }
}

pub mod salary {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SalaryNew {
        pub amount: Option<AmountInput>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SalaryView {
        pub id: Uuid,
        pub amount_minor: i64,
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<String>,
    }
}

pub mod summary {
    use super::*;
    use crate::expense::ExpenseView;

    /// Query string of `GET /api/summary`.
    ///
    /// Bounds are inclusive `YYYY-MM-DD` dates. A blank value, as sent by a
    /// cleared form field, is the same as leaving the parameter out.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct SummaryQuery {
        pub category: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotalView {
        pub category: String,
        pub total_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct MonthlyTotalView {
        /// `YYYY-MM`, or `Unknown` for undated expenses.
        pub month: String,
        pub total_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ComparisonView {
        /// `Salary`, `Expenses` or `Remaining`.
        pub label: String,
        pub value_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct SummaryResponse {
        pub salary_minor: i64,
        pub total_minor: i64,
        /// Negative when expenses exceed the salary.
        pub remaining_minor: i64,
        /// Expenses matching the query, in store order.
        pub expenses: Vec<ExpenseView>,
        pub by_category: Vec<CategoryTotalView>,
        /// Ascending by month.
        pub by_month: Vec<MonthlyTotalView>,
        /// Always three entries: salary, expenses, remaining.
        pub comparison: Vec<ComparisonView>,
    }
}
