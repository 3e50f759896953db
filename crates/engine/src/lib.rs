//! Expense tracking engine.
//!
//! Two halves live here:
//!
//! - the aggregation functions ([`filter()`], [`by_category`], [`by_month`],
//!   [`summarize`], [`compare`], [`Snapshot::derive`]). They are pure,
//!   synchronous and total: malformed amounts count as zero and undated
//!   records land in the [`UNKNOWN_MONTH`] bucket;
//! - the record store ([`Engine`]), persisting expenses and the salary with
//!   sea-orm. Every mutation is followed by a fresh [`Engine::snapshot`]
//!   before views are recomputed.

pub use aggregate::{
    AggregationOptions, CategoryOrder, CategoryTotal, MonthlyTotal, by_category, by_month,
};
pub use amount::RawAmount;
pub use error::EngineError;
pub use filter::{FilterCriteria, filter};
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use record::{DEFAULT_CATEGORIES, ExpenseDraft, ExpenseRecord, UNKNOWN_MONTH, parse_date};
pub use salaries::Salary;
pub use snapshot::{DerivedViews, Snapshot};
pub use summary::{ComparisonEntry, ComparisonLabel, SummaryFigures, compare, summarize};

pub mod aggregate;
mod amount;
mod error;
mod expenses;
pub mod filter;
mod money;
mod ops;
mod record;
mod salaries;
mod snapshot;
pub mod summary;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
