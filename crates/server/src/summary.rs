//! Summary API endpoint

use api_types::summary::{
    CategoryTotalView, ComparisonView, MonthlyTotalView, SummaryQuery, SummaryResponse,
};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use engine::{DerivedViews, EngineError, FilterCriteria, parse_date};

use crate::{ServerError, expenses::expense_view, server::ServerState};

/// Blank bounds impose no constraint, anything else must be `YYYY-MM-DD`.
fn date_bound(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, ServerError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    parse_date(value).map(Some).ok_or_else(|| {
        EngineError::InvalidDate(format!("{name}: expected YYYY-MM-DD, got '{value}'")).into()
    })
}

fn summary_response(views: DerivedViews) -> SummaryResponse {
    SummaryResponse {
        salary_minor: views.salary.minor(),
        total_minor: views.summary.total.minor(),
        remaining_minor: views.summary.remaining.minor(),
        expenses: views.filtered.into_iter().map(expense_view).collect(),
        by_category: views
            .by_category
            .into_iter()
            .map(|c| CategoryTotalView {
                category: c.category,
                total_minor: c.total.minor(),
            })
            .collect(),
        by_month: views
            .by_month
            .into_iter()
            .map(|m| MonthlyTotalView {
                month: m.month,
                total_minor: m.total.minor(),
            })
            .collect(),
        comparison: views
            .comparison
            .into_iter()
            .map(|entry| ComparisonView {
                label: entry.label.as_str().to_string(),
                value_minor: entry.value.minor(),
            })
            .collect(),
    }
}

/// Totals, per-category and per-month breakdowns of the expenses matching
/// the query, with the salary comparison.
pub async fn get(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ServerError> {
    let criteria = FilterCriteria {
        from: date_bound(query.from.as_deref(), "from")?,
        to: date_bound(query.to.as_deref(), "to")?,
        category: query.category,
    };

    let snapshot = state.engine.snapshot().await?;
    let views = snapshot.derive(&criteria, &state.options);
    tracing::debug!(
        matched = views.filtered.len(),
        total = snapshot.records.len(),
        "summary derived"
    );

    Ok(Json(summary_response(views)))
}
