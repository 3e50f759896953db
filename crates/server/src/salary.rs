//! Salary API endpoints

use api_types::salary::{SalaryNew, SalaryView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::Salary;
use uuid::Uuid;

use crate::{ServerError, expenses::map_amount, server::ServerState};

fn salary_view(salary: Salary) -> SalaryView {
    SalaryView {
        id: salary.id,
        amount_minor: salary.amount.minor(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SalaryView>>, ServerError> {
    let salaries = state.engine.list_salary().await?;
    Ok(Json(salaries.into_iter().map(salary_view).collect()))
}

/// Replace the current salary.
pub async fn set(
    State(state): State<ServerState>,
    Json(payload): Json<SalaryNew>,
) -> Result<Json<SalaryView>, ServerError> {
    let amount = map_amount(payload.amount).validate()?;
    let salary = state.engine.set_salary(amount).await?;
    tracing::debug!(amount = %salary.amount, "salary set");
    Ok(Json(salary_view(salary)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_salary(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
