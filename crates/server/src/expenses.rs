//! Expenses API endpoints

use api_types::{
    AmountInput,
    expense::{ExpenseNew, ExpenseView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{ExpenseDraft, ExpenseRecord, RawAmount};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn map_amount(amount: Option<AmountInput>) -> RawAmount {
    match amount {
        Some(AmountInput::Number(value)) => RawAmount::Number(value),
        Some(AmountInput::Text(value)) => RawAmount::Text(value),
        None => RawAmount::Missing,
    }
}

pub(crate) fn expense_view(record: ExpenseRecord) -> ExpenseView {
    ExpenseView {
        id: record.id,
        amount_minor: record.amount().minor(),
        category: record.category,
        date: record.date,
    }
}

fn draft(payload: ExpenseNew) -> Result<ExpenseDraft, ServerError> {
    let amount = map_amount(payload.amount);
    Ok(ExpenseDraft::new(
        payload.category.as_deref(),
        &amount,
        payload.date.as_deref(),
    )?)
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let records = state.engine.list_expenses().await?;
    Ok(Json(records.into_iter().map(expense_view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseView>, ServerError> {
    let record = state.engine.expense(id).await?;
    Ok(Json(expense_view(record)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let draft = draft(payload)?;
    let record = state.engine.save_expense(None, draft).await?;
    tracing::debug!(id = ?record.id, "expense created");
    Ok((StatusCode::CREATED, Json(expense_view(record))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<ExpenseView>, ServerError> {
    let draft = draft(payload)?;
    let record = state.engine.save_expense(Some(id), draft).await?;
    tracing::debug!(%id, "expense updated");
    Ok(Json(expense_view(record)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_expense(id).await?;
    tracing::debug!(%id, "expense deleted");
    Ok(StatusCode::NO_CONTENT)
}
