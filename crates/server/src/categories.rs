//! Categories API endpoint

use api_types::category::CategoriesResponse;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Default categories followed by the ones already in use.
pub async fn list(State(state): State<ServerState>) -> Result<Json<CategoriesResponse>, ServerError> {
    let categories = state.engine.categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}
