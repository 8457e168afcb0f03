use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use moneta_core::budgets::{AvailableBudget, AvailableBudgetUpdate, NewAvailableBudget};

async fn get_available_budgets(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AvailableBudget>>> {
    let budgets = state.budget_service.list_available_budgets()?;
    Ok(Json(budgets))
}

async fn get_available_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AvailableBudget>> {
    let budget = state.budget_service.get_available_budget(id)?;
    Ok(Json(budget))
}

async fn create_available_budget(
    State(state): State<Arc<AppState>>,
    Json(budget): Json<NewAvailableBudget>,
) -> ApiResult<Json<AvailableBudget>> {
    let b = state.budget_service.create_available_budget(budget).await?;
    Ok(Json(b))
}

async fn update_available_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<AvailableBudgetUpdate>,
) -> ApiResult<Json<AvailableBudget>> {
    let b = state
        .budget_service
        .update_available_budget(id, update)
        .await?;
    Ok(Json(b))
}

async fn delete_available_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_available_budget(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/available-budgets",
            get(get_available_budgets).post(create_available_budget),
        )
        .route(
            "/available-budgets/{id}",
            get(get_available_budget)
                .put(update_available_budget)
                .delete(delete_available_budget),
        )
}
