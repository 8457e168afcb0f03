use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use moneta_core::accounts::{Account, AccountUpdate, NewAccount};

async fn get_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.account_service.get_all_accounts()?;
    Ok(Json(accounts))
}

async fn get_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Account>> {
    let account = state.account_service.get_account(&id)?;
    Ok(Json(account))
}

async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    let a = state.account_service.create_account(account).await?;
    Ok(Json(a))
}

async fn update_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<AccountUpdate>,
) -> ApiResult<Json<Account>> {
    let a = state.account_service.update_account(account).await?;
    Ok(Json(a))
}

async fn delete_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.account_service.delete_account(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/accounts",
            get(get_accounts).post(create_account).put(update_account),
        )
        .route("/accounts/{id}", get(get_account).delete(delete_account))
}
