use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use moneta_core::accounts::Account;
use moneta_core::ChartDataset;
use serde::Deserialize;

/// Query parameters shared by the report chart endpoints.
#[derive(Debug, Deserialize)]
struct ChartReportParams {
    /// Comma-separated account ids.
    accounts: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl ChartReportParams {
    fn validate(&self) -> Result<(), ApiError> {
        if self.accounts.trim().is_empty() {
            return Err(ApiError::unprocessable("accounts must not be empty"));
        }
        if self.start > self.end {
            return Err(ApiError::unprocessable(
                "start must be on or before end",
            ));
        }
        Ok(())
    }

    fn account_ids(&self) -> Vec<String> {
        self.accounts
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn resolve_accounts(state: &AppState, params: &ChartReportParams) -> ApiResult<Vec<Account>> {
    let ids = params.account_ids();
    let accounts = state.account_service.get_accounts_by_ids(&ids)?;
    if accounts.is_empty() {
        return Err(ApiError::not_found("no matching accounts"));
    }
    Ok(accounts)
}

async fn net_worth_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartReportParams>,
) -> ApiResult<Json<ChartDataset>> {
    params.validate()?;
    let accounts = resolve_accounts(&state, &params)?;
    let dataset = state
        .net_worth_report
        .net_worth_series(&accounts, params.start, params.end)?;
    Ok(Json(dataset))
}

async fn operations_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartReportParams>,
) -> ApiResult<Json<ChartDataset>> {
    params.validate()?;
    let accounts = resolve_accounts(&state, &params)?;
    let dataset = state
        .operations_report
        .operations_series(&accounts, params.start, params.end)?;
    Ok(Json(dataset))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chart/report/net-worth", get(net_worth_chart))
        .route("/chart/report/operations", get(operations_chart))
}
