//! Owner dashboard routes: data assets and earnings.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use chrono::Utc;
use db::models::{
    data_asset::DataAsset,
    earning::{Earning, EarningWithAsset},
};
use services::services::earnings_stats::EarningsStats;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

const EARNINGS_PAGE_SIZE: i64 = 50;

pub async fn get_owner_assets(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<DataAsset>>>, ApiError> {
    let assets = DataAsset::find_by_owner_id(&state.db.pool, owner_id).await?;
    Ok(ResponseJson(ApiResponse::success(assets)))
}

pub async fn get_owner_earnings(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<EarningWithAsset>>>, ApiError> {
    let earnings =
        Earning::find_by_owner_id_with_asset(&state.db.pool, owner_id, EARNINGS_PAGE_SIZE).await?;
    Ok(ResponseJson(ApiResponse::success(earnings)))
}

pub async fn get_owner_earnings_stats(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<EarningsStats>>, ApiError> {
    let stats = EarningsStats::for_owner(&state.db.pool, owner_id, Utc::now()).await?;
    Ok(ResponseJson(ApiResponse::success(stats)))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/owners/{owner_id}",
        Router::new()
            .route("/assets", get(get_owner_assets))
            .route("/earnings", get(get_owner_earnings))
            .route("/earnings/stats", get(get_owner_earnings_stats)),
    )
}
