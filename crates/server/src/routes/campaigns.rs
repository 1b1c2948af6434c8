//! Buyer dashboard routes: campaigns and their downstream records.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::{
    attribution::Attribution,
    campaign::Campaign,
    campaign_health::CampaignHealth,
    campaign_history::CampaignHistory,
    creative::{Creative, CreativeFatigueAlert},
    dsp_performance::DspPerformance,
    prediction::CacPrediction,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn get_buyer_campaigns(
    State(state): State<AppState>,
    Path(buyer_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<Campaign>>>, ApiError> {
    let campaigns = Campaign::find_by_buyer_id(&state.db.pool, buyer_id).await?;
    Ok(ResponseJson(ApiResponse::success(campaigns)))
}

pub async fn get_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Campaign>>, ApiError> {
    let campaign = Campaign::find_by_id(&state.db.pool, campaign_id)
        .await?
        .ok_or(ApiError::NotFound("campaign"))?;
    Ok(ResponseJson(ApiResponse::success(campaign)))
}

pub async fn get_campaign_history(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<CampaignHistory>>>, ApiError> {
    let history = CampaignHistory::find_by_campaign_id(&state.db.pool, campaign_id).await?;
    Ok(ResponseJson(ApiResponse::success(history)))
}

pub async fn get_campaign_creatives(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<Creative>>>, ApiError> {
    let creatives = Creative::find_by_campaign_id(&state.db.pool, campaign_id).await?;
    Ok(ResponseJson(ApiResponse::success(creatives)))
}

pub async fn get_campaign_alerts(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<CreativeFatigueAlert>>>, ApiError> {
    let alerts = CreativeFatigueAlert::find_by_campaign_id(&state.db.pool, campaign_id).await?;
    Ok(ResponseJson(ApiResponse::success(alerts)))
}

pub async fn get_campaign_prediction(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<CacPrediction>>, ApiError> {
    let prediction = CacPrediction::find_latest_by_campaign_id(&state.db.pool, campaign_id)
        .await?
        .ok_or(ApiError::NotFound("prediction"))?;
    Ok(ResponseJson(ApiResponse::success(prediction)))
}

pub async fn get_campaign_dsp_performance(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<DspPerformance>>>, ApiError> {
    let rows = DspPerformance::find_by_campaign_id(&state.db.pool, campaign_id).await?;
    Ok(ResponseJson(ApiResponse::success(rows)))
}

pub async fn get_campaign_attributions(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<Attribution>>>, ApiError> {
    let attributions = Attribution::find_by_campaign_id(&state.db.pool, campaign_id).await?;
    Ok(ResponseJson(ApiResponse::success(attributions)))
}

pub async fn get_campaign_health(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<CampaignHealth>>, ApiError> {
    let health = CampaignHealth::find_latest_by_campaign_id(&state.db.pool, campaign_id)
        .await?
        .ok_or(ApiError::NotFound("campaign health"))?;
    Ok(ResponseJson(ApiResponse::success(health)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buyers/{buyer_id}/campaigns", get(get_buyer_campaigns))
        .nest(
            "/campaigns/{campaign_id}",
            Router::new()
                .route("/", get(get_campaign))
                .route("/history", get(get_campaign_history))
                .route("/creatives", get(get_campaign_creatives))
                .route("/alerts", get(get_campaign_alerts))
                .route("/prediction", get(get_campaign_prediction))
                .route("/dsp-performance", get(get_campaign_dsp_performance))
                .route("/attributions", get(get_campaign_attributions))
                .route("/health", get(get_campaign_health)),
        )
}
