use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use services::services::{
    demo_seed::DemoSeedError, earnings_stats::EarningsStatsError, seed_verify::SeedVerifyError,
};
use thiserror::Error;
use tracing::error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Seed(#[from] DemoSeedError),
    #[error(transparent)]
    Verify(#[from] SeedVerifyError),
    #[error(transparent)]
    EarningsStats(#[from] EarningsStatsError),
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
