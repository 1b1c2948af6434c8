//! Administrative routes: demo dataset seeding and verification.

use axum::{
    Router,
    extract::State,
    response::Json as ResponseJson,
    routing::{get, post},
};
use rand::{SeedableRng, rngs::StdRng};
use services::services::{
    demo_seed::{DemoSeedService, SeedSummary},
    seed_verify::{SeedReport, SeedVerifyService},
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// Populate the store with the demo marketplace dataset.
///
/// Identity records are reused across invocations; everything downstream is
/// written fresh each run.
pub async fn seed_demo(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<SeedSummary>>, ApiError> {
    let mut rng = StdRng::from_entropy();
    let summary = DemoSeedService::run(&state.db.pool, &mut rng).await?;
    Ok(ResponseJson(ApiResponse::success(summary)))
}

/// Read back the seeded dataset for operator inspection.
pub async fn verify_demo(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<SeedReport>>, ApiError> {
    let report = SeedVerifyService::verify(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(report)))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/admin/demo-seed",
        Router::new()
            .route("/", post(seed_demo))
            .route("/verify", get(verify_demo)),
    )
}
