//! Identity lookup and per-user recommendations.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::{recommendation::Recommendation, user::User};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<ResponseJson<ApiResponse<User>>, ApiError> {
    let user = User::find_by_email(&state.db.pool, &email)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(ResponseJson(ApiResponse::success(user)))
}

pub async fn get_user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<Recommendation>>>, ApiError> {
    let recommendations = Recommendation::find_by_user_id(&state.db.pool, user_id).await?;
    Ok(ResponseJson(ApiResponse::success(recommendations)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/by-email/{email}", get(get_user_by_email))
        .route(
            "/users/{user_id}/recommendations",
            get(get_user_recommendations),
        )
}
