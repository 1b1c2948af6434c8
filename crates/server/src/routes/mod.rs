use axum::Router;

use crate::AppState;

pub mod admin;
pub mod campaigns;
pub mod owners;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(admin::router())
        .merge(campaigns::router())
        .merge(owners::router())
        .merge(users::router())
}
