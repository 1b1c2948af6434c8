use axum::Router;
use db::DBService;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
}

pub fn app(db: DBService) -> Router {
    let state = AppState { db };
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
