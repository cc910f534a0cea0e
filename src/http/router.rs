//! Routes et middlewares (trace, compression, CORS).

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/{items}", get(handlers::api_rotation))
        .route("/{items}/schedule", get(handlers::api_schedule));

    // les segments statiques priment sur `/{items}`
    Router::new()
        .route("/", get(handlers::home))
        .route("/select", get(handlers::select))
        .route("/styles.css", get(handlers::styles))
        .route("/health", get(handlers::health_check))
        .route("/{items}", get(handlers::rotation_page))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationDefaults;
    use crate::rotation::SystemClock;
    use std::sync::Arc;

    #[test]
    fn router_builds() {
        let state = AppState::new(Arc::new(SystemClock), RotationDefaults::default());
        let _router = create_router(state);
    }
}
