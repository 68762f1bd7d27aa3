use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::{
    middleware::request_id::{assign_request_id, request_span},
    views::assets::IMAGES_ROUTE,
};

/// Creates the dashboard router with all routes
pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(state.inner.config.images_path());

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health_check))
        .nest_service(IMAGES_ROUTE, images)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(assign_request_id))
                .layer(TraceLayer::new_for_http().make_span_with(request_span)),
        )
        .with_state(state)
}
