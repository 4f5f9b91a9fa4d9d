use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    app_module::AppState, generation::generation_controller::generation_router,
    health::health_controller, presentation::presentation_controller::presentation_router,
};

pub fn application_router() -> Router {
    Router::new()
        .merge(presentation_router())
        .merge(generation_router())
        .route("/v1/health", get(health_controller::health))
}

/// The full application with its middleware stack.
pub fn build_app(state: AppState) -> Router {
    application_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    )
}
