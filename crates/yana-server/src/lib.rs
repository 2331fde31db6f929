//! HTTP surface for the Diia flow prototyping backend: generation,
//! judging, mock registries, and component search.

pub mod error;
pub mod generator;
pub mod routes;
pub mod settings;
pub mod state;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full router with error-path stamping, CORS, and request
/// tracing.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors_origins_list());
    routes::router(state)
        .layer(axum::middleware::from_fn(error::attach_error_path))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}
