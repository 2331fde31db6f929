//! Route table. Handlers live in submodules by surface area.

mod components;
mod generate;
mod health;
mod judge;
mod registry;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/generate", post(generate::generate))
        .route("/api/judge", post(judge::judge))
        .route("/api/mock/edr/{edrpou}", get(registry::edr))
        .route("/api/mock/tax/{inn}", get(registry::tax))
        .route("/api/mock/vehicle/{plate}", get(registry::vehicle))
        .route("/api/mock/land/{cadastral_number}", get(registry::land))
        .route(
            "/api/mock/diia/documents/{doc_type}",
            get(registry::diia_document),
        )
        .route("/api/mock/subsidies/check", post(registry::subsidy_check))
        .route("/api/components/search", get(components::search))
        .with_state(state)
}
