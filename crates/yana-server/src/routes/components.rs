use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use yana_registry::components::{self, ComponentRecord};

use crate::error::ApiError;

fn default_limit() -> usize {
    1
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub async fn search(
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ComponentRecord>>, ApiError> {
    if query.limit == 0 {
        return Err(ApiError::bad_request("limit має бути щонайменше 1"));
    }
    let results = components::search(&query.q, query.limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(results))
}
