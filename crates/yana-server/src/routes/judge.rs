use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use yana_core::model::{Evaluation, RetrievalContext};
use yana_core::Flow;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JudgeRequest {
    pub flow: Flow,
    #[serde(default)]
    pub context: Option<RetrievalContext>,
}

/// Judge an existing flow. When the caller sends no retrieval context,
/// the full built-in catalog is used.
pub async fn judge(
    State(state): State<AppState>,
    Json(request): Json<JudgeRequest>,
) -> Result<Json<Evaluation>, ApiError> {
    let ctx = request
        .context
        .unwrap_or_else(yana_registry::retrieval_context);
    let evaluation = state.judge.evaluate(&request.flow, Some(&ctx)).await?;
    Ok(Json(evaluation))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::app;
    use crate::routes::test_support;

    async fn post_flow(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = app(test_support::state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/judge")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn flow(steps: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "flow": {
                "id": "flow_test",
                "name": "Тестовий флоу",
                "steps": steps,
            }
        })
    }

    #[tokio::test]
    async fn well_formed_flow_gets_a_full_report() {
        let (status, body) = post_flow(flow(serde_json::json!([
            {"id": "s1", "type": "form", "title": "Дані",
             "component": {"name": "form_step"},
             "api_calls": [{"api_type": "edr"}]},
            {"id": "s2", "type": "confirmation", "title": "Готово"},
        ])))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["flow_id"], "flow_test");
        assert!(body["overall_assessment"].is_string());
    }

    #[tokio::test]
    async fn duplicate_step_ids_are_rejected_with_400() {
        let (status, body) = post_flow(flow(serde_json::json!([
            {"id": "s1", "type": "form", "title": "А"},
            {"id": "s1", "type": "form", "title": "Б"},
        ])))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("s1"));
    }
}
