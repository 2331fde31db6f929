//! Generate-then-judge pipeline: one prompt in, a flow plus its
//! evaluation out.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use yana_core::model::Evaluation;
use yana_core::validate::validate_prompt;
use yana_core::Flow;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub flow: Flow,
    pub evaluation: Evaluation,
    pub request_id: String,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    info!(%request_id, prompt_len = request.prompt.len(), "generate request");

    let prompt = validate_prompt(
        &request.prompt,
        state.settings.min_prompt_length,
        state.settings.max_prompt_length,
    )
    .map_err(ApiError::bad_request)?;

    let flow = state.generator.generate(&prompt).await?;
    let ctx = yana_registry::retrieval_context();
    let evaluation = state.judge.evaluate(&flow, Some(&ctx)).await?;

    info!(
        %request_id,
        flow_id = %flow.id,
        total = evaluation.total_weighted_score,
        verdict = ?evaluation.overall_assessment,
        "flow generated and judged"
    );
    Ok(Json(GenerateResponse {
        flow,
        evaluation,
        request_id,
    }))
}
