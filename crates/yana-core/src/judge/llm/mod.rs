//! LLM judge adapter: flow + context in, evaluation out.
//!
//! One attempt per call. Retries are the caller's retry policy, falling
//! back is the orchestrator's job; this module does neither.

mod parse;
mod prompt;

use crate::config::JudgeConfig;
use crate::errors::JudgeUnavailable;
use crate::model::{Evaluation, Flow, RetrievalContext};
use crate::providers::llm::LlmClient;

pub(crate) async fn judge_flow(
    client: &dyn LlmClient,
    config: &JudgeConfig,
    flow: &Flow,
    ctx: Option<&RetrievalContext>,
) -> Result<Evaluation, JudgeUnavailable> {
    let system = prompt::system_prompt(&config.weights, &config.penalties);
    let user = prompt::user_prompt(flow, ctx);

    let resp = client
        .complete(&user, Some(&system))
        .await
        .map_err(|e| JudgeUnavailable::Transport(e.to_string()))?;

    let raw = parse::extract_verdict(&resp.text)?;
    Ok(parse::into_evaluation(raw, &config.weights))
}
