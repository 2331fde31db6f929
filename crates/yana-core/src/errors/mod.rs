use thiserror::Error;

/// Startup-time configuration failure. Never raised per request.
#[derive(Debug, Error)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);

/// Errors the caller of [`crate::judge::JudgeService::evaluate`] can see.
///
/// Everything else (judge outages, partial responses) is absorbed inside
/// the orchestrator and never propagates.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// The submitted flow is structurally invalid and was rejected before
    /// any scoring happened.
    #[error("malformed flow: {0}")]
    MalformedFlow(String),
}

/// Why a single LLM judge attempt did not produce a usable verdict.
///
/// Surfaced by the adapter to the orchestrator, which logs it and swaps in
/// the rule-based scorer. The adapter itself neither retries nor falls
/// back.
#[derive(Debug, Error)]
pub enum JudgeUnavailable {
    #[error("judge timed out after {0}s")]
    Timeout(u64),
    #[error("judge transport error: {0}")]
    Transport(String),
    #[error("judge returned malformed output: {0}")]
    Malformed(String),
}
