use std::sync::Arc;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::providers::llm::{LlmClient, OpenAiClient};
use crate::rubric::{Penalties, RubricWeights};

/// Judge runtime configuration, resolved once at process start.
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// "openai" or "none" (rule-based scoring only).
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Bound on the single LLM attempt; past it the fallback path triggers.
    pub timeout: Duration,
    pub weights: RubricWeights,
    pub penalties: Penalties,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            provider: "none".to_string(),
            model: "gpt-4-turbo".to_string(),
            api_key: None,
            temperature: 0.1,
            max_tokens: 1500,
            timeout: Duration::from_secs(30),
            weights: RubricWeights::default(),
            penalties: Penalties::default(),
        }
    }
}

impl JudgeConfig {
    /// Read configuration from the environment. Weight validation happens
    /// here: a bad rubric table aborts startup, never a request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_key = std::env::var("OPENAI_API_KEY_JUDGE").ok().filter(|k| !k.is_empty());
        let provider = match std::env::var("LLM_JUDGE_PROVIDER") {
            Ok(p) if !p.is_empty() => p,
            _ if api_key.is_some() => "openai".to_string(),
            _ => "none".to_string(),
        };
        let config = Self {
            provider,
            model: std::env::var("LLM_MODEL_JUDGE").unwrap_or(defaults.model),
            api_key,
            temperature: env_parse("JUDGE_TEMPERATURE", defaults.temperature),
            max_tokens: env_parse("JUDGE_MAX_TOKENS", defaults.max_tokens),
            timeout: Duration::from_secs(env_parse("JUDGE_TIMEOUT_SECS", 30u64)),
            weights: RubricWeights::from_env(),
            penalties: Penalties::from_env(),
        };
        config.weights.validate()?;
        Ok(config)
    }

    /// Build the provider client, or `None` when the judge runs in
    /// rule-based-only mode.
    pub fn build_client(&self) -> Result<Option<Arc<dyn LlmClient>>, ConfigError> {
        match self.provider.as_str() {
            "none" => Ok(None),
            "openai" => {
                let api_key = self.api_key.clone().ok_or_else(|| {
                    ConfigError("provider 'openai' requires OPENAI_API_KEY_JUDGE".into())
                })?;
                let client = OpenAiClient::new(
                    self.model.clone(),
                    api_key,
                    self.temperature,
                    self.max_tokens,
                    self.timeout,
                )
                .map_err(|e| ConfigError(format!("failed to build openai client: {e}")))?;
                Ok(Some(Arc::new(client)))
            }
            other => Err(ConfigError(format!("unknown judge provider '{other}'"))),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
