//! Server settings, resolved once from the environment at startup.

use yana_core::validate::{MAX_PROMPT_LENGTH, MIN_PROMPT_LENGTH};

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    /// Comma-separated allowlist; "*" permits any origin.
    pub cors_origins: String,
    pub min_prompt_length: usize,
    pub max_prompt_length: usize,
    /// Base URL of the external flow generator. `None` selects the
    /// deterministic local template generator.
    pub generator_url: Option<String>,
    pub generator_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 8001,
            cors_origins: "http://localhost:3000,http://localhost:3001".to_string(),
            min_prompt_length: MIN_PROMPT_LENGTH,
            max_prompt_length: MAX_PROMPT_LENGTH,
            generator_url: None,
            generator_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse("PORT", defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or(defaults.cors_origins),
            min_prompt_length: env_parse("MIN_PROMPT_LENGTH", defaults.min_prompt_length),
            max_prompt_length: env_parse("MAX_PROMPT_LENGTH", defaults.max_prompt_length),
            generator_url: std::env::var("FLOW_GENERATOR_URL").ok().filter(|u| !u.is_empty()),
            generator_timeout_secs: env_parse("GENERATOR_TIMEOUT_SECS", 30),
        }
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
