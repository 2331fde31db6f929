//! Prompt sanitization and validation for the generate endpoint.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PROMPT_LENGTH: usize = 10;
pub const MAX_PROMPT_LENGTH: usize = 2000;

// Patterns that suggest injection attempts rather than service prompts.
static SUSPICIOUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)<script[^>]*>.*?</script>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)\b(union|select|insert|update|delete|drop|create|alter)\s+",
        r"--",
        r"(?s)/\*.*?\*/",
        r"(?i)exec\s*\(",
        r"(?i)eval\s*\(",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static pattern"));

/// Strip null bytes, HTML tags and excess whitespace.
pub fn sanitize_prompt(text: &str) -> String {
    let text = text.replace('\0', "");
    let text = HTML_TAG.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validate a user prompt against length bounds and injection patterns.
/// Returns the sanitized prompt, or a descriptive rejection message.
pub fn validate_prompt(
    prompt: &str,
    min_length: usize,
    max_length: usize,
) -> Result<String, String> {
    if prompt.trim().is_empty() {
        return Err("Prompt cannot be empty".to_string());
    }

    // Check the raw input: sanitization would strip the very markup that
    // marks an injection attempt.
    for pattern in SUSPICIOUS_PATTERNS.iter() {
        if pattern.is_match(prompt) {
            return Err("Prompt contains suspicious content".to_string());
        }
    }

    let sanitized = sanitize_prompt(prompt);

    if sanitized.chars().count() < min_length {
        return Err(format!(
            "Prompt too short (minimum {min_length} characters)"
        ));
    }
    if sanitized.chars().count() > max_length {
        return Err(format!("Prompt too long (maximum {max_length} characters)"));
    }

    Ok(sanitized)
}
