//! Flow generation seam.
//!
//! The generator is an external collaborator behind a trait: production
//! points `FLOW_GENERATOR_URL` at an agent service, while demos and
//! tests run the deterministic local template generator.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use yana_core::model::{Flow, FlowStep, FormField};
use yana_core::retry::RetryPolicy;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("генератор флоу не відповів за {0} с")]
    Timeout(u64),
    #[error("генератор флоу недоступний: {0}")]
    Upstream(String),
    #[error("генератор повернув некоректний флоу: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait FlowGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Flow, GeneratorError>;
}

/// Calls an external generator service over HTTP with retry on
/// transport failures.
pub struct HttpGenerator {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpGenerator {
    pub fn new(base_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url,
            timeout_secs,
            client,
            retry: RetryPolicy::default(),
        })
    }

    async fn attempt(&self, prompt: &str) -> Result<Flow, GeneratorError> {
        let response = self
            .client
            .post(format!("{}/generate", self.base_url.trim_end_matches('/')))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(self.timeout_secs)
                } else {
                    GeneratorError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Upstream(format!(
                "generator answered {status}"
            )));
        }
        response
            .json::<Flow>()
            .await
            .map_err(|e| GeneratorError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl FlowGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<Flow, GeneratorError> {
        self.retry
            .run(
                || self.attempt(prompt),
                |err| !matches!(err, GeneratorError::Malformed(_)),
            )
            .await
    }
}

/// Deterministic two-step template flow, enough to drive the judge and
/// the demo UI without any upstream service.
pub struct TemplateGenerator;

#[async_trait]
impl FlowGenerator for TemplateGenerator {
    async fn generate(&self, prompt: &str) -> Result<Flow, GeneratorError> {
        info!(prompt_len = prompt.len(), "generating template flow");
        Ok(Flow {
            id: format!("flow_{}", &uuid::Uuid::new_v4().simple().to_string()[..8]),
            name: "Реєстрація у Дія".to_string(),
            description: Some(prompt.chars().take(200).collect()),
            steps: vec![
                FlowStep {
                    id: "step_1".to_string(),
                    step_type: "form".to_string(),
                    title: "Введіть дані".to_string(),
                    message: None,
                    component: None,
                    api_calls: Vec::new(),
                    fields: vec![
                        FormField {
                            name: "name".to_string(),
                            field_type: "text".to_string(),
                            label: "Ім'я".to_string(),
                            required: true,
                            placeholder: None,
                        },
                        FormField {
                            name: "email".to_string(),
                            field_type: "email".to_string(),
                            label: "Email".to_string(),
                            required: true,
                            placeholder: None,
                        },
                    ],
                },
                FlowStep {
                    id: "step_2".to_string(),
                    step_type: "confirmation".to_string(),
                    title: "Підтвердження".to_string(),
                    message: Some("Перевірте введені дані".to_string()),
                    component: None,
                    api_calls: Vec::new(),
                    fields: Vec::new(),
                },
            ],
            required_apis: Vec::new(),
            metadata: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn template_flow_is_well_formed() {
        let flow = TemplateGenerator.generate("Хочу зареєструвати ФОП").await.unwrap();
        flow.validate().unwrap();
        assert_eq!(flow.steps.len(), 2);
        assert_eq!(flow.steps[0].step_type, "form");
        assert_eq!(flow.steps[1].step_type, "confirmation");
    }

    #[tokio::test]
    async fn template_flow_ids_are_unique_per_call() {
        let a = TemplateGenerator.generate("запит").await.unwrap();
        let b = TemplateGenerator.generate("запит").await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
