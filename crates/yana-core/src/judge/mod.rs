//! Judge orchestrator: the single entry point for scoring a flow.

mod fallback;
mod llm;

pub use fallback::RuleScorer;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::JudgeConfig;
use crate::errors::{ConfigError, JudgeError, JudgeUnavailable};
use crate::model::{Evaluation, Flow, RetrievalContext};
use crate::providers::llm::LlmClient;

/// Rates flows against the Diia Flow Scoring Rubric.
///
/// Constructed once at process start and shared by handlers; all state is
/// read-only after construction, so concurrent evaluations need no
/// locking. `evaluate` fails only on a malformed flow; judge outages are
/// absorbed by the rule-based fallback.
#[derive(Clone)]
pub struct JudgeService {
    config: JudgeConfig,
    client: Option<Arc<dyn LlmClient>>,
    scorer: RuleScorer,
}

impl JudgeService {
    /// Weight validation happens here: a bad rubric table is a startup
    /// error, never a per-request one.
    pub fn new(
        config: JudgeConfig,
        client: Option<Arc<dyn LlmClient>>,
    ) -> Result<Self, ConfigError> {
        config.weights.validate()?;
        let scorer = RuleScorer::new(config.weights.clone());
        Ok(Self {
            config,
            client,
            scorer,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = JudgeConfig::from_env()?;
        let client = config.build_client()?;
        Self::new(config, client)
    }

    pub fn model_name(&self) -> Option<&str> {
        self.client.as_deref().map(|c| c.model_name())
    }

    /// Evaluate a flow: one timed LLM attempt, then the rule-based scorer
    /// as a complete substitute on any failure. Always returns a full
    /// evaluation for a well-formed flow.
    pub async fn evaluate(
        &self,
        flow: &Flow,
        ctx: Option<&RetrievalContext>,
    ) -> Result<Evaluation, JudgeError> {
        flow.validate()?;

        if let Some(client) = &self.client {
            let attempt = tokio::time::timeout(
                self.config.timeout,
                llm::judge_flow(client.as_ref(), &self.config, flow, ctx),
            )
            .await;

            match attempt {
                Ok(Ok(mut eval)) => {
                    eval.flow_id = Some(flow.id.clone());
                    eval.judge_model = Some(client.model_name().to_string());
                    eval.derive_findings();
                    info!(
                        flow_id = %flow.id,
                        total = eval.total_weighted_score,
                        source = "llm",
                        "flow evaluation complete"
                    );
                    return Ok(eval);
                }
                Ok(Err(err)) => {
                    warn!(flow_id = %flow.id, error = %err, "LLM judge failed, using rule-based fallback");
                }
                Err(_) => {
                    let err = JudgeUnavailable::Timeout(self.config.timeout.as_secs());
                    warn!(flow_id = %flow.id, error = %err, "LLM judge timed out, using rule-based fallback");
                }
            }
        }

        let eval = self.scorer.score(flow, ctx);
        info!(
            flow_id = %flow.id,
            total = eval.total_weighted_score,
            source = "fallback",
            "flow evaluation complete"
        );
        Ok(eval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiCall, Assessment, EvaluationSource, FlowStep, RegistryKind};
    use crate::providers::llm::LlmResponse;
    use async_trait::async_trait;
    use std::time::Duration;

    struct MockLlmClient {
        responses: std::sync::Mutex<Vec<anyhow::Result<String>>>,
        delay: Option<Duration>,
    }

    impl MockLlmClient {
        fn returning(responses: Vec<anyhow::Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: std::sync::Mutex::new(responses),
                delay: None,
            })
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(
            &self,
            _prompt: &str,
            _system: Option<&str>,
        ) -> anyhow::Result<LlmResponse> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let mut resps = self.responses.lock().unwrap();
            if resps.is_empty() {
                anyhow::bail!("no more mock responses");
            }
            let text = resps.remove(0)?;
            Ok(LlmResponse {
                text,
                provider: "mock".to_string(),
                model: "mock".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    fn step(id: &str, api: bool) -> FlowStep {
        FlowStep {
            id: id.to_string(),
            step_type: "form".to_string(),
            title: String::new(),
            message: None,
            component: None,
            api_calls: if api {
                vec![ApiCall {
                    api_type: RegistryKind::Edr,
                    purpose: None,
                }]
            } else {
                vec![]
            },
            fields: vec![],
        }
    }

    fn sample_flow() -> Flow {
        Flow {
            id: "flow_001".into(),
            name: "Реєстрація ФОП".into(),
            description: None,
            steps: vec![step("s1", true), step("s2", true), step("s3", false)],
            required_apis: vec![RegistryKind::Edr, RegistryKind::Tax],
            metadata: None,
        }
    }

    fn good_verdict() -> String {
        serde_json::json!({
            "component_compliance_score": 95,
            "component_compliance_justification": "Всі компоненти з Diia D-DS",
            "component_issues": [],
            "flow_length_score": 100,
            "flow_length_justification": "3 кроки — оптимально",
            "redundant_steps": [],
            "wcag_score": 85,
            "wcag_justification": "Контраст та фокус в нормі",
            "screen_saturation_score": 90,
            "screen_saturation_justification": "Не більше 3 полів на екран",
            "api_dependency_score": 100,
            "api_dependency_justification": "Дані з ЄДР та податкової",
            "manual_input_violations": [],
            "total_weighted_score": 94.0,
            "overall_assessment": "PASSED",
            "recommendations": ["Розглянути попереднє заповнення КВЕД"]
        })
        .to_string()
    }

    fn service(client: Option<Arc<dyn LlmClient>>) -> JudgeService {
        JudgeService::new(JudgeConfig::default(), client).unwrap()
    }

    #[tokio::test]
    async fn llm_verdict_is_enhanced_and_stamped() {
        let client = MockLlmClient::returning(vec![Ok(good_verdict())]);
        let svc = service(Some(client));
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();

        assert_eq!(eval.source, EvaluationSource::Llm);
        assert_eq!(eval.flow_id.as_deref(), Some("flow_001"));
        assert_eq!(eval.judge_model.as_deref(), Some("mock"));
        // 95*0.30 + 100*0.25 + 85*0.20 + 90*0.15 + 100*0.10 = 94.0
        assert_eq!(eval.total_weighted_score, 94.0);
        assert_eq!(eval.overall_assessment, Assessment::Passed);
        assert_eq!(eval.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn adapter_failure_falls_back_to_rule_scorer() {
        let client =
            MockLlmClient::returning(vec![Err(anyhow::anyhow!("connection refused"))]);
        let svc = service(Some(client));
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();

        assert_eq!(eval.source, EvaluationSource::Fallback);
        // 2 of 3 steps use APIs: min(100, 2*150/3) = 100
        assert_eq!(eval.api_dependency_score, 100.0);
        assert_eq!(eval.flow_length_score, 100.0);
    }

    #[tokio::test]
    async fn malformed_judge_output_falls_back() {
        let client = MockLlmClient::returning(vec![Ok("Не можу оцінити".to_string())]);
        let svc = service(Some(client));
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();
        assert_eq!(eval.source, EvaluationSource::Fallback);
    }

    #[tokio::test]
    async fn slow_judge_times_out_into_fallback() {
        let client = Arc::new(MockLlmClient {
            responses: std::sync::Mutex::new(vec![Ok(good_verdict())]),
            delay: Some(Duration::from_millis(200)),
        });
        let config = JudgeConfig {
            timeout: Duration::from_millis(20),
            ..Default::default()
        };
        let svc = JudgeService::new(config, Some(client)).unwrap();
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();
        assert_eq!(eval.source, EvaluationSource::Fallback);
    }

    #[tokio::test]
    async fn partial_verdict_is_filled_with_neutral_defaults() {
        let client = MockLlmClient::returning(vec![Ok(
            r#"{"flow_length_score": 100, "flow_length_justification": "ок"}"#.to_string(),
        )]);
        let svc = service(Some(client));
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();
        assert_eq!(eval.source, EvaluationSource::Llm);
        assert_eq!(eval.component_compliance_score, 50.0);
        assert_eq!(eval.api_dependency_score, 50.0);
        assert_eq!(eval.total_weighted_score, 62.5);
    }

    #[tokio::test]
    async fn no_client_goes_straight_to_rule_scorer() {
        let svc = service(None);
        let eval = svc.evaluate(&sample_flow(), None).await.unwrap();
        assert_eq!(eval.source, EvaluationSource::Fallback);
        assert!(eval.judge_model.is_none());
    }

    #[tokio::test]
    async fn malformed_flow_is_rejected_before_scoring() {
        let client = MockLlmClient::returning(vec![Ok(good_verdict())]);
        let svc = service(Some(client));
        let mut flow = sample_flow();
        flow.steps.push(step("s1", false));
        let err = svc.evaluate(&flow, None).await.unwrap_err();
        assert!(matches!(err, JudgeError::MalformedFlow(_)));
    }

    #[test]
    fn bad_weights_abort_construction() {
        let mut config = JudgeConfig::default();
        config.weights.flow_length = 0.9;
        assert!(JudgeService::new(config, None).is_err());
    }
}
