use crate::model::{
    CriterionScore, Evaluation, EvaluationSource, Flow, RetrievalContext,
};
use crate::rubric::{self, Criterion, RubricWeights};

/// Deterministic scorer over the flow's own structure. Guaranteed
/// available: no network, no model, and it never fails for a structurally
/// valid flow. Empty flows score with neutral defaults.
#[derive(Debug, Clone)]
pub struct RuleScorer {
    weights: RubricWeights,
}

impl RuleScorer {
    pub fn new(weights: RubricWeights) -> Self {
        Self { weights }
    }

    /// Produce a complete evaluation. Deterministic: the same flow always
    /// yields the same scores.
    pub fn score(&self, flow: &Flow, ctx: Option<&RetrievalContext>) -> Evaluation {
        let num_steps = flow.steps.len();
        let api_steps = flow.api_step_count();
        let avg_fields = flow.avg_fields_per_step();

        let mut scores = vec![
            CriterionScore::new(
                Criterion::FlowLength,
                rubric::score_flow_length(num_steps),
                format!("Флоу містить {num_steps} кроків"),
            ),
            CriterionScore::new(
                Criterion::ScreenSaturation,
                rubric::score_screen_saturation(avg_fields),
                format!("У середньому {avg_fields:.1} полів на крок"),
            ),
            CriterionScore::new(
                Criterion::ApiDependency,
                rubric::score_api_dependency(api_steps, num_steps),
                format!("{api_steps} з {num_steps} кроків використовують державні API"),
            ),
            // Accessibility review needs the LLM judge; the rule path makes
            // no claim and returns the neutral placeholder.
            CriterionScore::new(
                Criterion::Wcag,
                50.0,
                "WCAG не оцінюється правилами (потрібен LLM-Judge)".to_string(),
            ),
        ];

        let mut compliance = CriterionScore::new(
            Criterion::ComponentCompliance,
            rubric::score_component_compliance(flow, ctx),
            match ctx.filter(|c| !c.components.is_empty()) {
                Some(_) => "Перевірено за каталогом Diia Design System".to_string(),
                None => "Немає довідкових даних каталогу — нейтральна оцінка".to_string(),
            },
        );
        if let Some(ctx) = ctx {
            compliance.issues = rubric::unknown_components(flow, ctx);
        }
        scores.push(compliance);

        let mut eval = Evaluation::from_scores(&self.weights, &scores, EvaluationSource::Fallback);
        eval.flow_id = Some(flow.id.clone());
        eval.derive_findings();
        eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiCall, Assessment, FlowStep, IssueCode, RegistryKind};

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

    fn flow(steps: Vec<FlowStep>) -> Flow {
        Flow {
            id: "flow_001".into(),
            name: "Реєстрація ФОП".into(),
            description: None,
            steps,
            required_apis: vec![],
            metadata: None,
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = RuleScorer::new(RubricWeights::default());
        let flow = flow(vec![step("s1", false), step("s2", true), step("s3", false)]);
        let a = scorer.score(&flow, None);
        let b = scorer.score(&flow, None);
        assert_eq!(a.total_weighted_score, b.total_weighted_score);
        assert_eq!(a.overall_assessment, b.overall_assessment);
        assert_eq!(a.api_dependency_score, b.api_dependency_score);
    }

    #[test]
    fn one_api_step_of_three_scores_fifty() {
        let scorer = RuleScorer::new(RubricWeights::default());
        let flow = flow(vec![step("s1", false), step("s2", true), step("s3", false)]);
        let eval = scorer.score(&flow, None);
        assert_eq!(eval.api_dependency_score, 50.0);
        assert_eq!(eval.flow_length_score, 100.0);
    }

    #[test]
    fn empty_flow_scores_with_neutral_defaults() {
        let scorer = RuleScorer::new(RubricWeights::default());
        let eval = scorer.score(&flow(vec![]), None);
        assert_eq!(eval.api_dependency_score, 50.0);
        assert_eq!(eval.flow_length_score, 80.0);
        assert_eq!(eval.wcag_score, 50.0);
        assert_eq!(eval.source, EvaluationSource::Fallback);
    }

    #[test]
    fn low_api_usage_emits_warning_and_suggestion() {
        let scorer = RuleScorer::new(RubricWeights::default());
        let eval = scorer.score(&flow(vec![step("s1", false), step("s2", false)]), None);
        assert_eq!(eval.api_dependency_score, 0.0);
        assert!(eval
            .issues
            .iter()
            .any(|i| i.code == IssueCode::InsufficientApiUsage));
        assert!(!eval.recommendations.is_empty());
    }

    #[test]
    fn catalog_misses_become_structured_issues() {
        use crate::model::{ComponentDescriptor, ComponentRef};

        let ctx = RetrievalContext {
            components: vec![ComponentDescriptor {
                component_name: "form_step".into(),
                usage_context: String::new(),
            }],
            api_mocks: vec![],
        };
        let mut steps = vec![step("s1", true), step("s2", true), step("s3", false)];
        steps[2].component = Some(ComponentRef {
            name: "custom_widget".into(),
            props: Default::default(),
        });
        let scorer = RuleScorer::new(RubricWeights::default());
        let eval = scorer.score(&flow(steps), Some(&ctx));

        assert_eq!(eval.component_compliance_score, 85.0);
        assert_eq!(eval.component_issues, vec!["custom_widget".to_string()]);
        let issue = eval
            .issues
            .iter()
            .find(|i| i.code == IssueCode::UnknownComponent)
            .unwrap();
        assert!(issue.message_ua.contains("custom_widget"));
    }

    #[test]
    fn nine_step_flow_scores_ninety_on_length() {
        let scorer = RuleScorer::new(RubricWeights::default());
        let steps = (1..=9).map(|i| step(&format!("s{i}"), true)).collect();
        let eval = scorer.score(&flow(steps), None);
        assert_eq!(eval.flow_length_score, 90.0);
        assert_eq!(eval.overall_assessment, Assessment::Passed);
    }
}
