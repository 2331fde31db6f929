use serde::Deserialize;
use tracing::warn;

use crate::errors::JudgeUnavailable;
use crate::model::{CriterionScore, Evaluation, EvaluationSource};
use crate::rubric::{Criterion, RubricWeights};

/// Dict-shaped verdict as the model returns it. Every field is optional;
/// schema drift from the external model must never panic the adapter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawVerdict {
    pub component_compliance_score: Option<f64>,
    pub component_compliance_justification: Option<String>,
    pub component_issues: Option<Vec<String>>,
    pub flow_length_score: Option<f64>,
    pub flow_length_justification: Option<String>,
    pub redundant_steps: Option<Vec<String>>,
    pub wcag_score: Option<f64>,
    pub wcag_justification: Option<String>,
    pub screen_saturation_score: Option<f64>,
    pub screen_saturation_justification: Option<String>,
    pub api_dependency_score: Option<f64>,
    pub api_dependency_justification: Option<String>,
    pub manual_input_violations: Option<Vec<String>>,
    pub total_weighted_score: Option<f64>,
    pub recommendations: Option<Vec<String>>,
}

/// Extract the first JSON object from judge output that may be wrapped in
/// prose or markdown fences.
pub(crate) fn extract_verdict(text: &str) -> Result<RawVerdict, JudgeUnavailable> {
    let start = text
        .find('{')
        .ok_or_else(|| JudgeUnavailable::Malformed("no JSON object in judge output".into()))?;
    let value: serde_json::Value = serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<serde_json::Value>()
        .next()
        .ok_or_else(|| JudgeUnavailable::Malformed("no JSON value in judge output".into()))?
        .map_err(|e| JudgeUnavailable::Malformed(format!("invalid JSON: {e}")))?;
    serde_json::from_value(value)
        .map_err(|e| JudgeUnavailable::Malformed(format!("unexpected verdict shape: {e}")))
}

/// Build a well-formed evaluation from a raw verdict.
///
/// Required criteria missing from the response are filled with a neutral
/// 50 and logged (recoverable, not fatal). The total is always recomputed
/// from the configured weights and the verdict from the fixed threshold;
/// the model cannot self-certify a pass.
pub(crate) fn into_evaluation(raw: RawVerdict, weights: &RubricWeights) -> Evaluation {
    let required = |criterion: Criterion, value: Option<f64>| -> f64 {
        match value {
            Some(v) => v.clamp(0.0, 100.0),
            None => {
                warn!(criterion = criterion.as_str(), "judge response missing score, defaulting to 50");
                50.0
            }
        }
    };
    // Optional under the three-criterion rubric variant; neutral when absent.
    let optional = |value: Option<f64>| value.map(|v| v.clamp(0.0, 100.0)).unwrap_or(50.0);

    let mut scores = vec![
        CriterionScore::new(
            Criterion::ComponentCompliance,
            required(Criterion::ComponentCompliance, raw.component_compliance_score),
            raw.component_compliance_justification.unwrap_or_default(),
        ),
        CriterionScore::new(
            Criterion::FlowLength,
            required(Criterion::FlowLength, raw.flow_length_score),
            raw.flow_length_justification.unwrap_or_default(),
        ),
        CriterionScore::new(
            Criterion::ApiDependency,
            required(Criterion::ApiDependency, raw.api_dependency_score),
            raw.api_dependency_justification.unwrap_or_default(),
        ),
        CriterionScore::new(
            Criterion::Wcag,
            optional(raw.wcag_score),
            raw.wcag_justification.unwrap_or_default(),
        ),
        CriterionScore::new(
            Criterion::ScreenSaturation,
            optional(raw.screen_saturation_score),
            raw.screen_saturation_justification.unwrap_or_default(),
        ),
    ];
    scores[0].issues = raw.component_issues.unwrap_or_default();
    scores[1].issues = raw.redundant_steps.unwrap_or_default();
    scores[2].issues = raw.manual_input_violations.unwrap_or_default();

    let mut eval = Evaluation::from_scores(weights, &scores, EvaluationSource::Llm);
    eval.recommendations = raw.recommendations.unwrap_or_default();

    if let Some(claimed) = raw.total_weighted_score {
        if (claimed - eval.total_weighted_score).abs() > 0.01 {
            warn!(
                claimed,
                recomputed = eval.total_weighted_score,
                "judge total disagrees with configured weights, using recomputed value"
            );
        }
    }
    eval
}
