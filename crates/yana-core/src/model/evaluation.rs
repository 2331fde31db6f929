use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rubric::{Criterion, RubricWeights, PASS_THRESHOLD};

/// Score for one rubric criterion, computed fresh per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    /// In [0, 100].
    pub score: f64,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl CriterionScore {
    pub fn new(criterion: Criterion, score: f64, justification: impl Into<String>) -> Self {
        Self {
            criterion,
            score: score.clamp(0.0, 100.0),
            justification: justification.into(),
            issues: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// Stable machine-readable issue identifiers; the Ukrainian prose stays
/// alongside for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    TooManySteps,
    InsufficientApiUsage,
    UnknownComponent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: IssueCode,
    pub message_ua: String,
    pub fix_suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
}

impl Assessment {
    /// Verdict for an already-rounded total: pass iff total >= 70.
    pub fn from_total(total: f64) -> Self {
        if total >= PASS_THRESHOLD {
            Assessment::Passed
        } else {
            Assessment::Failed
        }
    }
}

/// Which evaluator produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationSource {
    Llm,
    Fallback,
}

/// Aggregate judgement of one flow. Created once per `evaluate()` call and
/// immutable afterwards; not persisted by the core.
///
/// Field names are the wire contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub component_compliance_score: f64,
    pub component_compliance_justification: String,
    #[serde(default)]
    pub component_issues: Vec<String>,

    pub flow_length_score: f64,
    pub flow_length_justification: String,
    #[serde(default)]
    pub redundant_steps: Vec<String>,

    pub wcag_score: f64,
    pub wcag_justification: String,

    pub screen_saturation_score: f64,
    pub screen_saturation_justification: String,

    pub api_dependency_score: f64,
    pub api_dependency_justification: String,
    #[serde(default)]
    pub manual_input_violations: Vec<String>,

    /// Weighted sum over the configured criteria, rounded to 2 decimals.
    pub total_weighted_score: f64,
    pub overall_assessment: Assessment,

    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub recommendations: Vec<String>,

    pub source: EvaluationSource,
    pub judged_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl Evaluation {
    /// Assemble an evaluation from per-criterion scores. Missing criteria
    /// default to a neutral 50.
    pub(crate) fn from_scores(
        weights: &RubricWeights,
        scores: &[CriterionScore],
        source: EvaluationSource,
    ) -> Self {
        let pick = |c: Criterion| -> (f64, String, Vec<String>) {
            scores
                .iter()
                .find(|s| s.criterion == c)
                .map(|s| (s.score, s.justification.clone(), s.issues.clone()))
                .unwrap_or((50.0, String::new(), Vec::new()))
        };

        let (compliance, compliance_why, component_issues) = pick(Criterion::ComponentCompliance);
        let (length, length_why, redundant_steps) = pick(Criterion::FlowLength);
        let (wcag, wcag_why, _) = pick(Criterion::Wcag);
        let (saturation, saturation_why, _) = pick(Criterion::ScreenSaturation);
        let (api, api_why, manual_input_violations) = pick(Criterion::ApiDependency);

        let mut eval = Evaluation {
            component_compliance_score: compliance,
            component_compliance_justification: compliance_why,
            component_issues,
            flow_length_score: length,
            flow_length_justification: length_why,
            redundant_steps,
            wcag_score: wcag,
            wcag_justification: wcag_why,
            screen_saturation_score: saturation,
            screen_saturation_justification: saturation_why,
            api_dependency_score: api,
            api_dependency_justification: api_why,
            manual_input_violations,
            total_weighted_score: 0.0,
            overall_assessment: Assessment::Failed,
            issues: Vec::new(),
            recommendations: Vec::new(),
            source,
            judged_at: Utc::now(),
            judge_model: None,
            flow_id: None,
        };
        eval.recompute_total(weights);
        eval
    }

    pub fn score_of(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::FlowLength => self.flow_length_score,
            Criterion::ComponentCompliance => self.component_compliance_score,
            Criterion::Wcag => self.wcag_score,
            Criterion::ScreenSaturation => self.screen_saturation_score,
            Criterion::ApiDependency => self.api_dependency_score,
        }
    }

    /// Recompute the weighted total and the verdict from the configured
    /// weights. The verdict is never taken from an external response.
    pub fn recompute_total(&mut self, weights: &RubricWeights) {
        let total: f64 = Criterion::ALL
            .iter()
            .map(|c| weights.weight_of(*c) * self.score_of(*c))
            .sum();
        self.total_weighted_score = round2(total);
        self.overall_assessment = Assessment::from_total(self.total_weighted_score);
    }

    /// Derive structured issues and actionable suggestions from the final
    /// per-criterion scores. Idempotent per code: existing entries with the
    /// same code are not duplicated.
    pub fn derive_findings(&mut self) {
        if self.flow_length_score < 70.0 && !self.has_issue(IssueCode::TooManySteps) {
            self.issues.push(Issue {
                severity: Severity::Warning,
                code: IssueCode::TooManySteps,
                message_ua: "Занадто багато кроків у флоу".into(),
                fix_suggestion: "Об'єднати схожі кроки".into(),
            });
        }
        if self.api_dependency_score < 70.0 && !self.has_issue(IssueCode::InsufficientApiUsage) {
            self.issues.push(Issue {
                severity: Severity::Warning,
                code: IssueCode::InsufficientApiUsage,
                message_ua: "Недостатньо використання API для автозаповнення".into(),
                fix_suggestion: "Додати виклики до державних реєстрів".into(),
            });
        }
        if !self.component_issues.is_empty() && !self.has_issue(IssueCode::UnknownComponent) {
            self.issues.push(Issue {
                severity: Severity::Warning,
                code: IssueCode::UnknownComponent,
                message_ua: format!(
                    "Компоненти поза Diia Design System: {}",
                    self.component_issues.join(", ")
                ),
                fix_suggestion: "Замінити на затверджені компоненти Diia Design System".into(),
            });
        }

        let mut suggest = |text: &str| {
            if !self.recommendations.iter().any(|r| r == text) {
                self.recommendations.push(text.to_string());
            }
        };
        if self.api_dependency_score < 80.0 {
            suggest("Розглянути більше API інтеграцій для зменшення ручного введення");
        }
        if self.flow_length_score < 90.0 {
            suggest("Оптимізувати кількість кроків");
        }
    }

    fn has_issue(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}
