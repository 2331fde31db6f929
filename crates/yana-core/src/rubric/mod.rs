//! Diia Flow Scoring Rubric: criteria, weight table, scoring curves.
//!
//! Everything here is pure: no I/O, no side effects. The weight table is
//! validated once at startup; per-request code treats it as read-only.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::{Flow, RetrievalContext};

/// A flow passes iff its rounded weighted total reaches this value.
pub const PASS_THRESHOLD: f64 = 70.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    FlowLength,
    ComponentCompliance,
    Wcag,
    ScreenSaturation,
    ApiDependency,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::FlowLength,
        Criterion::ComponentCompliance,
        Criterion::Wcag,
        Criterion::ScreenSaturation,
        Criterion::ApiDependency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::FlowLength => "flow_length",
            Criterion::ComponentCompliance => "component_compliance",
            Criterion::Wcag => "wcag",
            Criterion::ScreenSaturation => "screen_saturation",
            Criterion::ApiDependency => "api_dependency",
        }
    }
}

/// Criterion weights. The five defaults are the canonical rubric table;
/// each is overridable via `SCORING_<NAME>_WEIGHT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricWeights {
    pub flow_length: f64,
    pub component_compliance: f64,
    pub wcag: f64,
    pub screen_saturation: f64,
    pub api_dependency: f64,
}

impl Default for RubricWeights {
    fn default() -> Self {
        Self {
            flow_length: 0.25,
            component_compliance: 0.30,
            wcag: 0.20,
            screen_saturation: 0.15,
            api_dependency: 0.10,
        }
    }
}

impl RubricWeights {
    /// Built-in table with per-criterion env overrides
    /// (`SCORING_FLOW_LENGTH_WEIGHT` etc.).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            flow_length: env_f64("SCORING_FLOW_LENGTH_WEIGHT", defaults.flow_length),
            component_compliance: env_f64(
                "SCORING_COMPONENT_COMPLIANCE_WEIGHT",
                defaults.component_compliance,
            ),
            wcag: env_f64("SCORING_WCAG_WEIGHT", defaults.wcag),
            screen_saturation: env_f64(
                "SCORING_SCREEN_SATURATION_WEIGHT",
                defaults.screen_saturation,
            ),
            api_dependency: env_f64("SCORING_API_DEPENDENCY_WEIGHT", defaults.api_dependency),
        }
    }

    pub fn weight_of(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::FlowLength => self.flow_length,
            Criterion::ComponentCompliance => self.component_compliance,
            Criterion::Wcag => self.wcag,
            Criterion::ScreenSaturation => self.screen_saturation,
            Criterion::ApiDependency => self.api_dependency,
        }
    }

    /// Startup-time check: every weight in [0, 1] and the table sums to 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for c in Criterion::ALL {
            let w = self.weight_of(c);
            if !(0.0..=1.0).contains(&w) {
                return Err(ConfigError(format!(
                    "rubric weight {} = {} is outside [0, 1]",
                    c.as_str(),
                    w
                )));
            }
        }
        let sum: f64 = Criterion::ALL.iter().map(|c| self.weight_of(*c)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError(format!(
                "rubric weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Score deductions the rubric prompt quotes to the LLM judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penalties {
    pub custom_component: u32,
    pub redundant_step: u32,
    pub manual_input: u32,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            custom_component: 15,
            redundant_step: 10,
            manual_input: 20,
        }
    }
}

impl Penalties {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            custom_component: env_u32("PENALTY_CUSTOM_COMPONENT", defaults.custom_component),
            redundant_step: env_u32("PENALTY_REDUNDANT_STEP", defaults.redundant_step),
            manual_input: env_u32("PENALTY_MANUAL_INPUT", defaults.manual_input),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Fewer steps, higher score. Optimal range is 3–5 steps; very short flows
/// are flagged as possibly missing validation; long flows decay linearly
/// with a floor of 50.
pub fn score_flow_length(num_steps: usize) -> f64 {
    match num_steps {
        3..=5 => 100.0,
        0..=2 => 80.0,
        6..=7 => 90.0,
        n => (100.0 - (n as f64 - 7.0) * 5.0).max(50.0),
    }
}

/// Compliance against the reference component set: -15 per component not
/// found in the catalog. Without reference data the rule path cannot tell
/// and returns a neutral 50 (misuse detection stays with the LLM judge).
pub fn score_component_compliance(flow: &Flow, ctx: Option<&RetrievalContext>) -> f64 {
    let Some(ctx) = ctx.filter(|c| !c.components.is_empty()) else {
        return 50.0;
    };
    let unknown = flow
        .steps
        .iter()
        .filter_map(|s| s.component.as_ref())
        .filter(|c| !ctx.contains_component(&c.name))
        .count();
    (100.0 - unknown as f64 * 15.0).clamp(0.0, 100.0)
}

/// Cognitive load: average form-field count per step. Up to 5 fields per
/// screen is fine; beyond that the score decays to a floor of 60.
pub fn score_screen_saturation(avg_fields_per_step: f64) -> f64 {
    if avg_fields_per_step <= 5.0 {
        90.0
    } else {
        (90.0 - (avg_fields_per_step - 5.0) * 5.0).max(60.0)
    }
}

/// Share of steps that auto-fill from a registry, rewarded up to 100.
/// A zero-step flow gets a neutral 50, never a division by zero.
pub fn score_api_dependency(api_steps: usize, total_steps: usize) -> f64 {
    if total_steps == 0 {
        return 50.0;
    }
    (api_steps as f64 * 150.0 / total_steps as f64).min(100.0)
}

/// Components referenced by a flow that the catalog does not know.
pub fn unknown_components(flow: &Flow, ctx: &RetrievalContext) -> Vec<String> {
    flow.steps
        .iter()
        .filter_map(|s| s.component.as_ref())
        .filter(|c| !ctx.contains_component(&c.name))
        .map(|c| c.name.clone())
        .collect()
}
