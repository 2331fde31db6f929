use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::JudgeError;

/// Ukrainian government registry behind a mock endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// ЄДР — company / ФОП registry, keyed by ЄДРПОУ.
    Edr,
    /// Податкова — tax records, keyed by РНОКПП.
    Tax,
    /// Transport registry, keyed by license plate.
    Vehicle,
    /// Land cadastre, keyed by cadastral number.
    Land,
    /// Diia Documents (passport etc.), keyed by РНОКПП.
    DiiaDocs,
    /// Subsidy eligibility calculator.
    Subsidies,
}

impl RegistryKind {
    /// Ukrainian display name used in judge prompts.
    pub fn name_ua(&self) -> &'static str {
        match self {
            RegistryKind::Edr => "ЄДР (Єдиний Державний Реєстр)",
            RegistryKind::Tax => "Податкова служба",
            RegistryKind::Vehicle => "Реєстр транспортних засобів",
            RegistryKind::Land => "Державний земельний кадастр",
            RegistryKind::DiiaDocs => "Дія.Документи",
            RegistryKind::Subsidies => "Калькулятор субсидій",
        }
    }
}

/// One form field inside a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A call to an external registry made from a step, auto-filling data the
/// user would otherwise type in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCall {
    pub api_type: RegistryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Reference to a Diia Design System component with its props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRef {
    pub name: String,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// One step of a user flow. Sequence order is meaningful and preserved
/// exactly as submitted; the scorer never reorders steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStep {
    pub id: String,
    #[serde(rename = "type", default)]
    pub step_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_calls: Vec<ApiCall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FormField>,
}

/// The unit under evaluation. Owned by the caller; the judge reads it but
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<FlowStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_apis: Vec<RegistryKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Flow {
    /// Structural validation, run before any scoring.
    ///
    /// A zero-step flow is valid (it scores with neutral defaults); what is
    /// rejected here is a flow the rubric cannot meaningfully describe:
    /// missing identifier, blank step ids, duplicate step ids.
    pub fn validate(&self) -> Result<(), JudgeError> {
        if self.id.trim().is_empty() {
            return Err(JudgeError::MalformedFlow("flow id is empty".into()));
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            if step.id.trim().is_empty() {
                return Err(JudgeError::MalformedFlow(format!(
                    "step at position {} has an empty id",
                    seen.len()
                )));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(JudgeError::MalformedFlow(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
        }
        Ok(())
    }

    /// Steps that auto-fill at least one value from a registry.
    pub fn api_step_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.api_calls.is_empty()).count()
    }

    /// Mean form-field count per step; 0.0 for an empty flow.
    pub fn avg_fields_per_step(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let total: usize = self.steps.iter().map(|s| s.fields.len()).sum();
        total as f64 / self.steps.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str) -> FlowStep {
        FlowStep {
            id: id.to_string(),
            step_type: "form".to_string(),
            title: String::new(),
            message: None,
            component: None,
            api_calls: vec![],
            fields: vec![],
        }
    }

    #[test]
    fn validate_rejects_duplicate_step_ids() {
        let flow = Flow {
            id: "flow_001".into(),
            name: "Тест".into(),
            description: None,
            steps: vec![step("step_1"), step("step_1")],
            required_apis: vec![],
            metadata: None,
        };
        let err = flow.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate step id 'step_1'"));
    }

    #[test]
    fn validate_accepts_zero_steps() {
        let flow = Flow {
            id: "flow_001".into(),
            name: "Порожній".into(),
            description: None,
            steps: vec![],
            required_apis: vec![],
            metadata: Some(serde_json::json!({"version": "1.0"})),
        };
        assert!(flow.validate().is_ok());
    }

    #[test]
    fn registry_kind_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&RegistryKind::DiiaDocs).unwrap(),
            "\"diia_docs\""
        );
        let kind: RegistryKind = serde_json::from_str("\"edr\"").unwrap();
        assert_eq!(kind, RegistryKind::Edr);
    }

    #[test]
    fn avg_fields_handles_empty_flow() {
        let flow = Flow {
            id: "f".into(),
            name: "n".into(),
            description: None,
            steps: vec![],
            required_apis: vec![],
            metadata: None,
        };
        assert_eq!(flow.avg_fields_per_step(), 0.0);
        assert_eq!(flow.api_step_count(), 0);
    }
}
