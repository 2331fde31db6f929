use serde::{Deserialize, Serialize};

/// An approved Diia Design System component, as retrieved for the judge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub component_name: String,
    pub usage_context: String,
}

/// Fields a mock registry can supply, so the judge can flag manual entry
/// of data that is available automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSpec {
    pub api_name_ua: String,
    pub available_fields: Vec<String>,
}

/// Read-only reference data supplied by the retrieval collaborator.
/// The judge consumes it during compliance scoring and never owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalContext {
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
    #[serde(default)]
    pub api_mocks: Vec<ApiSpec>,
}

impl RetrievalContext {
    pub fn contains_component(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.component_name == name)
    }
}
