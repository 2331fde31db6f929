//! Diia Design System component catalog.
//!
//! Five approved components with usage context and prop schemas. Search
//! is plain keyword matching over Ukrainian query stems; a semantic
//! vector backend can slot in behind the same signature later.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use yana_core::model::ComponentDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_name: String,
    pub display_name: String,
    pub category: String,
    pub usage_context: String,
    pub props_schema: serde_json::Value,
    pub example_code: String,
}

impl ComponentRecord {
    /// Projection handed to the judge as retrieval context.
    pub fn descriptor(&self) -> ComponentDescriptor {
        ComponentDescriptor {
            component_name: self.component_name.clone(),
            usage_context: self.usage_context.clone(),
        }
    }
}

/// Ukrainian query stems that select a component.
fn stems(name: &str) -> &'static [&'static str] {
    match name {
        "eligibility_banner" => &["перевірк", "право"],
        "error_modal" => &["помилк"],
        "form_step" => &["форм", "крок"],
        "recipient_card_single" => &["картк", "отримувач"],
        "unavailable_banner" => &["недоступн"],
        _ => &[],
    }
}

static CATALOG: Lazy<Vec<ComponentRecord>> = Lazy::new(|| {
    vec![
        ComponentRecord {
            component_name: "eligibility_banner".to_string(),
            display_name: "Банер Перевірки Права".to_string(),
            category: "banner".to_string(),
            usage_context:
                "Показати результат автоматичної перевірки права на послугу через API".to_string(),
            props_schema: json!({
                "eligible": "boolean",
                "title": "string",
                "message": "string",
                "actionLabel": "string"
            }),
            example_code: "<EligibilityBanner eligible={true} title='Ви маєте право' />"
                .to_string(),
        },
        ComponentRecord {
            component_name: "error_modal".to_string(),
            display_name: "Модальне Вікно Помилки".to_string(),
            category: "modal".to_string(),
            usage_context: "Показати критичну помилку або блокуючу ситуацію".to_string(),
            props_schema: json!({
                "title": "string (required)",
                "description": "string",
                "primaryAction": "object",
                "secondaryAction": "object"
            }),
            example_code: "<ErrorModal title='Помилка' description='Сервіс недоступний' />"
                .to_string(),
        },
        ComponentRecord {
            component_name: "form_step".to_string(),
            display_name: "Крок Форми".to_string(),
            category: "form".to_string(),
            usage_context: "Багатокроковий флоу з формами, валідацією, навігацією".to_string(),
            props_schema: json!({
                "stepNumber": "number",
                "totalSteps": "number",
                "fields": "array",
                "onNext": "function",
                "onBack": "function"
            }),
            example_code: "<FormStep stepNumber={1} totalSteps={4} fields={[...]} />".to_string(),
        },
        ComponentRecord {
            component_name: "recipient_card_single".to_string(),
            display_name: "Картка Отримувача".to_string(),
            category: "card".to_string(),
            usage_context: "Відобразити дані отримувача, завантажені через API (ПІБ, РНОКПП)"
                .to_string(),
            props_schema: json!({
                "fullName": "string",
                "inn": "string",
                "address": "string",
                "editable": "boolean (default: false)"
            }),
            example_code: "<RecipientCardSingle fullName='Шевченко Т.Г.' inn='1234567890' />"
                .to_string(),
        },
        ComponentRecord {
            component_name: "unavailable_banner".to_string(),
            display_name: "Банер Недоступності".to_string(),
            category: "banner".to_string(),
            usage_context: "Послуга тимчасово недоступна через технічні причини".to_string(),
            props_schema: json!({
                "title": "string",
                "reason": "string",
                "estimatedRestore": "string"
            }),
            example_code: "<UnavailableBanner title='Послуга недоступна' reason='Технічні роботи' />"
                .to_string(),
        },
    ]
});

pub fn catalog() -> &'static [ComponentRecord] {
    &CATALOG
}

pub fn is_known(name: &str) -> bool {
    CATALOG.iter().any(|c| c.component_name == name)
}

/// Keyword search over the catalog. An empty match set falls back to
/// `form_step`, the safest general-purpose component.
pub fn search(query: &str, limit: usize) -> Vec<&'static ComponentRecord> {
    tracing::debug!(query, limit, "component search");
    let query_lower = query.to_lowercase();

    let mut results: Vec<&ComponentRecord> = CATALOG
        .iter()
        .filter(|c| {
            stems(&c.component_name)
                .iter()
                .any(|stem| query_lower.contains(stem))
        })
        .collect();

    if results.is_empty() {
        results = CATALOG
            .iter()
            .filter(|c| c.component_name == "form_step")
            .collect();
    }
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_query_finds_the_error_modal() {
        let results = search("показати помилку користувачу", 1);
        assert_eq!(results[0].component_name, "error_modal");
    }

    #[test]
    fn eligibility_query_finds_the_banner() {
        let results = search("перевірка права на субсидію", 1);
        assert_eq!(results[0].component_name, "eligibility_banner");
    }

    #[test]
    fn unmatched_query_falls_back_to_form_step() {
        let results = search("щось зовсім інше", 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].component_name, "form_step");
    }

    #[test]
    fn limit_caps_the_result_count() {
        let results = search("форма перевірки права", 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn zero_limit_returns_no_records() {
        assert!(search("форма", 0).is_empty());
    }

    #[test]
    fn catalog_names_are_unique_and_known() {
        let names: std::collections::HashSet<_> =
            catalog().iter().map(|c| c.component_name.as_str()).collect();
        assert_eq!(names.len(), catalog().len());
        assert!(is_known("unavailable_banner"));
        assert!(!is_known("custom_widget"));
    }
}
