//! Перевірка права на житлову субсидію.
//!
//! The rule is deliberately simple: a household qualifies when its
//! utility bill exceeds 15% of monthly income, and the subsidy covers
//! 35% of the excess.

use serde::{Deserialize, Serialize};

const INCOME_SHARE: f64 = 0.15;
const COVERAGE_PERCENTAGE: u8 = 35;
const INCOME_THRESHOLD: u32 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct SubsidyRequest {
    pub inn: String,
    pub full_name: String,
    pub family_size: u32,
    pub total_monthly_income: f64,
    pub utilities_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub total_utilities: f64,
    pub income_threshold: u32,
    pub formula: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStep {
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deeplink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_docs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsidyDecision {
    pub eligible: bool,
    pub subsidy_amount: f64,
    pub coverage_percentage: u8,
    pub calculation: Calculation,
    pub next_steps: Vec<NextStep>,
}

pub fn check(request: &SubsidyRequest) -> SubsidyDecision {
    tracing::debug!(inn = %request.inn, "subsidy check");

    let threshold = request.total_monthly_income * INCOME_SHARE;
    let eligible = request.utilities_cost > threshold;
    let subsidy_amount = if eligible {
        let raw = (request.utilities_cost - threshold) * f64::from(COVERAGE_PERCENTAGE) / 100.0;
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    };

    SubsidyDecision {
        eligible,
        subsidy_amount,
        coverage_percentage: COVERAGE_PERCENTAGE,
        calculation: Calculation {
            total_utilities: request.utilities_cost,
            income_threshold: INCOME_THRESHOLD,
            formula: format!(
                "({} - {} * 0.15) * 0.{}",
                request.utilities_cost, request.total_monthly_income, COVERAGE_PERCENTAGE
            ),
        },
        next_steps: vec![
            NextStep {
                step: "submit_application".to_string(),
                deeplink: Some("/services/subsidies/apply".to_string()),
                required_docs: None,
            },
            NextStep {
                step: "upload_documents".to_string(),
                deeplink: None,
                required_docs: Some(vec![
                    "utility_bills".to_string(),
                    "income_statement".to_string(),
                ]),
            },
        ],
    }
}
