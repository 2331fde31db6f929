//! Mock Ukrainian government registries for prototype flows.
//!
//! Fixtures stand in for the real state APIs (ЄДР, Податкова, МВС,
//! Держгеокадастр, Дія.Документи) so generated flows can be exercised
//! end to end without any external dependency. Lookups answer in
//! deterministic time and every record is stable across a demo run.
//!
//! The crate also carries the Diia Design System component catalog the
//! judge scores compliance against, plus a [`retrieval_context`] builder
//! that packages both for an evaluation call.

pub mod components;
pub mod documents;
pub mod edr;
pub mod land;
pub mod subsidy;
pub mod tax;
pub mod vehicle;

use yana_core::model::{ApiSpec, RetrievalContext};

/// Registry lookup failure. Variants map one-to-one onto the HTTP
/// statuses the mock routes answer with.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No record under the given key. Carries a user-facing Ukrainian
    /// detail line.
    #[error("{0}")]
    NotFound(String),
    /// The request itself is unserviceable, e.g. an unsupported
    /// document type.
    #[error("{0}")]
    Unsupported(String),
}

/// Reference data for one judge call: the full component catalog plus
/// the fields each mock registry can supply automatically.
pub fn retrieval_context() -> RetrievalContext {
    RetrievalContext {
        components: components::catalog()
            .iter()
            .map(|c| c.descriptor())
            .collect(),
        api_mocks: vec![
            ApiSpec {
                api_name_ua: "ЄДР (Єдиний державний реєстр)".to_string(),
                available_fields: fields(&[
                    "edrpou",
                    "name",
                    "type",
                    "status",
                    "registration_date",
                    "kved",
                    "address",
                ]),
            },
            ApiSpec {
                api_name_ua: "Податкова служба".to_string(),
                available_fields: fields(&[
                    "inn",
                    "taxpayer_type",
                    "tax_status",
                    "debts",
                    "last_declaration",
                    "privileges",
                ]),
            },
            ApiSpec {
                api_name_ua: "Реєстр транспортних засобів".to_string(),
                available_fields: fields(&[
                    "license_plate",
                    "vin",
                    "vehicle",
                    "owner",
                    "technical_inspection",
                ]),
            },
            ApiSpec {
                api_name_ua: "Державний земельний кадастр".to_string(),
                available_fields: fields(&[
                    "cadastral_number",
                    "area",
                    "location",
                    "purpose",
                    "ownership",
                    "valuation",
                ]),
            },
            ApiSpec {
                api_name_ua: "Дія.Документи".to_string(),
                available_fields: fields(&["document_type", "data"]),
            },
        ],
    }
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
