//! Податкова служба — платники, борги, декларації, спрощена система.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::RegistryError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debts {
    pub has_debt: bool,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub period: String,
    pub submitted_at: String,
    pub tax_paid: f64,
}

/// Simplified-taxation status (єдиний податок).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Privileges {
    pub simplified_tax: bool,
    pub group: u8,
    /// Rate in percent.
    pub rate: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRecord {
    pub inn: String,
    pub taxpayer_type: String,
    pub registration_date: String,
    pub tax_status: String,
    pub debts: Debts,
    pub last_declaration: Declaration,
    pub privileges: Privileges,
}

static RECORDS: Lazy<Vec<TaxRecord>> = Lazy::new(|| {
    vec![TaxRecord {
        inn: "1234567890".to_string(),
        taxpayer_type: "fop".to_string(),
        registration_date: "2020-01-15".to_string(),
        tax_status: "active".to_string(),
        debts: Debts {
            has_debt: false,
            total_amount: 0.0,
        },
        last_declaration: Declaration {
            period: "2024-Q3".to_string(),
            submitted_at: "2024-10-15".to_string(),
            tax_paid: 15_000.0,
        },
        privileges: Privileges {
            simplified_tax: true,
            group: 2,
            rate: 5,
        },
    }]
});

pub fn lookup(inn: &str) -> Result<&'static TaxRecord, RegistryError> {
    tracing::debug!(inn, "tax lookup");
    RECORDS
        .iter()
        .find(|r| r.inn == inn)
        .ok_or_else(|| RegistryError::NotFound("РНОКПП не знайдено".to_string()))
}
