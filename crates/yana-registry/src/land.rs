//! Державний земельний кадастр.
//!
//! Fully synthetic: any cadastral number yields the same parcel shape,
//! keyed by the number the caller asked about.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelLocation {
    pub region: String,
    pub district: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelOwner {
    pub inn: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ownership {
    #[serde(rename = "type")]
    pub ownership_type: String,
    pub owner: ParcelOwner,
    pub acquisition_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Valuation {
    pub normative_value: u64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandRecord {
    pub cadastral_number: String,
    pub area: f64,
    pub area_unit: String,
    pub location: ParcelLocation,
    pub purpose: String,
    pub ownership: Ownership,
    pub valuation: Valuation,
}

pub fn lookup(cadastral_number: &str) -> LandRecord {
    tracing::debug!(cadastral_number, "land cadastre lookup");
    LandRecord {
        cadastral_number: cadastral_number.to_string(),
        area: 0.25,
        area_unit: "га".to_string(),
        location: ParcelLocation {
            region: "Київська область".to_string(),
            district: "Бориспільський район".to_string(),
        },
        purpose: "Для індивідуального садівництва".to_string(),
        ownership: Ownership {
            ownership_type: "private".to_string(),
            owner: ParcelOwner {
                inn: "1234567890".to_string(),
                name: "Mock Owner".to_string(),
            },
            acquisition_date: "2018-06-12".to_string(),
        },
        valuation: Valuation {
            normative_value: 250_000,
            currency: "UAH".to_string(),
        },
    }
}
