//! Реєстр транспортних засобів МВС.
//!
//! Unknown plates still answer with a synthesized record so demo flows
//! can be driven with any plate the presenter types in.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub brand: String,
    pub model: String,
    pub year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleOwner {
    pub inn: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    pub valid_until: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub license_plate: String,
    pub vin: String,
    pub vehicle: VehicleDetails,
    pub owner: VehicleOwner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_inspection: Option<Inspection>,
}

static RECORDS: Lazy<Vec<VehicleRecord>> = Lazy::new(|| {
    vec![VehicleRecord {
        license_plate: "AA1234BB".to_string(),
        vin: "WBADT43452G123456".to_string(),
        vehicle: VehicleDetails {
            brand: "BMW".to_string(),
            model: "X5".to_string(),
            year: 2019,
            color: Some("Чорний".to_string()),
        },
        owner: VehicleOwner {
            inn: "1234567890".to_string(),
            name: "Шевченко Тарас Григорович".to_string(),
        },
        technical_inspection: Some(Inspection {
            valid_until: "2025-05-09".to_string(),
        }),
    }]
});

/// Never fails: unknown plates produce a placeholder record.
pub fn lookup(plate: &str) -> VehicleRecord {
    tracing::debug!(plate, "vehicle lookup");
    if let Some(rec) = RECORDS.iter().find(|r| r.license_plate == plate) {
        return rec.clone();
    }
    VehicleRecord {
        license_plate: plate.to_string(),
        vin: format!("MOCK{}", plate.replace(' ', "")),
        vehicle: VehicleDetails {
            brand: "Mock Brand".to_string(),
            model: "Mock Model".to_string(),
            year: 2020,
            color: None,
        },
        owner: VehicleOwner {
            inn: "0000000000".to_string(),
            name: "Mock Owner".to_string(),
        },
        technical_inspection: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_plate_returns_the_fixture() {
        let rec = lookup("AA1234BB");
        assert_eq!(rec.vehicle.brand, "BMW");
        assert_eq!(rec.owner.inn, "1234567890");
    }

    #[test]
    fn unknown_plate_synthesizes_a_record() {
        let rec = lookup("KA 7777 IX");
        assert_eq!(rec.vin, "MOCKKA7777IX");
        assert_eq!(rec.owner.name, "Mock Owner");
        assert!(rec.technical_inspection.is_none());
    }
}
