//! ЄДР — Єдиний державний реєстр юридичних осіб та ФОП.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Фізична особа-підприємець.
    Fop,
    /// Товариство з обмеженою відповідальністю.
    Tov,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kved {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub region: String,
    pub city: String,
    pub street: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdrRecord {
    pub edrpou: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_kind: EntityKind,
    pub status: String,
    pub registration_date: String,
    pub kved: Vec<Kved>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_capital: Option<u64>,
}

static RECORDS: Lazy<Vec<EdrRecord>> = Lazy::new(|| {
    vec![
        EdrRecord {
            edrpou: "12345678".to_string(),
            name: "ФОП Іваненко Іван Петрович".to_string(),
            entity_kind: EntityKind::Fop,
            status: "active".to_string(),
            registration_date: "2020-01-15".to_string(),
            kved: vec![Kved {
                code: "62.01".to_string(),
                description: "Комп'ютерне програмування".to_string(),
            }],
            address: Some(Address {
                region: "Київська область".to_string(),
                city: "Київ".to_string(),
                street: "вул. Хрещатик, 1".to_string(),
            }),
            authorized_capital: None,
        },
        EdrRecord {
            edrpou: "87654321".to_string(),
            name: "ТОВ 'Діджитал Солюшнс'".to_string(),
            entity_kind: EntityKind::Tov,
            status: "active".to_string(),
            registration_date: "2018-03-20".to_string(),
            kved: vec![Kved {
                code: "62.01".to_string(),
                description: "Комп'ютерне програмування".to_string(),
            }],
            address: None,
            authorized_capital: Some(500_000),
        },
    ]
});

pub fn lookup(edrpou: &str) -> Result<&'static EdrRecord, RegistryError> {
    tracing::debug!(edrpou, "EDR lookup");
    RECORDS
        .iter()
        .find(|r| r.edrpou == edrpou)
        .ok_or_else(|| RegistryError::NotFound("ЄДРПОУ не знайдено в реєстрі".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fop_resolves_with_kved_and_address() {
        let rec = lookup("12345678").unwrap();
        assert_eq!(rec.entity_kind, EntityKind::Fop);
        assert_eq!(rec.kved[0].code, "62.01");
        assert!(rec.address.is_some());
        assert!(rec.authorized_capital.is_none());
    }

    #[test]
    fn tov_carries_authorized_capital() {
        let rec = lookup("87654321").unwrap();
        assert_eq!(rec.entity_kind, EntityKind::Tov);
        assert_eq!(rec.authorized_capital, Some(500_000));
    }

    #[test]
    fn unknown_edrpou_is_not_found() {
        let err = lookup("00000000").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn entity_kind_serializes_under_the_type_key() {
        let json = serde_json::to_value(lookup("12345678").unwrap()).unwrap();
        assert_eq!(json["type"], "fop");
    }
}
