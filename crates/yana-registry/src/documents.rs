//! Дія.Документи — цифрові документи громадянина.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::RegistryError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassportData {
    pub series: String,
    pub number: String,
    pub issued_by: String,
    pub issued_date: String,
    pub valid_until: String,
    pub full_name: String,
    pub birth_date: String,
    pub gender: String,
    pub inn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub document_type: String,
    pub data: PassportData,
}

static PASSPORTS: Lazy<Vec<DocumentRecord>> = Lazy::new(|| {
    vec![DocumentRecord {
        document_type: "passport".to_string(),
        data: PassportData {
            series: "ЕН".to_string(),
            number: "123456".to_string(),
            issued_by: "Дніпровським РВ ГУ ДМС України".to_string(),
            issued_date: "2022-03-15".to_string(),
            valid_until: "2032-03-15".to_string(),
            full_name: "Шевченко Тарас Григорович".to_string(),
            birth_date: "1990-05-20".to_string(),
            gender: "Ч".to_string(),
            inn: "1234567890".to_string(),
        },
    }]
});

/// Fetch a citizen's document. Unsupported document types are a request
/// error, a missing record for a supported type is a lookup miss.
pub fn lookup(doc_type: &str, inn: &str) -> Result<&'static DocumentRecord, RegistryError> {
    tracing::debug!(doc_type, inn, "diia documents lookup");
    if doc_type != "passport" {
        return Err(RegistryError::Unsupported(format!(
            "Тип документу '{doc_type}' не підтримується"
        )));
    }
    PASSPORTS
        .iter()
        .find(|d| d.data.inn == inn)
        .ok_or_else(|| RegistryError::NotFound("Документ не знайдено".to_string()))
}
