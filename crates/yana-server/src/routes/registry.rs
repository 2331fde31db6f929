//! Mock registry routes. Thin JSON shims over `yana-registry` lookups.

use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use yana_registry::subsidy::{SubsidyDecision, SubsidyRequest};
use yana_registry::{documents, edr, land, subsidy, tax, vehicle};

use crate::error::ApiError;

pub async fn edr(Path(edrpou): Path<String>) -> Result<Json<edr::EdrRecord>, ApiError> {
    Ok(Json(edr::lookup(&edrpou)?.clone()))
}

pub async fn tax(Path(inn): Path<String>) -> Result<Json<tax::TaxRecord>, ApiError> {
    Ok(Json(tax::lookup(&inn)?.clone()))
}

pub async fn vehicle(Path(plate): Path<String>) -> Json<vehicle::VehicleRecord> {
    Json(vehicle::lookup(&plate))
}

pub async fn land(Path(cadastral_number): Path<String>) -> Json<land::LandRecord> {
    Json(land::lookup(&cadastral_number))
}

#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
    pub inn: String,
}

pub async fn diia_document(
    Path(doc_type): Path<String>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<documents::DocumentRecord>, ApiError> {
    Ok(Json(documents::lookup(&doc_type, &query.inn)?.clone()))
}

pub async fn subsidy_check(Json(request): Json<SubsidyRequest>) -> Json<SubsidyDecision> {
    Json(subsidy::check(&request))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::app;
    use crate::routes::test_support;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = app(test_support::state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn edr_fixture_resolves() {
        let (status, body) = get("/api/mock/edr/12345678").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "ФОП Іваненко Іван Петрович");
        assert_eq!(body["type"], "fop");
    }

    #[tokio::test]
    async fn edr_miss_is_404_with_ukrainian_detail() {
        let (status, body) = get("/api/mock/edr/00000001").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "ЄДРПОУ не знайдено в реєстрі");
    }

    #[tokio::test]
    async fn error_body_carries_the_request_path() {
        let (status, body) = get("/api/mock/tax/9999999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/api/mock/tax/9999999999");
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn unknown_vehicle_still_answers_200() {
        let (status, body) = get("/api/mock/vehicle/XX0000XX").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vin"], "MOCKXX0000XX");
    }

    #[tokio::test]
    async fn unsupported_document_type_is_400() {
        let (status, _) = get("/api/mock/diia/documents/driver_license?inn=1234567890").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn subsidy_check_computes_the_amount() {
        let app = app(test_support::state());
        let body = serde_json::json!({
            "inn": "1234567890",
            "full_name": "Шевченко Тарас Григорович",
            "family_size": 3,
            "total_monthly_income": 10000.0,
            "utilities_cost": 3000.0,
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/mock/subsidies/check")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["eligible"], true);
        assert_eq!(body["subsidy_amount"], 525.0);
    }
}
