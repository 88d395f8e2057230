use axum::{Json, Router, extract::Path, routing::post};
use serde::Serialize;

use crate::errors::AppError;
use crate::security::json::ValidatedJson;
use crate::validation::{Entity, Record};

pub fn router() -> Router {
    Router::new().route("/validate/:entity", post(validate_record))
}

/// Outcome of a dry-run validation. Registration reports field names in
/// `errors`; every other entity reports messages.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    entity: Entity,
    valid: bool,
    errors: Vec<String>,
}

#[tracing::instrument(name = "validate_record", skip(record))]
pub async fn validate_record(
    Path(entity): Path<String>,
    ValidatedJson(record): ValidatedJson<Record>,
) -> Result<Json<ValidationReport>, AppError> {
    let entity: Entity = entity.parse().map_err(|err| {
        tracing::debug!(error = %err, "Validation requested for unknown entity");
        AppError::NotFound
    })?;

    let errors = entity.validate(&record);
    tracing::debug!(%entity, error_count = errors.len(), "Record validated");

    Ok(Json(ValidationReport {
        entity,
        valid: errors.is_empty(),
        errors,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::routes::create_router;

    async fn post_json(uri: &str, content_type: &str, body: String) -> (StatusCode, Value) {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_invalid_animal_is_reported() {
        let record = json!({
            "name": "",
            "species": "Dog",
            "age": -5,
            "status": "invalid_status",
            "sex": "invalid_sex",
        });

        let (status, body) =
            post_json("/validate/animal", "application/json", record.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entity"], "animal");
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_valid_notification_passes() {
        let record = json!({"title": "Heads up", "message": "Vaccination clinic on Friday"});

        let (status, body) =
            post_json("/validate/notification", "application/json", record.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["errors"], json!([]));
    }

    #[tokio::test]
    async fn test_registration_reports_field_names() {
        let record = json!({"email": "dana@example.com"});

        let (_, body) = post_json(
            "/validate/user-registration",
            "application/json",
            record.to_string(),
        )
        .await;

        assert_eq!(
            body["errors"],
            json!(["name", "password", "address", "city", "state"])
        );
    }

    #[tokio::test]
    async fn test_unknown_entity_is_not_found() {
        let (status, _) = post_json("/validate/hamster", "application/json", "{}".into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_json_body_is_rejected() {
        let (status, _) = post_json("/validate/animal", "text/plain", "name=Rex".into()).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_non_object_body_is_bad_request() {
        let (status, body) = post_json("/validate/animal", "application/json", "[1, 2]".into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("invalid JSON payload"));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let body = json!({"note": "x".repeat(crate::security::json::MAX_BODY_SIZE_BYTES)});
        let (status, _) = post_json("/validate/animal", "application/json", body.to_string()).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
