use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::errors::AppError;
use crate::validation::{Entity, Record};

pub mod events;
pub mod notifications;
pub mod users;
pub mod validate;
pub mod volunteers;

pub fn create_router() -> Router {
    tracing::debug!("Creating application router");
    Router::new()
        .route("/health", get(health))
        .merge(validate::router())
        .merge(users::router())
        .merge(volunteers::router())
        .merge(events::router())
        .merge(notifications::router())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Runs the entity's validator and refuses the write when it reports errors.
pub(crate) fn ensure_valid(entity: Entity, record: &Record) -> Result<(), AppError> {
    let errors = entity.validate(record);
    if errors.is_empty() {
        return Ok(());
    }

    tracing::debug!(%entity, errors = ?errors, "Record failed validation");
    Err(AppError::Validation(errors))
}
