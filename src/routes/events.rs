use axum::{Extension, Json, Router, http::StatusCode, routing::get};

use crate::db::PgPool;
use crate::errors::AppError;
use crate::logging::AuditEvent;
use crate::models::decode;
use crate::models::event::{self, Event, EventPayload, NewEvent};
use crate::security::json::ValidatedJson;
use crate::validation::{Entity, Record};

use super::ensure_valid;

pub fn router() -> Router {
    Router::new().route("/events", get(list_events).post(create_event))
}

#[tracing::instrument(name = "create_event", skip(pool, record))]
pub async fn create_event(
    Extension(pool): Extension<PgPool>,
    ValidatedJson(record): ValidatedJson<Record>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    ensure_valid(Entity::Event, &record)?;

    let payload: EventPayload = decode(record)?;
    let new_event = NewEvent::try_from(payload)?;
    let event = event::insert(&pool, &new_event).await?;

    crate::log_audit_event!(
        AuditEvent::RecordCreated,
        entity = "event",
        record_id = %event.id,
        urgency = %event.urgency,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn list_events(Extension(pool): Extension<PgPool>) -> Result<Json<Vec<Event>>, AppError> {
    let events = event::list(&pool).await?;
    Ok(Json(events))
}
