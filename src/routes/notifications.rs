use axum::{Extension, Json, Router, http::StatusCode, routing::get};

use crate::db::PgPool;
use crate::errors::AppError;
use crate::logging::AuditEvent;
use crate::models::decode;
use crate::models::notification::{self, NewNotification, Notification, NotificationPayload};
use crate::security::json::ValidatedJson;
use crate::validation::{Entity, Record};

use super::ensure_valid;

pub fn router() -> Router {
    Router::new().route(
        "/notifications",
        get(list_notifications).post(create_notification),
    )
}

#[tracing::instrument(name = "create_notification", skip(pool, record))]
pub async fn create_notification(
    Extension(pool): Extension<PgPool>,
    ValidatedJson(record): ValidatedJson<Record>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    ensure_valid(Entity::Notification, &record)?;

    let payload: NotificationPayload = decode(record)?;
    let notification = notification::insert(&pool, &NewNotification::from(payload)).await?;

    crate::log_audit_event!(
        AuditEvent::NotificationSent,
        record_id = %notification.id,
        priority = %notification.priority,
        "Notification stored"
    );

    Ok((StatusCode::CREATED, Json(notification)))
}

pub async fn list_notifications(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = notification::list(&pool).await?;
    Ok(Json(notifications))
}
