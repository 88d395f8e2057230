use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::schema::notifications;
use crate::schema::notifications::dsl::{
    created_at as notifications_created_at, notifications as notifications_table,
};

use super::{optional_scalar_text, scalar_text};

const DEFAULT_KIND: &str = "info";
const DEFAULT_PRIORITY: &str = "medium";

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = notifications)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: String,
    pub priority: String,
}

/// Notification body, read after `validate_notification` accepted it.
#[derive(Debug, Deserialize)]
pub struct NotificationPayload {
    #[serde(deserialize_with = "scalar_text")]
    title: String,
    #[serde(deserialize_with = "scalar_text")]
    message: String,
    #[serde(rename = "type", default, deserialize_with = "optional_scalar_text")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    priority: Option<String>,
}

impl From<NotificationPayload> for NewNotification {
    fn from(payload: NotificationPayload) -> Self {
        Self {
            title: payload.title.trim().to_string(),
            message: payload.message.trim().to_string(),
            kind: payload.kind.unwrap_or_else(|| DEFAULT_KIND.to_string()),
            priority: payload
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
        }
    }
}

pub async fn insert(
    pool: &PgPool,
    new_notification: &NewNotification,
) -> Result<Notification, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    diesel::insert_into(notifications_table)
        .values(new_notification)
        .returning(Notification::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}

/// Most recent first.
pub async fn list(pool: &PgPool) -> Result<Vec<Notification>, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    notifications_table
        .order(notifications_created_at.desc())
        .select(Notification::as_select())
        .load(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}
