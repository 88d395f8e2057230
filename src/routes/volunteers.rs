use axum::{
    Extension, Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, patch},
};
use uuid::Uuid;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::logging::{AuditEvent, SanitizedEmail, SanitizedPhone};
use crate::models::decode;
use crate::models::volunteer::{self, NewVolunteer, Volunteer, VolunteerPayload};
use crate::security::json::ValidatedJson;
use crate::validation::{Entity, Record};

use super::ensure_valid;

pub fn router() -> Router {
    Router::new()
        .route("/volunteers", get(list_volunteers).post(create_volunteer))
        .route("/volunteers/:id/deactivate", patch(deactivate_volunteer))
}

#[tracing::instrument(name = "create_volunteer", skip(pool, record), fields(volunteer_id))]
pub async fn create_volunteer(
    Extension(pool): Extension<PgPool>,
    ValidatedJson(record): ValidatedJson<Record>,
) -> Result<(StatusCode, Json<Volunteer>), AppError> {
    ensure_valid(Entity::Volunteer, &record)?;

    let payload: VolunteerPayload = decode(record)?;
    let new_volunteer = NewVolunteer::try_from(payload)?;
    let volunteer = volunteer::insert(&pool, &new_volunteer).await?;

    tracing::Span::current().record("volunteer_id", tracing::field::display(volunteer.id));
    crate::log_audit_event!(
        AuditEvent::RecordCreated,
        entity = "volunteer",
        record_id = %volunteer.id,
        email = %SanitizedEmail::new(&volunteer.email),
        phone = volunteer
            .phone
            .as_deref()
            .map(|phone| tracing::field::display(SanitizedPhone::new(phone))),
        "Volunteer signed up"
    );

    Ok((StatusCode::CREATED, Json(volunteer)))
}

pub async fn list_volunteers(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Volunteer>>, AppError> {
    let active = volunteer::list_active(&pool).await?;
    Ok(Json(active))
}

#[tracing::instrument(name = "deactivate_volunteer", skip(pool))]
pub async fn deactivate_volunteer(
    Extension(pool): Extension<PgPool>,
    Path(volunteer_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let affected = volunteer::deactivate(&pool, volunteer_id).await?;

    if affected == 0 {
        return Err(AppError::NotFound);
    }

    crate::log_audit_event!(
        AuditEvent::VolunteerDeactivated,
        record_id = %volunteer_id,
        "Volunteer marked inactive"
    );

    Ok(StatusCode::NO_CONTENT)
}
