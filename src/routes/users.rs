use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{Extension, Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use rand_core::OsRng;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::logging::{AuditEvent, SanitizedEmail, SanitizedPhone};
use crate::models::decode;
use crate::models::user::{self, RegistrationPayload};
use crate::security::json::ValidatedJson;
use crate::validation::{Record, validate_email, validate_phone, validate_user_registration};

pub fn router() -> Router {
    Router::new().route("/users/register", post(register))
}

/// Field names that fail the format checks the sign-up form highlights.
fn malformed_fields(payload: &RegistrationPayload) -> Vec<String> {
    let mut fields = Vec::new();
    if !validate_email(payload.email.trim()) {
        fields.push("email".to_string());
    }
    if let Some(phone) = payload.phone.as_deref().filter(|phone| !phone.trim().is_empty())
        && !validate_phone(phone)
    {
        fields.push("phone".to_string());
    }
    fields
}

#[tracing::instrument(name = "register_user", skip(pool, record), fields(email, user_id))]
pub async fn register(
    Extension(pool): Extension<PgPool>,
    ValidatedJson(record): ValidatedJson<Record>,
) -> Result<impl IntoResponse, AppError> {
    let missing = validate_user_registration(&record);
    if !missing.is_empty() {
        return Err(AppError::InvalidFields(missing));
    }

    let payload: RegistrationPayload = decode(record)?;
    let malformed = malformed_fields(&payload);
    if !malformed.is_empty() {
        return Err(AppError::InvalidFields(malformed));
    }

    let email = SanitizedEmail::new(payload.email.trim());
    tracing::Span::current().record("email", tracing::field::display(&email));
    tracing::debug!(email = %email, "Processing registration request");

    let password_hash = {
        let password = payload.password.clone();
        tokio::task::spawn_blocking(move || -> Result<String, AppError> {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
            Ok(hash.to_string())
        })
        .await
        .map_err(|err| AppError::PasswordHashing(err.to_string()))??
    };

    let new_user = payload.into_new_user(password_hash);
    let user = user::insert(&pool, &new_user).await.map_err(|err| {
        crate::log_audit_event!(
            AuditEvent::RegistrationFailure,
            email = %email,
            error = %err,
            "User registration failed"
        );
        err
    })?;

    tracing::Span::current().record("user_id", tracing::field::display(user.id));
    crate::log_audit_event!(
        AuditEvent::RegistrationSuccess,
        user_id = %user.id,
        email = %email,
        phone = user
            .phone
            .as_deref()
            .map(|phone| tracing::field::display(SanitizedPhone::new(phone))),
        "User registered successfully"
    );

    Ok((StatusCode::CREATED, Json(user)))
}
