use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::schema::users;
use crate::schema::users::dsl::users as users_table;

use super::{non_blank, optional_scalar_text, scalar_text};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = users)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
}

/// Sign-up form body, read after `validate_user_registration` accepted it.
#[derive(Deserialize)]
pub struct RegistrationPayload {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub email: String,
    #[serde(deserialize_with = "scalar_text")]
    pub password: String,
    #[serde(deserialize_with = "scalar_text")]
    pub address: String,
    #[serde(deserialize_with = "scalar_text")]
    pub city: String,
    #[serde(deserialize_with = "scalar_text")]
    pub state: String,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub phone: Option<String>,
}

impl RegistrationPayload {
    /// Builds the row to insert; the password is replaced by its hash.
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password_hash,
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: non_blank(self.phone),
        }
    }
}

pub async fn insert(pool: &PgPool, new_user: &NewUser) -> Result<User, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    diesel::insert_into(users_table)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}
