use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::schema::volunteers;
use crate::schema::volunteers::dsl::{
    active as volunteers_active, created_at as volunteers_created_at, id as volunteers_id,
    volunteers as volunteers_table,
};

use super::{calendar_day, non_blank, optional_scalar_text, scalar_text};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = volunteers)]
pub struct Volunteer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = volunteers)]
pub struct NewVolunteer {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub availability_date: Option<NaiveDate>,
}

/// Volunteer sign-up body, read after `validate_volunteer` accepted it.
#[derive(Debug, Deserialize)]
pub struct VolunteerPayload {
    #[serde(deserialize_with = "scalar_text")]
    full_name: String,
    #[serde(deserialize_with = "scalar_text")]
    email: String,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    address: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    city: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    state: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    zip_code: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    availability_date: Option<String>,
}

impl TryFrom<VolunteerPayload> for NewVolunteer {
    type Error = AppError;

    fn try_from(payload: VolunteerPayload) -> Result<Self, Self::Error> {
        let availability_date = non_blank(payload.availability_date)
            .map(|date| calendar_day(&date))
            .transpose()?;

        Ok(Self {
            full_name: payload.full_name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            phone: non_blank(payload.phone),
            address: non_blank(payload.address),
            city: non_blank(payload.city),
            state: non_blank(payload.state),
            zip_code: non_blank(payload.zip_code),
            availability_date,
        })
    }
}

pub async fn insert(pool: &PgPool, new_volunteer: &NewVolunteer) -> Result<Volunteer, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    diesel::insert_into(volunteers_table)
        .values(new_volunteer)
        .returning(Volunteer::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}

pub async fn list_active(pool: &PgPool) -> Result<Vec<Volunteer>, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    volunteers_table
        .filter(volunteers_active.eq(true))
        .order(volunteers_created_at.desc())
        .select(Volunteer::as_select())
        .load(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}

/// Clears the `active` flag. Returns the number of rows touched.
pub async fn deactivate(pool: &PgPool, volunteer_id: Uuid) -> Result<usize, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    diesel::update(volunteers_table.filter(volunteers_id.eq(volunteer_id)))
        .set(volunteers_active.eq(false))
        .execute(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}
