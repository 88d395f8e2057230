use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::PgPool;
use crate::errors::AppError;
use crate::schema::events;
use crate::schema::events::dsl::{event_date as events_date, events as events_table};

use super::{calendar_day, scalar_text, scalar_text_list};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = events)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub urgency: String,
    pub required_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub urgency: String,
    pub required_skills: Vec<String>,
}

/// Event form body, read after `validate_event` accepted it.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(deserialize_with = "scalar_text")]
    title: String,
    #[serde(deserialize_with = "scalar_text")]
    description: String,
    #[serde(deserialize_with = "scalar_text")]
    date: String,
    #[serde(deserialize_with = "scalar_text")]
    location: String,
    #[serde(deserialize_with = "scalar_text")]
    urgency: String,
    #[serde(default, deserialize_with = "scalar_text_list")]
    required_skills: Vec<String>,
}

impl TryFrom<EventPayload> for NewEvent {
    type Error = AppError;

    fn try_from(payload: EventPayload) -> Result<Self, Self::Error> {
        let required_skills = payload
            .required_skills
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        Ok(Self {
            title: payload.title.trim().to_string(),
            description: payload.description.trim().to_string(),
            event_date: calendar_day(&payload.date)?,
            location: payload.location.trim().to_string(),
            urgency: payload.urgency,
            required_skills,
        })
    }
}

pub async fn insert(pool: &PgPool, new_event: &NewEvent) -> Result<Event, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    diesel::insert_into(events_table)
        .values(new_event)
        .returning(Event::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}

/// All events, soonest first.
pub async fn list(pool: &PgPool) -> Result<Vec<Event>, AppError> {
    let mut conn = crate::db::connection(pool).await?;

    events_table
        .order(events_date.asc())
        .select(Event::as_select())
        .load(&mut conn)
        .await
        .map_err(AppError::from_diesel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_skills_are_dropped() {
        let payload = EventPayload {
            title: "Adoption Day ".to_string(),
            description: "Meet adoptable pets".to_string(),
            date: "06/15/2024".to_string(),
            location: "Central Park".to_string(),
            urgency: "high".to_string(),
            required_skills: vec!["greeting".to_string(), "  ".to_string()],
        };

        let event = NewEvent::try_from(payload).unwrap();
        assert_eq!(event.title, "Adoption Day");
        assert_eq!(event.event_date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(event.required_skills, vec!["greeting".to_string()]);
    }
}
