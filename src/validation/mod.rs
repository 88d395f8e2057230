//! Record validation for every shelter entity.
//!
//! Each `validate_*` function reads a JSON object by field name and returns
//! every problem it finds, in a fixed order. An empty list means the record
//! can be stored. The functions hold no state and never fail, so handlers
//! call them before any database write and turn a non-empty list into a
//! `422` response.

mod adoption;
mod animal;
mod checks;
mod donation;
mod event;
mod fields;
mod notification;
mod user;
mod vet;
mod volunteer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use adoption::{ADOPTION_STATUSES, validate_adoption};
pub use animal::{ANIMAL_SEXES, ANIMAL_STATUSES, validate_animal};
pub use donation::{DONATION_TYPES, validate_donation};
pub use event::{EVENT_URGENCIES, validate_event};
pub(crate) use fields::{as_text, render_text};
pub use fields::{
    parse_calendar_day, parse_date, validate_date, validate_email, validate_length, validate_phone,
    validate_required, validate_zip_code,
};
pub use notification::{NOTIFICATION_PRIORITIES, NOTIFICATION_TYPES, validate_notification};
pub use user::{REGISTRATION_FIELDS, validate_user, validate_user_registration};
pub use vet::validate_vet;
pub use volunteer::validate_volunteer;

/// A record under validation: field name to JSON value.
pub type Record = Map<String, Value>;

/// The kinds of record that have a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Entity {
    Animal,
    Donation,
    Event,
    User,
    UserRegistration,
    Volunteer,
    Adoption,
    Vet,
    Notification,
}

#[derive(Debug, Error)]
#[error("unknown entity '{0}'")]
pub struct UnknownEntity(pub String);

impl Entity {
    pub const ALL: [Entity; 9] = [
        Entity::Animal,
        Entity::Donation,
        Entity::Event,
        Entity::User,
        Entity::UserRegistration,
        Entity::Volunteer,
        Entity::Adoption,
        Entity::Vet,
        Entity::Notification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Animal => "animal",
            Entity::Donation => "donation",
            Entity::Event => "event",
            Entity::User => "user",
            Entity::UserRegistration => "user-registration",
            Entity::Volunteer => "volunteer",
            Entity::Adoption => "adoption",
            Entity::Vet => "vet",
            Entity::Notification => "notification",
        }
    }

    /// Runs the entity's validator.
    ///
    /// For [`Entity::UserRegistration`] the entries are field names rather
    /// than messages.
    pub fn validate(&self, record: &Record) -> Vec<String> {
        match self {
            Entity::Animal => validate_animal(record),
            Entity::Donation => validate_donation(record),
            Entity::Event => validate_event(record),
            Entity::User => validate_user(record),
            Entity::UserRegistration => validate_user_registration(record),
            Entity::Volunteer => validate_volunteer(record),
            Entity::Adoption => validate_adoption(record),
            Entity::Vet => validate_vet(record),
            Entity::Notification => validate_notification(record),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Entity {
    type Err = UnknownEntity;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Entity::ALL
            .into_iter()
            .find(|entity| entity.as_str() == normalized)
            .ok_or_else(|| UnknownEntity(value.to_string()))
    }
}
