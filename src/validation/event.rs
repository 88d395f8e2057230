use super::Record;
use super::checks::{Case, Checks};

pub const EVENT_URGENCIES: &[&str] = &["low", "medium", "high", "critical"];

/// Validates a volunteer event.
pub fn validate_event(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let title = checks.required("title", "Title");
    checks.max_length(title, 100, "Title");

    let description = checks.required("description", "Description");
    checks.max_length(description, 500, "Description");

    let date = checks.required("date", "Date");
    checks.date(date, "Date");

    let location = checks.required("location", "Location");
    checks.max_length(location, 200, "Location");

    let urgency = checks.required("urgency", "Urgency");
    checks.one_of(urgency, EVENT_URGENCIES, Case::Sensitive, "Urgency");

    let required_skills = checks.field("required_skills");
    checks.sequence(required_skills, "Required skills");

    checks.finish()
}
