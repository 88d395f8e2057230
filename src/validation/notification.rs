use super::Record;
use super::checks::{Case, Checks};

pub const NOTIFICATION_TYPES: &[&str] = &["info", "warning", "error", "success"];
pub const NOTIFICATION_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];

/// Validates a notification before it is stored.
pub fn validate_notification(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let title = checks.required("title", "Title");
    checks.max_length(title, 100, "Title");

    let message = checks.required("message", "Message");
    checks.max_length(message, 500, "Message");

    let kind = checks.field("type");
    checks.one_of(kind, NOTIFICATION_TYPES, Case::Sensitive, "Type");

    let priority = checks.field("priority");
    checks.one_of(priority, NOTIFICATION_PRIORITIES, Case::Sensitive, "Priority");

    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::record;
    use serde_json::json;

    #[test]
    fn test_well_formed_notification_passes() {
        let notification = record(json!({
            "title": "Shift reminder",
            "message": "Your kennel shift starts at 9am tomorrow.",
            "type": "info",
            "priority": "medium",
        }));
        assert!(validate_notification(&notification).is_empty());
    }

    #[test]
    fn test_notification_field_errors() {
        let notification = record(json!({
            "title": "t".repeat(101),
            "message": "",
            "type": "Info",
            "priority": "asap",
        }));
        assert_eq!(
            validate_notification(&notification),
            vec![
                "Title must be 100 characters or less".to_string(),
                "Message is required".to_string(),
                "Type must be one of: info, warning, error, success".to_string(),
                "Priority must be one of: low, medium, high, urgent".to_string(),
            ]
        );
    }
}
