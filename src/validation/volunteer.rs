use super::Record;
use super::checks::Checks;

/// Validates a volunteer profile.
pub fn validate_volunteer(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let full_name = checks.required("full_name", "Full name");
    checks.max_length(full_name, 100, "Full name");

    let email = checks.required("email", "Email");
    checks.email(email, "Email");

    let phone = checks.field("phone");
    checks.phone(phone, "Phone");

    let address = checks.field("address");
    checks.max_length(address, 200, "Address");

    let city = checks.field("city");
    checks.max_length(city, 100, "City");

    let state = checks.field("state");
    checks.max_length(state, 50, "State");

    let zip_code = checks.field("zip_code");
    checks.zip_code(zip_code, "ZIP code");

    let availability_date = checks.field("availability_date");
    checks.date(availability_date, "Availability date");

    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::record;
    use serde_json::json;

    #[test]
    fn test_well_formed_volunteer_passes() {
        let volunteer = record(json!({
            "full_name": "Sam Ortiz",
            "email": "sam@example.com",
            "phone": "555-123-4567",
            "address": "12 Elm St",
            "city": "Portland",
            "state": "OR",
            "zip_code": "97201-1234",
            "availability_date": "2024-07-01",
        }));
        assert!(validate_volunteer(&volunteer).is_empty());
    }

    #[test]
    fn test_volunteer_field_errors() {
        let volunteer = record(json!({
            "full_name": "S".repeat(101),
            "email": "sam@",
            "phone": "12345",
            "state": "S".repeat(51),
            "zip_code": "972",
            "availability_date": "soon",
        }));
        assert_eq!(
            validate_volunteer(&volunteer),
            vec![
                "Full name must be 100 characters or less".to_string(),
                "Email must be a valid email address".to_string(),
                "Phone must be a valid 10-digit phone number".to_string(),
                "State must be 50 characters or less".to_string(),
                "ZIP code must be a 5-digit ZIP code or ZIP+4".to_string(),
                "Availability date must be a valid date".to_string(),
            ]
        );
    }

    #[test]
    fn test_numeric_zip_code_is_checked_as_text() {
        let volunteer = record(json!({
            "full_name": "Sam Ortiz",
            "email": "sam@example.com",
            "zip_code": 97201,
        }));
        assert!(validate_volunteer(&volunteer).is_empty());
    }
}
