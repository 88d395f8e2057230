use super::Record;
use super::checks::Checks;

/// Validates a veterinarian contact.
pub fn validate_vet(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    checks.required("name", "Name");

    let email = checks.required("email", "Email");
    checks.email(email, "Email");

    let phone = checks.field("phone");
    checks.phone(phone, "Phone");

    let specialization = checks.field("specialization");
    checks.max_length(specialization, 200, "Specialization");

    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::record;
    use serde_json::json;

    #[test]
    fn test_well_formed_vet_passes() {
        let vet = record(json!({
            "name": "Dr. Amara Osei",
            "email": "amara@clinic.example",
            "phone": "555 222 3333",
            "specialization": "Feline medicine",
        }));
        assert!(validate_vet(&vet).is_empty());
    }

    #[test]
    fn test_vet_field_errors() {
        let vet = record(json!({
            "name": "Dr. Osei",
            "phone": "call the clinic",
            "specialization": "s".repeat(201),
        }));
        assert_eq!(
            validate_vet(&vet),
            vec![
                "Email is required".to_string(),
                "Phone must be a valid 10-digit phone number".to_string(),
                "Specialization must be 200 characters or less".to_string(),
            ]
        );
    }
}
