use super::Record;
use super::checks::{Case, Checks};

pub const ANIMAL_STATUSES: &[&str] = &["available", "adopted", "surrendered"];
pub const ANIMAL_SEXES: &[&str] = &["male", "female", "unknown"];

const MAX_AGE_YEARS: f64 = 50.0;

/// Validates an animal intake record.
pub fn validate_animal(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let name = checks.required("name", "Name");
    checks.max_length(name, 100, "Name");

    let species = checks.required("species", "Species");
    checks.max_length(species, 100, "Species");

    let age = checks.field("age");
    checks.number_in_range(age, 0.0, MAX_AGE_YEARS, "Age");

    let status = checks.required("status", "Status");
    checks.one_of(status, ANIMAL_STATUSES, Case::Insensitive, "Status");

    let sex = checks.field("sex");
    checks.one_of(sex, ANIMAL_SEXES, Case::Insensitive, "Sex");

    let note = checks.field("note");
    checks.max_length(note, 1000, "Note");

    let notes = checks.field("notes");
    checks.max_length(notes, 45, "Notes");

    let intake_date = checks.field("intake_date");
    checks.date(intake_date, "Intake date");

    let donation_date = checks.field("donation_date");
    checks.date(donation_date, "Donation date");

    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::record;
    use serde_json::json;

    #[test]
    fn test_well_formed_animal_passes() {
        let animal = record(json!({
            "name": "Biscuit",
            "species": "Dog",
            "age": 4,
            "status": "available",
            "sex": "Female",
            "note": "Friendly with cats",
            "intake_date": "2024-03-15",
        }));
        assert!(validate_animal(&animal).is_empty());
    }

    #[test]
    fn test_invalid_animal_reports_each_problem() {
        let animal = record(json!({
            "name": "",
            "species": "Dog",
            "age": -5,
            "status": "invalid_status",
            "sex": "invalid_sex",
        }));
        let errors = validate_animal(&animal);
        assert_eq!(
            errors,
            vec![
                "Name is required".to_string(),
                "Age must be a number between 0 and 50".to_string(),
                "Status must be one of: available, adopted, surrendered".to_string(),
                "Sex must be one of: male, female, unknown".to_string(),
            ]
        );
    }

    #[test]
    fn test_status_and_sex_ignore_case() {
        let animal = record(json!({
            "name": "Tom",
            "species": "Cat",
            "status": "ADOPTED",
            "sex": "Male",
        }));
        assert!(validate_animal(&animal).is_empty());
    }

    #[test]
    fn test_age_bounds_and_numeric_strings() {
        let base = json!({"name": "Tom", "species": "Cat", "status": "available"});
        for (age, ok) in [
            (json!(0), true),
            (json!(50), true),
            (json!("12"), true),
            (json!(50.5), false),
            (json!("old"), false),
            (json!(true), false),
        ] {
            let mut animal = record(base.clone());
            animal.insert("age".into(), age.clone());
            assert_eq!(validate_animal(&animal).is_empty(), ok, "age {age}");
        }
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = validate_animal(&Record::new());
        assert_eq!(
            errors,
            vec![
                "Name is required".to_string(),
                "Species is required".to_string(),
                "Status is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_note_lengths_and_dates() {
        let animal = record(json!({
            "name": "Tom",
            "species": "Cat",
            "status": "available",
            "note": "x".repeat(1001),
            "notes": "y".repeat(46),
            "intake_date": "yesterday",
            "donation_date": "",
        }));
        assert_eq!(
            validate_animal(&animal),
            vec![
                "Note must be 1000 characters or less".to_string(),
                "Notes must be 45 characters or less".to_string(),
                "Intake date must be a valid date".to_string(),
                "Donation date must be a valid date".to_string(),
            ]
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let animal = record(json!({"name": "", "age": 99, "sex": "?"}));
        assert_eq!(validate_animal(&animal), validate_animal(&animal));
    }
}
