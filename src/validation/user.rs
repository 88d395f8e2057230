use super::Record;
use super::checks::Checks;
use super::fields::validate_required;

/// Registration fields in the order they appear on the sign-up form.
pub const REGISTRATION_FIELDS: [&str; 6] = ["name", "email", "password", "address", "city", "state"];

/// Validates a user profile.
pub fn validate_user(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    checks.required("name", "Name");

    let email = checks.required("email", "Email");
    checks.email(email, "Email");

    let phone = checks.field("phone");
    checks.phone(phone, "Phone");

    let skills = checks.field("skills");
    checks.sequence(skills, "Skills");

    checks.finish()
}

/// Returns the names of the registration fields that are missing or blank,
/// for highlighting on the sign-up form.
pub fn validate_user_registration(record: &Record) -> Vec<String> {
    REGISTRATION_FIELDS
        .iter()
        .filter(|field| !record.get(**field).is_some_and(validate_required))
        .map(|field| field.to_string())
        .collect()
}
