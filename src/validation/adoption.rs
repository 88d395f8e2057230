use super::Record;
use super::checks::{Case, Checks};

pub const ADOPTION_STATUSES: &[&str] = &["pending", "approved", "rejected", "completed"];

/// Validates an adoption application.
pub fn validate_adoption(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let adopter_name = checks.required("adopter_name", "Adopter name");
    checks.max_length(adopter_name, 100, "Adopter name");

    let adopter_email = checks.required("adopter_email", "Adopter email");
    checks.email(adopter_email, "Adopter email");

    let adopter_phone = checks.required("adopter_phone", "Adopter phone");
    checks.phone(adopter_phone, "Adopter phone");

    let adoption_date = checks.required("adoption_date", "Adoption date");
    checks.date(adoption_date, "Adoption date");

    let status = checks.field("status");
    checks.one_of(status, ADOPTION_STATUSES, Case::Sensitive, "Status");

    checks.finish()
}
