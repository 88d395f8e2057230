use super::Record;
use super::checks::{Case, Checks};

pub const DONATION_TYPES: &[&str] = &["monetary", "food", "toys", "supplies", "other"];

/// Validates a donation record.
pub fn validate_donation(record: &Record) -> Vec<String> {
    let mut checks = Checks::new(record);

    let donation_type = checks.required("donation_type", "Donation type");
    checks.max_length(donation_type, 50, "Donation type");
    checks.one_of(
        donation_type,
        DONATION_TYPES,
        Case::Insensitive,
        "Donation type",
    );

    let amount = checks.required("amount", "Amount");
    checks.max_length(amount, 20, "Amount");

    let email = checks.field("email");
    checks.email(email, "Email");

    let items = checks.field("items");
    checks.max_length(items, 500, "Items");

    let donation_date = checks.field("donation_date");
    checks.date(donation_date, "Donation date");

    checks.finish()
}
