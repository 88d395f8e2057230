use serde_json::Value;

use super::Record;
use super::fields::{
    as_number, as_text, validate_date, validate_email, validate_length, validate_phone,
    validate_required, validate_zip_code,
};

/// How enum membership compares the candidate against the allowed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    Sensitive,
    Insensitive,
}

/// Accumulates error messages for one record, in the order checks are run.
pub(crate) struct Checks<'a> {
    record: &'a Record,
    errors: Vec<String>,
}

impl<'a> Checks<'a> {
    pub(crate) fn new(record: &'a Record) -> Self {
        Self {
            record,
            errors: Vec::new(),
        }
    }

    /// Field value, with JSON `null` treated as absent.
    pub(crate) fn field(&self, name: &str) -> Option<&'a Value> {
        self.record.get(name).filter(|value| !value.is_null())
    }

    /// Returns the value when it is filled in; otherwise records
    /// "`label` is required" and returns `None` so that format checks on the
    /// same field are skipped.
    pub(crate) fn required(&mut self, name: &str, label: &str) -> Option<&'a Value> {
        match self.field(name) {
            Some(value) if validate_required(value) => Some(value),
            _ => {
                self.errors.push(format!("{label} is required"));
                None
            }
        }
    }

    pub(crate) fn max_length(&mut self, value: Option<&Value>, max: usize, label: &str) {
        if !validate_length(value, max) {
            self.errors
                .push(format!("{label} must be {max} characters or less"));
        }
    }

    pub(crate) fn email(&mut self, value: Option<&Value>, label: &str) {
        self.text_predicate(value, validate_email, || {
            format!("{label} must be a valid email address")
        });
    }

    pub(crate) fn phone(&mut self, value: Option<&Value>, label: &str) {
        self.text_predicate(value, validate_phone, || {
            format!("{label} must be a valid 10-digit phone number")
        });
    }

    pub(crate) fn date(&mut self, value: Option<&Value>, label: &str) {
        self.text_predicate(value, validate_date, || {
            format!("{label} must be a valid date")
        });
    }

    pub(crate) fn zip_code(&mut self, value: Option<&Value>, label: &str) {
        self.text_predicate(value, validate_zip_code, || {
            format!("{label} must be a 5-digit ZIP code or ZIP+4")
        });
    }

    pub(crate) fn one_of(
        &mut self,
        value: Option<&Value>,
        allowed: &[&str],
        case: Case,
        label: &str,
    ) {
        let Some(value) = value else {
            return;
        };

        let matches = as_text(value).is_some_and(|text| match case {
            Case::Sensitive => allowed.contains(&&*text),
            Case::Insensitive => allowed.contains(&text.to_lowercase().as_str()),
        });

        if !matches {
            self.errors
                .push(format!("{label} must be one of: {}", allowed.join(", ")));
        }
    }

    pub(crate) fn number_in_range(
        &mut self,
        value: Option<&Value>,
        min: f64,
        max: f64,
        label: &str,
    ) {
        let Some(value) = value else {
            return;
        };

        let in_range = as_number(value).is_some_and(|number| (min..=max).contains(&number));
        if !in_range {
            self.errors
                .push(format!("{label} must be a number between {min} and {max}"));
        }
    }

    pub(crate) fn sequence(&mut self, value: Option<&Value>, label: &str) {
        if value.is_some_and(|value| !value.is_array()) {
            self.errors.push(format!("{label} must be an array"));
        }
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.errors
    }

    /// Runs a text predicate on a present value. Non-text values fail.
    fn text_predicate(
        &mut self,
        value: Option<&Value>,
        predicate: fn(&str) -> bool,
        message: impl FnOnce() -> String,
    ) {
        let Some(value) = value else {
            return;
        };

        if !as_text(value).is_some_and(|text| predicate(&text)) {
            self.errors.push(message());
        }
    }
}
