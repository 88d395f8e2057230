use std::fmt;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Sanitized wrapper for email addresses that masks the local part
#[derive(Debug, Clone)]
pub struct SanitizedEmail(String);

impl SanitizedEmail {
    pub fn new(email: impl AsRef<str>) -> Self {
        Self(Self::sanitize(email.as_ref()))
    }

    fn sanitize(email: &str) -> String {
        match email.split_once('@') {
            Some((local, domain)) => {
                let mut chars = local.chars();
                let masked_local = match (chars.next(), local.chars().count()) {
                    (Some(first), count) if count > 2 => format!("{first}***"),
                    (_, count) => "*".repeat(count),
                };
                format!("{masked_local}@{domain}")
            }
            None => "***@***".to_string(),
        }
    }
}

impl fmt::Display for SanitizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sanitized wrapper for phone numbers that keeps only the last two digits
#[derive(Debug, Clone)]
pub struct SanitizedPhone(String);

impl SanitizedPhone {
    pub fn new(phone: impl AsRef<str>) -> Self {
        let digits: Vec<char> = phone
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let masked = match digits.len() {
            0..=2 => "*".repeat(digits.len()),
            len => {
                let tail: String = digits[len - 2..].iter().collect();
                format!("{}{tail}", "*".repeat(len - 2))
            }
        };
        Self(masked)
    }
}

impl fmt::Display for SanitizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain events written to the audit trail
#[derive(Debug, Clone, Copy)]
pub enum AuditEvent {
    RecordCreated,
    ValidationRejected,
    RegistrationSuccess,
    RegistrationFailure,
    VolunteerDeactivated,
    NotificationSent,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEvent::RecordCreated => "record_created",
            AuditEvent::ValidationRejected => "validation_rejected",
            AuditEvent::RegistrationSuccess => "registration_success",
            AuditEvent::RegistrationFailure => "registration_failure",
            AuditEvent::VolunteerDeactivated => "volunteer_deactivated",
            AuditEvent::NotificationSent => "notification_sent",
        }
    }

    /// Events that point at bad input and are logged at `warn`.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuditEvent::ValidationRejected | AuditEvent::RegistrationFailure
        )
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log an audit event with sanitized context
#[macro_export]
macro_rules! log_audit_event {
    ($event:expr, $($field:tt)*) => {
        if $event.is_rejection() {
            tracing::warn!(
                audit_event = %$event,
                event_type = "audit",
                $($field)*
            );
        } else {
            tracing::info!(
                audit_event = %$event,
                event_type = "audit",
                $($field)*
            );
        }
    };
}
