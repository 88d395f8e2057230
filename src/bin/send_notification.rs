//! Validates a notification and stores it without going through the API.

use clap::Parser;
use serde_json::{Map, Value};
use shelter::config::AppConfig;
use shelter::db::establish_pool;
use shelter::logging::{AuditEvent, init_tracing};
use shelter::models::notification::{self, NewNotification};
use shelter::validation::validate_notification;

#[derive(Debug, Parser)]
#[command(name = "send-notification", about = "Insert a shelter notification")]
struct Args {
    /// Short headline, at most 100 characters
    #[arg(long)]
    title: String,

    /// Body text, at most 500 characters
    #[arg(long)]
    message: String,

    /// info, warning, error or success
    #[arg(long = "type", default_value = "info")]
    kind: String,

    /// low, medium, high or urgent
    #[arg(long, default_value = "medium")]
    priority: String,
}

impl Args {
    fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("title".into(), Value::from(self.title.as_str()));
        record.insert("message".into(), Value::from(self.message.as_str()));
        record.insert("type".into(), Value::from(self.kind.as_str()));
        record.insert("priority".into(), Value::from(self.priority.as_str()));
        record
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let errors = validate_notification(&args.to_record());
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!(%error, "Invalid notification");
        }
        anyhow::bail!("notification rejected with {} error(s)", errors.len());
    }

    let config = AppConfig::from_env()?;
    let pool = establish_pool(&config).await?;

    let new_notification = NewNotification {
        title: args.title.trim().to_string(),
        message: args.message.trim().to_string(),
        kind: args.kind,
        priority: args.priority,
    };
    let stored = notification::insert(&pool, &new_notification).await?;

    shelter::log_audit_event!(
        AuditEvent::NotificationSent,
        record_id = %stored.id,
        priority = %stored.priority,
        "Notification stored"
    );
    println!("{}", stored.id);

    Ok(())
}
