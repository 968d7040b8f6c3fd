use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use dotenv::dotenv;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reminder_cell::{PgReminderRepository, ReminderService, SmtpReminderSender};
use shared_config::ReminderConfig;
use shared_database::connect;

const CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting appointment reminder");

    let config = ReminderConfig::from_env();

    let pool = connect(&config.database)
        .await
        .context("database is unreachable")?;
    let sender = SmtpReminderSender::new(&config.smtp).context("invalid SMTP configuration")?;

    let service = ReminderService::new(
        Arc::new(PgReminderRepository::new(pool)),
        Arc::new(sender),
    )
    .with_utc_offset(config.utc_offset);

    // The first tick completes immediately.
    let mut ticker = interval(CHECK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                service.check_appointments(Utc::now()).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping reminder");
                break;
            }
        }
    }

    Ok(())
}
