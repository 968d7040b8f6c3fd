use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use shared_config::SmtpConfig;

use crate::error::ReminderError;
use crate::models::ReminderEmail;

const IMPLICIT_TLS_PORT: u16 = 465;

#[async_trait]
pub trait ReminderSender: Send + Sync {
    async fn send_reminder(&self, email: &ReminderEmail) -> Result<(), ReminderError>;
}

#[derive(Debug)]
pub struct SmtpReminderSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpReminderSender {
    /// Port 465 uses implicit TLS; anything else upgrades with STARTTLS.
    pub fn new(config: &SmtpConfig) -> Result<Self, ReminderError> {
        let builder = if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.username)?,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ReminderError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| ReminderError::Address {
            address: address.to_string(),
            source,
        })
}

#[async_trait]
impl ReminderSender for SmtpReminderSender {
    async fn send_reminder(&self, email: &ReminderEmail) -> Result<(), ReminderError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())?;

        self.transport.send(message).await?;
        debug!("Reminder delivered to {}", email.to);

        Ok(())
    }
}
