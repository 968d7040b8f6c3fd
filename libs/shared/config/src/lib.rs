use std::env;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Full DSN; takes precedence over the individual parts when set.
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                warn!("{} not set, using default", key);
                default.to_string()
            })
        };

        Self {
            host: string_or("DB_HOST", "localhost"),
            port: string_or("DB_PORT", "5432"),
            name: string_or("DB_NAME", "clinic"),
            user: string_or("DB_USER", "postgres"),
            password: lookup("DB_PASS").unwrap_or_default(),
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
        }
    }

    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SmtpConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("SMTP_HOST").unwrap_or_default(),
            port: parse_or(lookup, "SMTP_PORT", DEFAULT_SMTP_PORT),
            username: lookup("SMTP_USERNAME").unwrap_or_default(),
            password: lookup("SMTP_PASSWORD").unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.username.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub port: u16,
    pub timeout_secs: u64,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so callers and
    /// tests are not tied to the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database: DatabaseConfig::from_lookup(&lookup),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            timeout_secs: match parse_or(&lookup, "TIMEOUT", DEFAULT_TIMEOUT_SECS) {
                0 => {
                    warn!("TIMEOUT must be positive, using default");
                    DEFAULT_TIMEOUT_SECS
                }
                secs => secs,
            },
            jwt_secret: lookup("JWT_SECRET").unwrap_or_else(|| {
                warn!("JWT_SECRET not set, using empty value");
                String::new()
            }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.jwt_secret.is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for the reminder worker: database, mail relay and the clinic's
/// UTC offset used when printing appointment times.
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    pub database: DatabaseConfig,
    pub smtp: SmtpConfig,
    pub utc_offset: FixedOffset,
}

impl ReminderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database: DatabaseConfig::from_lookup(&lookup),
            smtp: SmtpConfig::from_lookup(&lookup),
            utc_offset: match lookup("CLINIC_UTC_OFFSET") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("CLINIC_UTC_OFFSET has an invalid value {:?}, using UTC", raw);
                    Utc.fix()
                }),
                None => Utc.fix(),
            },
        };

        if !config.smtp.is_configured() {
            warn!("SMTP_HOST or SMTP_USERNAME is empty; reminders will fail to send");
        }

        config
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
