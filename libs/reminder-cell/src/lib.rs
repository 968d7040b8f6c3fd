pub mod error;
pub mod models;
pub mod repository;
pub mod sender;
pub mod service;

pub use error::ReminderError;
pub use models::*;
pub use repository::{PgReminderRepository, ReminderRepository};
pub use sender::{ReminderSender, SmtpReminderSender};
pub use service::{format_reminder, reminder_window, ReminderService};
