use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Invalid email address {address}: {source}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
