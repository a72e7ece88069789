//! Errors surfaced to callers of the notification producers

use thiserror::Error;

use crate::channel::DeliveryError;
use crate::client::ClientStateError;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The projection could not be encoded; nothing was dispatched
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Client state unavailable: {0}")]
    ClientState(#[from] ClientStateError),
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        NotifyError::Serialization(err.to_string())
    }
}
