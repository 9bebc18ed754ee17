use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryFailureKind {
    Rejected,
    Transport,
    Config,
}

/// A delivery failure in a shape that can cross the UI/worker channel.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct DeliveryFailure {
    pub kind: DeliveryFailureKind,
    pub message: String,
}

impl DeliveryFailure {
    pub fn new(kind: DeliveryFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What the third-party send reports on success: an HTTP-ish status plus the
/// response text, stamped when the adapter observed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
    pub completed_at: DateTime<Utc>,
}
