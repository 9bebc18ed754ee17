//! Worker→UI events and failure presentation.

use shared::error::{DeliveryFailure, DeliveryFailureKind, DeliveryReceipt};

pub enum UiEvent {
    Info(String),
    WorkerFailed(String),
    DeliverySucceeded(DeliveryReceipt),
    DeliveryFailed(DeliveryFailure),
}

/// Status-line text for a delivery failure. The banner copy stays the fixed
/// apology string; this is the more specific diagnostic next to it.
pub fn describe_failure(failure: &DeliveryFailure) -> String {
    match failure.kind {
        DeliveryFailureKind::Transport => {
            "Email service unreachable; check your network and try again.".to_string()
        }
        DeliveryFailureKind::Config => {
            format!("Delivery configuration problem: {}", failure.message)
        }
        DeliveryFailureKind::Rejected => {
            format!("Email service rejected the message: {}", failure.message)
        }
    }
}
