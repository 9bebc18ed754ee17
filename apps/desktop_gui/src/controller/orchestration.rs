//! Command orchestration from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the delivery worker. Returns whether it was
/// accepted; on failure the status line explains what happened.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SendContact { .. } => "send_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->worker command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Delivery queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Delivery worker disconnected (possible startup failure); restart the app"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::ContactMessage;

    fn command() -> BackendCommand {
        BackendCommand::SendContact {
            message: ContactMessage::default(),
        }
    }

    #[test]
    fn accepted_commands_leave_the_status_alone() {
        let (tx, _rx) = bounded(4);
        let mut status = "ready".to_string();
        assert!(dispatch_backend_command(&tx, command(), &mut status));
        assert_eq!(status, "ready");
    }

    #[test]
    fn full_queue_is_reported_without_panicking() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, command(), &mut status));
        assert!(!dispatch_backend_command(&tx, command(), &mut status));
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&tx, command(), &mut status));
        assert!(status.contains("disconnected"));
    }
}
