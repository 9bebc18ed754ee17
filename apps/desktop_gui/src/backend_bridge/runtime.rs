//! Runtime bridge between the UI command queue and the delivery backend.
//!
//! One detached thread owns a tokio runtime and drains commands until the
//! UI side hangs up. There is no cancellation: a send in flight when the
//! window closes is simply dropped with the runtime.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use mailer::DeliveryHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    delivery: Box<dyn DeliveryHandle>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Delivery worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "delivery worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build delivery runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Delivery worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SendContact { message } => {
                        tracing::info!(
                            from = %message.email,
                            subject_len = message.subject.len(),
                            "worker: send_contact"
                        );
                        match delivery.send(&message).await {
                            Ok(receipt) => {
                                let _ = ui_tx.try_send(UiEvent::DeliverySucceeded(receipt));
                            }
                            Err(err) => {
                                tracing::error!("worker: send_contact failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::DeliveryFailed(err.failure()));
                            }
                        }
                    }
                }
            }
        });
    });
}
