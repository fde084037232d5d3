//! Dedicated thread that owns the tokio runtime and the controller.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use enquiry_core::{EnquiryController, Settings};
use tracing::error;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(error = %err, "failed to build controller runtime");
                let _ = ui_tx.send(UiEvent::BackendGone);
                return;
            }
        };

        let controller = EnquiryController::from_settings(&settings);

        // Forward controller status transitions to the UI queue.
        {
            let mut status_rx = controller.subscribe_status();
            let status_tx = ui_tx.clone();
            runtime.spawn(async move {
                while let Ok(status) = status_rx.recv().await {
                    if status_tx.send(UiEvent::Status(status)).is_err() {
                        break;
                    }
                }
            });
        }

        // Drain UI commands until the UI side hangs up. Submits run
        // detached so edits keep flowing while a request is in flight;
        // the controller's own guard keeps submission single-flight.
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Edit(edit) => {
                    let controller = Arc::clone(&controller);
                    runtime.block_on(async move { controller.update_field(edit).await });
                }
                BackendCommand::Submit => {
                    let controller = Arc::clone(&controller);
                    runtime.spawn(async move {
                        controller.submit().await;
                    });
                }
            }
        }
    });
}
