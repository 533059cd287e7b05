//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::RosterApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Every command runs as its own task, so
/// requests overlap freely; each result is sent to the UI as soon as it
/// settles. The thread exits once the UI side drops its command sender.
pub fn launch(
    api: Arc<dyn RosterApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };
        tracing::debug!("backend worker ready");

        while let Ok(cmd) = cmd_rx.recv() {
            let api = api.clone();
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                let event = perform(api.as_ref(), cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; discarding settled result");
                }
            });
        }

        tracing::debug!("ui command queue closed; backend worker stopping");
    })
}

pub async fn perform(api: &dyn RosterApi, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::UpdateWorkerOrder { order } => {
            match api.update_worker_order(&order).await {
                Ok(()) => UiEvent::OrderSaved { order },
                Err(err) => {
                    UiEvent::Error(UiError::from_client_error(UiErrorContext::Reorder, &err))
                }
            }
        }
        BackendCommand::ToggleOffDuty {
            worker_id,
            desired_is_off,
        } => match api.toggle_off_worker(worker_id, desired_is_off).await {
            Ok(is_off) => UiEvent::ToggleSettled { worker_id, is_off },
            Err(err) => UiEvent::Error(UiError::from_client_error(
                UiErrorContext::Toggle { worker_id },
                &err,
            )),
        },
    }
}
