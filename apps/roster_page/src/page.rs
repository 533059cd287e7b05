//! The roster page: owns the document, attaches the controllers once and
//! routes UI events to the backend worker and settled results back.

use std::{sync::Arc, thread, time::Duration};

use client_core::RosterApi;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use shared::domain::WorkerId;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::{
    dispatch_backend_command, DragEnd, ReorderController, ToggleController, UiError,
    UiErrorContext, UiEvent,
};
use crate::ui::{Alerter, Document, Locale};

const COMMAND_QUEUE_CAPACITY: usize = 256;
const UI_EVENT_QUEUE_CAPACITY: usize = 2048;

/// Operator interactions the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    DragEnd(DragEnd),
    ToggleClicked { worker_id: WorkerId },
}

pub struct RosterPage<A: Alerter> {
    document: Document,
    locale: Locale,
    reorder: Option<ReorderController>,
    toggle: ToggleController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    alerter: A,
    backend: Option<thread::JoinHandle<()>>,
}

/// Entry point for the hosting page: attaches both controllers to `document`
/// and starts the backend worker that talks to `api`.
pub fn initialize<A: Alerter>(
    document: Document,
    api: Arc<dyn RosterApi>,
    locale: Locale,
    alerter: A,
) -> RosterPage<A> {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
    let backend = runtime::launch(api, cmd_rx, ui_tx);

    let mut page = RosterPage::with_channels(document, locale, alerter, cmd_tx, ui_rx);
    page.backend = Some(backend);
    page
}

impl<A: Alerter> RosterPage<A> {
    /// Wires the controllers over caller-owned channels without starting a
    /// backend worker.
    pub fn with_channels(
        document: Document,
        locale: Locale,
        alerter: A,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let reorder = ReorderController::attach(&document);
        let toggle = ToggleController::attach(&document);
        Self {
            document,
            locale,
            reorder,
            toggle,
            cmd_tx,
            ui_rx,
            alerter,
            backend: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for the drag adapter, which moves rows before it
    /// reports `PageEvent::DragEnd`.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn alerter(&self) -> &A {
        &self.alerter
    }

    pub fn alerter_mut(&mut self) -> &mut A {
        &mut self.alerter
    }

    /// Whether a backend worker thread was started and is still running.
    /// The worker exits on its own once the page is dropped.
    pub fn is_backend_running(&self) -> bool {
        self.backend
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn has_reorder_handler(&self) -> bool {
        self.reorder.is_some()
    }

    pub fn toggle_controller(&self) -> &ToggleController {
        &self.toggle
    }

    pub fn handle(&mut self, event: PageEvent) {
        let (cmd, context) = match event {
            PageEvent::DragEnd(drag) => {
                let (Some(reorder), Some(list)) = (&self.reorder, self.document.worker_list())
                else {
                    return;
                };
                (reorder.on_drag_end(list, drag), UiErrorContext::Reorder)
            }
            PageEvent::ToggleClicked { worker_id } => {
                let Some(cmd) = self.toggle.on_click(self.document.worker_list(), worker_id)
                else {
                    return;
                };
                (cmd, UiErrorContext::Toggle { worker_id })
            }
        };

        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.apply(UiEvent::Error(UiError::transport(context, err.to_string())));
        }
    }

    /// Applies every settled result that is already waiting. Returns how
    /// many were applied.
    pub fn process_ui_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Blocks up to `timeout` for the next settled result, then drains any
    /// others that arrived with it.
    pub fn wait_for_events(&mut self, timeout: Duration) -> usize {
        match self.ui_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                1 + self.process_ui_events()
            }
            Err(RecvTimeoutError::Timeout) => 0,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("backend worker is gone; no further results will arrive");
                0
            }
        }
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::OrderSaved { order } => {
                if let Some(reorder) = &self.reorder {
                    reorder.on_saved(&order);
                }
            }
            UiEvent::ToggleSettled { worker_id, is_off } => {
                self.toggle.on_settled(
                    self.document.worker_list_mut(),
                    worker_id,
                    is_off,
                    self.locale,
                );
            }
            UiEvent::Error(err) => match err.context() {
                UiErrorContext::Reorder => match &self.reorder {
                    Some(reorder) => reorder.on_failed(&err, self.locale, &mut self.alerter),
                    None => err.surface(self.locale.reorder_failed(), self.locale, &mut self.alerter),
                },
                UiErrorContext::Toggle { .. } => {
                    self.toggle.on_failed(&err, self.locale, &mut self.alerter)
                }
                UiErrorContext::BackendStartup => {
                    err.surface(self.locale.transport_failed(), self.locale, &mut self.alerter)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
