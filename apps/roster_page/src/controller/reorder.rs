//! Drag-reorder handling for the worker list.

use shared::domain::WorkerId;
use tracing::{debug, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiError;
use crate::ui::{Alerter, Document, Locale, WorkerList};

/// End-of-gesture signal from the sortable list. By the time it fires the
/// list already shows the new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub old_index: usize,
    pub new_index: usize,
}

#[derive(Debug)]
pub struct ReorderController {
    _attached: (),
}

impl ReorderController {
    /// Attaches to the document's worker list. Pages without one get no
    /// controller.
    pub fn attach(document: &Document) -> Option<Self> {
        let list = document.worker_list()?;
        debug!(container = list.id(), workers = list.len(), "reorder controller attached");
        Some(Self { _attached: () })
    }

    /// Builds the order submission from the list as it is now. The full
    /// order is always sent, so repeating a submission is harmless.
    pub fn on_drag_end(&self, list: &WorkerList, drag: DragEnd) -> BackendCommand {
        let order = list.worker_ids();
        info!(
            old_index = drag.old_index,
            new_index = drag.new_index,
            ?order,
            "new worker order"
        );
        BackendCommand::UpdateWorkerOrder { order }
    }

    pub fn on_saved(&self, order: &[WorkerId]) {
        info!(workers = order.len(), "worker order updated");
    }

    /// The list keeps the order the operator produced; it is not rolled back.
    pub fn on_failed(&self, error: &UiError, locale: Locale, alerter: &mut dyn Alerter) {
        error.surface(locale.reorder_failed(), locale, alerter);
    }
}

#[cfg(test)]
#[path = "tests/reorder_tests.rs"]
mod tests;
