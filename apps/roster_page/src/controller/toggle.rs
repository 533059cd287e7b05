//! Off-duty toggle handling for individual worker rows.

use std::collections::HashSet;

use shared::domain::{DutyState, WorkerId};
use tracing::{debug, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiError;
use crate::ui::{Alerter, Document, Locale, WorkerList};

#[derive(Debug)]
pub struct ToggleController {
    attached: HashSet<WorkerId>,
}

impl ToggleController {
    /// Attaches to every toggle control present in the document right now.
    pub fn attach(document: &Document) -> Self {
        let attached: HashSet<WorkerId> = document
            .worker_list()
            .map(|list| {
                list.items()
                    .iter()
                    .map(|item| item.toggle().worker_id())
                    .collect()
            })
            .unwrap_or_default();
        debug!(controls = attached.len(), "toggle controller attached");
        Self { attached }
    }

    pub fn is_attached(&self, worker_id: WorkerId) -> bool {
        self.attached.contains(&worker_id)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Builds the request for a click on `worker_id`'s control. The candidate
    /// state only goes into the request; the row is not touched until the
    /// backend answers.
    pub fn on_click(&self, list: Option<&WorkerList>, worker_id: WorkerId) -> Option<BackendCommand> {
        if !self.is_attached(worker_id) {
            debug!(%worker_id, "click on unattached toggle control ignored");
            return None;
        }
        let Some(item) = list.and_then(|list| list.item(worker_id)) else {
            warn!(%worker_id, "toggle control no longer in the worker list");
            return None;
        };

        let candidate = item.duty_state().flipped();
        debug!(%worker_id, ?candidate, "requesting off-duty change");
        Some(BackendCommand::ToggleOffDuty {
            worker_id,
            desired_is_off: candidate.is_off(),
        })
    }

    /// Applies the backend's authoritative state to exactly one row.
    /// Responses are applied in the order they settle, so the last one to
    /// arrive decides what the row shows.
    pub fn on_settled(
        &self,
        list: Option<&mut WorkerList>,
        worker_id: WorkerId,
        is_off: bool,
        locale: Locale,
    ) -> bool {
        let Some(item) = list.and_then(|list| list.item_mut(worker_id)) else {
            warn!(%worker_id, is_off, "toggle settled for a worker that is no longer listed");
            return false;
        };
        let state = DutyState::from_is_off(is_off);
        item.apply_duty_state(state, locale);
        info!(%worker_id, ?state, "off-duty state updated");
        true
    }

    pub fn on_failed(&self, error: &UiError, locale: Locale, alerter: &mut dyn Alerter) {
        error.surface(locale.toggle_failed(), locale, alerter);
    }
}

#[cfg(test)]
#[path = "tests/toggle_tests.rs"]
mod tests;
