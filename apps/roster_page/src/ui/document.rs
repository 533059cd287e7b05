//! View-model of the worker roster page: the list container, its rows and
//! each row's off-duty toggle control.

use std::collections::BTreeSet;

use shared::domain::{DutyState, WorkerId, WorkerSummary};
use thiserror::Error;

use crate::ui::locale::Locale;

pub const WORKER_LIST_ID: &str = "worker-list";
pub const WORKER_ITEM_CLASS: &str = "worker-item";
pub const OFF_DUTY_CLASS: &str = "off-duty";
pub const TOGGLE_BUTTON_CLASS: &str = "toggle-off-btn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("position {index} is outside a list of {len} workers")]
    OutOfBounds { index: usize, len: usize },
    #[error("worker {0} appears more than once in the list")]
    DuplicateWorker(WorkerId),
}

/// The page root handed to `initialize`. A page without a worker list is
/// valid; it just has nothing for the controllers to attach to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    worker_list: Option<WorkerList>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_list(worker_list: WorkerList) -> Self {
        Self {
            worker_list: Some(worker_list),
        }
    }

    pub fn render(workers: &[WorkerSummary], locale: Locale) -> Result<Self, DocumentError> {
        Ok(Self::with_worker_list(WorkerList::render(workers, locale)?))
    }

    pub fn worker_list(&self) -> Option<&WorkerList> {
        self.worker_list.as_ref()
    }

    pub fn worker_list_mut(&mut self) -> Option<&mut WorkerList> {
        self.worker_list.as_mut()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerList {
    items: Vec<WorkerItem>,
}

impl WorkerList {
    pub fn render(workers: &[WorkerSummary], locale: Locale) -> Result<Self, DocumentError> {
        let mut seen = BTreeSet::new();
        let mut items = Vec::with_capacity(workers.len());
        for worker in workers {
            if !seen.insert(worker.id) {
                return Err(DocumentError::DuplicateWorker(worker.id));
            }
            items.push(WorkerItem::render(worker, locale));
        }
        Ok(Self { items })
    }

    pub fn id(&self) -> &'static str {
        WORKER_LIST_ID
    }

    pub fn items(&self) -> &[WorkerItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Worker ids in current display order.
    pub fn worker_ids(&self) -> Vec<WorkerId> {
        self.items.iter().map(WorkerItem::id).collect()
    }

    pub fn item(&self, worker_id: WorkerId) -> Option<&WorkerItem> {
        self.items.iter().find(|item| item.id == worker_id)
    }

    pub fn item_mut(&mut self, worker_id: WorkerId) -> Option<&mut WorkerItem> {
        self.items.iter_mut().find(|item| item.id == worker_id)
    }

    /// Moves the row at `from` so that it ends up at position `to`, the way
    /// a sortable list does when an item is dropped.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), DocumentError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(DocumentError::OutOfBounds { index, len });
            }
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerItem {
    id: WorkerId,
    name: String,
    classes: BTreeSet<String>,
    toggle: ToggleButton,
}

impl WorkerItem {
    fn render(worker: &WorkerSummary, locale: Locale) -> Self {
        let mut item = Self {
            id: worker.id,
            name: worker.name.clone(),
            classes: BTreeSet::from([WORKER_ITEM_CLASS.to_string()]),
            toggle: ToggleButton {
                worker_id: worker.id,
                label: String::new(),
                is_off: false,
            },
        };
        item.apply_duty_state(worker.duty_state(), locale);
        item
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn toggle(&self) -> &ToggleButton {
        &self.toggle
    }

    pub fn duty_state(&self) -> DutyState {
        DutyState::from_is_off(self.toggle.is_off)
    }

    /// Brings the row class, control label and cached flag in line with `state`.
    pub fn apply_duty_state(&mut self, state: DutyState, locale: Locale) {
        match state {
            DutyState::OffDuty => {
                self.classes.insert(OFF_DUTY_CLASS.to_string());
            }
            DutyState::OnDuty => {
                self.classes.remove(OFF_DUTY_CLASS);
            }
        }
        self.toggle.label = locale.toggle_label(state).to_string();
        self.toggle.is_off = state.is_off();
    }
}

/// The per-row control. `is_off` is the cached off-duty flag the next click
/// derives its candidate from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    worker_id: WorkerId,
    label: String,
    is_off: bool,
}

impl ToggleButton {
    pub fn class(&self) -> &'static str {
        TOGGLE_BUTTON_CLASS
    }

    pub fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_off(&self) -> bool {
        self.is_off
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
