//! Backend commands queued from UI to backend worker.

use shared::domain::WorkerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    UpdateWorkerOrder {
        order: Vec<WorkerId>,
    },
    ToggleOffDuty {
        worker_id: WorkerId,
        desired_is_off: bool,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::UpdateWorkerOrder { .. } => "update_worker_order",
            BackendCommand::ToggleOffDuty { .. } => "toggle_off_duty",
        }
    }
}
