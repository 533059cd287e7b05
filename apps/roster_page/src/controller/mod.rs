//! Controller layer: UI events, the reorder and toggle handlers, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reorder;
pub mod toggle;

pub use events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};
pub use orchestration::{dispatch_backend_command, DispatchError};
pub use reorder::{DragEnd, ReorderController};
pub use toggle::ToggleController;
