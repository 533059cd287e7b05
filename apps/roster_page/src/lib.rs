//! Roster page controller: drag-reorder and off-duty toggle handling for the
//! worker list, synchronized with the scheduling backend.

pub mod backend_bridge;
pub mod controller;
pub mod page;
pub mod ui;

pub use controller::{DragEnd, UiError, UiErrorCategory, UiErrorContext, UiEvent};
pub use page::{initialize, PageEvent, RosterPage};
pub use ui::{Alerter, Document, Locale, LogAlerter};
