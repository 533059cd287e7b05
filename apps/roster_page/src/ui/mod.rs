//! UI layer: page document view-model, localized text and operator alerts.

pub mod alert;
pub mod document;
pub mod locale;

pub use alert::{Alerter, LogAlerter};
pub use document::{Document, DocumentError, ToggleButton, WorkerItem, WorkerList};
pub use locale::Locale;
