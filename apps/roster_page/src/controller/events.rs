//! Backend-to-UI events and error modeling for the roster page controller.

use client_core::ClientError;
use shared::domain::WorkerId;

use crate::ui::{Alerter, Locale};

/// A settled backend call, delivered to the UI thread in settle order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OrderSaved { order: Vec<WorkerId> },
    ToggleSettled { worker_id: WorkerId, is_off: bool },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    /// The backend answered and reported failure.
    Backend,
    /// Network, status, decoding or queueing failure.
    Transport,
    Startup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Reorder,
    Toggle { worker_id: WorkerId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        match err.backend_message() {
            Some(message) => Self {
                category: UiErrorCategory::Backend,
                context,
                message: message.to_string(),
            },
            None => Self {
                category: UiErrorCategory::Transport,
                context,
                message: err.to_string(),
            },
        }
    }

    pub fn transport(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Transport,
            context,
            message: message.into(),
        }
    }

    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Startup,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
        }
    }

    /// Alert text for this failure: the backend's own message under a
    /// localized prefix, or the generic transport message.
    pub fn alert_text(&self, prefix: &str, locale: Locale) -> String {
        match self.category {
            UiErrorCategory::Backend if self.message.is_empty() => prefix.to_string(),
            UiErrorCategory::Backend => format!("{prefix}\n{}", self.message),
            UiErrorCategory::Transport | UiErrorCategory::Startup => {
                locale.transport_failed().to_string()
            }
        }
    }

    /// Logs the failure and raises the blocking alert for it.
    pub fn surface(&self, prefix: &str, locale: Locale, alerter: &mut dyn Alerter) {
        match self.category {
            UiErrorCategory::Backend => {
                tracing::error!(context = ?self.context, "backend reported failure: {}", self.message)
            }
            UiErrorCategory::Transport | UiErrorCategory::Startup => {
                tracing::error!(context = ?self.context, "backend call failed: {}", self.message)
            }
        }
        alerter.alert(&self.alert_text(prefix, locale));
    }

    pub fn is_backend_reported(&self) -> bool {
        self.category == UiErrorCategory::Backend
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
