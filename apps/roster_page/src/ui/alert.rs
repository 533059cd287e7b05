//! Blocking operator notifications.

/// Shows a message the operator has to acknowledge. Hosts decide how: a
/// modal dialog, a line on stderr, or a recorded list in tests.
pub trait Alerter {
    fn alert(&mut self, message: &str);
}

impl Alerter for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Alerter that only logs; for hosts without a visible surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlerter;

impl Alerter for LogAlerter {
    fn alert(&mut self, message: &str) {
        tracing::warn!(alert = message, "operator alert");
    }
}
