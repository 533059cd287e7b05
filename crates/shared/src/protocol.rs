use serde::{Deserialize, Serialize};

use crate::domain::WorkerId;

/// Common shape of every roster endpoint response: a success flag and, on
/// failure, a human-readable message.
pub trait Envelope {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWorkerOrderRequest {
    pub order: Vec<WorkerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOffRequest {
    pub is_off: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl Envelope for AckResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOffResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_off: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ToggleOffResponse {
    pub fn ok(is_off: bool) -> Self {
        Self {
            success: true,
            is_off: Some(is_off),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            is_off: None,
            message: Some(message.into()),
        }
    }
}

impl Envelope for ToggleOffResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_matches_wire_shape() {
        let request = UpdateWorkerOrderRequest {
            order: vec![WorkerId(7), WorkerId(3), WorkerId(9)],
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            serde_json::json!({ "order": [7, 3, 9] })
        );
    }

    #[test]
    fn failure_response_without_is_off_still_parses() {
        let response: ToggleOffResponse =
            serde_json::from_str(r#"{"success":false,"message":"bad is_off"}"#)
                .expect("deserialize");
        assert!(!response.success());
        assert_eq!(response.is_off, None);
        assert_eq!(response.message(), Some("bad is_off"));
    }

    #[test]
    fn ack_without_message_is_success() {
        let response: AckResponse = serde_json::from_str(r#"{"success":true}"#).expect("ack");
        assert_eq!(response, AckResponse::ok());
    }
}
