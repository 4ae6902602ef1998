//! Wire and result types for notification delivery.

use std::collections::BTreeMap;

use reqwest::header::{AUTHORIZATION, HeaderMap};
use serde::Serialize;

use crate::format::ActionButton;

/// Status code treated as confirmed delivery.
pub const SUCCESS_STATUS: u16 = 200;

/// JSON body posted to the notification service.
///
/// `actions` is omitted entirely when there are none; the service renders
/// a missing key differently from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub topic: String,
    pub message: String,
    pub title: String,
    pub tags: Vec<String>,
    pub priority: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionButton>,
}

/// A fully assembled POST, ready to send.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub payload: NotificationPayload,
    /// Serialized `payload`.
    pub body: String,
}

impl OutboundRequest {
    /// Headers as plain strings with the authorization value masked.
    pub fn redacted_headers(&self) -> BTreeMap<String, String> {
        self.headers
            .iter()
            .map(|(name, value)| {
                let value = if *name == AUTHORIZATION || value.is_sensitive() {
                    "<redacted>".to_string()
                } else {
                    String::from_utf8_lossy(value.as_bytes()).into_owned()
                };
                (name.as_str().to_string(), value)
            })
            .collect()
    }
}

/// Outcome of the single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(skip)]
    pub url: String,
    #[serde(skip)]
    pub topic: String,
}

impl DeliveryResult {
    /// Whether the service answered with the canonical success status.
    pub fn is_confirmed(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }

    /// User-facing confirmation line, only for confirmed deliveries.
    pub fn confirmation(&self) -> Option<String> {
        self.is_confirmed().then(|| {
            format!(
                "Notification delivered to {} (topic: {})",
                self.url, self.topic
            )
        })
    }

    /// Value written to the `response` output: `{"statusCode":N}`.
    pub fn output_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
