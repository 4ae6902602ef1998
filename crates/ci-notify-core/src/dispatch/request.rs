//! Outbound request assembly.
//!
//! Pure: turns configuration plus a formatted message into the exact
//! headers and JSON body that will be posted.

use ci_notify_config::NotifyConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::errors::DispatchError;
use super::types::{NotificationPayload, OutboundRequest};
use crate::format::NotificationMessage;

/// Fixed client identifier sent with every request.
pub const CLIENT_ID: &str = concat!("ci-notify/", env!("CARGO_PKG_VERSION"));

/// Message body followed by a blank line and the `details` input.
///
/// The separator is always present, even when `details` is empty.
pub fn compose_body(message: &NotificationMessage, details: &str) -> String {
    format!("{}\n\n{}", message.body, details)
}

/// Build the headers for a delivery.
///
/// Order of precedence, lowest first: fixed `Content-Type` and
/// `User-Agent`, the authorization header (token over basic), then the
/// user's header overrides. Names compare case-insensitively.
pub fn build_headers(config: &NotifyConfig) -> Result<HeaderMap, DispatchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_ID));

    if let Some(auth) = config.auth() {
        let mut value = HeaderValue::from_str(&auth.header_value()).map_err(|e| {
            DispatchError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
                message: e.to_string(),
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| DispatchError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| DispatchError::InvalidHeader {
            name: name.clone(),
            message: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// JSON payload for a delivery.
pub fn build_payload(config: &NotifyConfig, message: &NotificationMessage) -> NotificationPayload {
    NotificationPayload {
        topic: config.topic.clone(),
        message: compose_body(message, &config.details),
        title: config.title.clone(),
        tags: config.tags.clone(),
        priority: config.priority,
        actions: message.actions.clone(),
    }
}

/// Assemble the complete POST for `message`.
pub fn build_request(
    config: &NotifyConfig,
    message: &NotificationMessage,
) -> Result<OutboundRequest, DispatchError> {
    let headers = build_headers(config)?;
    let payload = build_payload(config, message);
    let body = serde_json::to_string(&payload)?;

    Ok(OutboundRequest {
        url: config.url.clone(),
        headers,
        payload,
        body,
    })
}
