//! Loading the event payload from the runner's event file.

use std::fs;

use tracing::debug;

use super::context::RunContext;
use super::errors::EventError;
use super::types::{Event, EventKind};

/// Read and parse the triggering event described by `ctx`.
///
/// The event name comes from `ctx.event_name` and the JSON payload from the
/// file at `ctx.event_path`.
///
/// # Errors
///
/// Returns `EventError::PayloadUnavailable` if either is missing,
/// `EventError::IoError` if the file cannot be read, and
/// `EventError::MalformedPayload` if the payload is not valid for its kind.
pub fn load_event(ctx: &RunContext) -> Result<Event, EventError> {
    if ctx.event_name.is_empty() {
        return Err(EventError::PayloadUnavailable {
            message: "GITHUB_EVENT_NAME is not set".to_string(),
        });
    }
    let kind = EventKind::from_name(&ctx.event_name);

    let path = ctx
        .event_path
        .as_ref()
        .ok_or_else(|| EventError::PayloadUnavailable {
            message: "GITHUB_EVENT_PATH is not set".to_string(),
        })?;

    debug!(
        event = "core.trigger.load_started",
        kind = %kind,
        path = %path.display()
    );

    let content = fs::read_to_string(path)?;
    let payload: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| EventError::MalformedPayload {
            kind: kind.to_string(),
            message: format!("'{}' is not valid JSON: {}", path.display(), e),
        })?;

    Event::from_payload(&kind, payload)
}
