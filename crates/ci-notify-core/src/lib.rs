//! ci-notify-core: CI event notifications for push-notification services
//!
//! Turns the event that triggered a pipeline run into a human-readable
//! message with action buttons and posts it to a notification endpoint.
//!
//! # Main Entry Points
//!
//! - [`notify_ops`] - Run a complete notification (resolve, format, send)
//! - [`format`] - Event-to-message formatting
//! - [`dispatch`] - Request assembly and delivery
//! - [`trigger`] - Event payloads and run context
//! - [`output`] - Step outputs and failure signaling

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod format;
pub mod logging;
pub mod notify;
pub mod output;
pub mod trigger;

// Re-export config types from ci-notify-config
pub use ci_notify_config::{
    Auth, ConfigError, EnvInputs, InputStore, MapInputs, NotifyConfig, ServerKind,
};

pub use dispatch::{DeliveryResult, DispatchError, Dispatcher, OutboundRequest};
pub use format::{ActionButton, NotificationMessage, format_message};
pub use notify::{RunError, RunMode, RunOutcome, RunStage};
pub use trigger::{Event, EventError, EventKind, RunContext};

// Re-export handler modules as the primary API
pub use notify::handler as notify_ops;

// Re-export logging initialization
pub use logging::{LogLevel, init_logging};
