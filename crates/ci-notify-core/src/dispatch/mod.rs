//! Notification delivery.
//!
//! [`request`] assembles the POST from configuration and a formatted
//! message; [`Dispatcher`] sends it and interprets the response.

pub mod client;
pub mod errors;
pub mod request;
pub mod types;

pub use client::Dispatcher;
pub use errors::DispatchError;
pub use request::{CLIENT_ID, build_request, compose_body};
pub use types::{DeliveryResult, NotificationPayload, OutboundRequest, SUCCESS_STATUS};
