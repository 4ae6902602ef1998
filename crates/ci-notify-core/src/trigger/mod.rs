//! Triggering events and the run context they arrive with.

pub mod context;
pub mod errors;
pub mod loader;
pub mod types;

pub use context::RunContext;
pub use errors::EventError;
pub use loader::load_event;
pub use types::{Event, EventKind};
