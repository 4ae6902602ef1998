//! End-to-end notification runs.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::RunError;
pub use handler::{run, run_with};
pub use types::{RunMode, RunOutcome, RunStage};
