//! Host output and failure signaling.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` using the multi-line
//! `name<<DELIMITER` form; failures are reported with the `::error::`
//! workflow command. Gitea runners accept the same protocol.

pub mod errors;

pub use errors::OutputError;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

/// Environment variable naming the output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Output key carrying the delivery status.
pub const RESPONSE_OUTPUT: &str = "response";

/// Publish a step output.
///
/// Appends to the `GITHUB_OUTPUT` file when the runner provides one,
/// otherwise prints `name=value` to stdout.
pub fn set_output(name: &str, value: &str) -> Result<(), OutputError> {
    match std::env::var_os(OUTPUT_FILE_VAR).filter(|path| !path.is_empty()) {
        Some(path) => append_output(Path::new(&path), name, value),
        None => {
            println!("{}={}", name, value);
            Ok(())
        }
    }
}

/// Append one output entry to `path`.
pub fn append_output(path: &Path, name: &str, value: &str) -> Result<(), OutputError> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(OutputError::DelimiterCollision {
            name: name.to_string(),
        });
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)?;

    debug!(
        event = "core.output.set",
        name = name,
        path = %path.display()
    );
    Ok(())
}

/// Escape a message for a workflow command.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` workflow command for `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Mark the step as failed. The caller still exits non-zero.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}
