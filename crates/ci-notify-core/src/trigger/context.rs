//! Run-wide identifiers supplied by the pipeline host.

use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Identifiers describing the current workflow run.
///
/// Read once from the environment and passed explicitly to the formatter,
/// so formatting never touches process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunContext {
    pub event_name: String,
    pub git_ref: String,
    pub job: String,
    pub workflow: String,
    pub server_url: String,
    pub repository: String,
    pub run_id: String,
    /// Location of the JSON event payload.
    pub event_path: Option<PathBuf>,
}

impl RunContext {
    /// Read the run context from the `GITHUB_*` variables.
    ///
    /// Gitea runners export the same names. Missing variables become empty
    /// strings; the server URL defaults to `https://github.com`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let server_url = std::env::var("GITHUB_SERVER_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Self {
            event_name: var("GITHUB_EVENT_NAME"),
            git_ref: var("GITHUB_REF"),
            job: var("GITHUB_JOB"),
            workflow: var("GITHUB_WORKFLOW"),
            server_url,
            repository: var("GITHUB_REPOSITORY"),
            run_id: var("GITHUB_RUN_ID"),
            event_path: std::env::var_os("GITHUB_EVENT_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Web URL of the repository on the server.
    pub fn repository_url(&self) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), self.repository)
    }

    /// Web URL of this workflow run.
    pub fn run_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repository_url(), self.run_id)
    }
}
