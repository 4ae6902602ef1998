//! Triggering event model.
//!
//! Only the payload fields the formatter reads are modelled. Fields whose
//! name differs between GitHub and Gitea are optional; everything else is
//! required and a payload lacking it is rejected as malformed.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::errors::EventError;

/// Classification of the triggering event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    Release,
    Schedule,
    /// Any other event name, kept verbatim.
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "push" => Self::Push,
            "release" => Self::Release,
            "schedule" => Self::Schedule,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::Release => "release",
            Self::Schedule => "schedule",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
}

/// Author or committer of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadCommit {
    pub id: String,
    pub url: String,
    pub message: String,
    pub author: Identity,
    pub committer: Identity,
}

/// Pusher object. GitHub sends `name`, Gitea sends a user with `full_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pusher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushEvent {
    pub head_commit: HeadCommit,
    pub repository: Repository,
    pub pusher: Pusher,
    /// Diff URL on GitHub.
    #[serde(default)]
    pub compare: Option<String>,
    /// Diff URL on Gitea.
    #[serde(default)]
    pub compare_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAuthor {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub html_url: String,
    #[serde(default)]
    pub tarball_url: Option<String>,
    #[serde(default)]
    pub zipball_url: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub prerelease: bool,
    pub author: ReleaseAuthor,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseEvent {
    /// Verb applied to the release (`published`, `edited`, ...).
    pub action: String,
    pub release: Release,
    pub repository: Repository,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleEvent {
    /// Cron expression that fired.
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OtherEvent {
    pub repository: Repository,
}

/// A parsed triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Push(PushEvent),
    Release(ReleaseEvent),
    Schedule(ScheduleEvent),
    Other { name: String, payload: OtherEvent },
}

impl Event {
    /// Parse a raw JSON payload according to its event kind.
    ///
    /// # Errors
    ///
    /// Returns `EventError::MalformedPayload` when a field the kind requires
    /// is missing or has the wrong type.
    pub fn from_payload(kind: &EventKind, payload: serde_json::Value) -> Result<Self, EventError> {
        match kind {
            EventKind::Push => parse(kind, payload).map(Event::Push),
            EventKind::Release => parse(kind, payload).map(Event::Release),
            EventKind::Schedule => parse(kind, payload).map(Event::Schedule),
            EventKind::Other(name) => parse(kind, payload).map(|payload| Event::Other {
                name: name.clone(),
                payload,
            }),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Push(_) => EventKind::Push,
            Event::Release(_) => EventKind::Release,
            Event::Schedule(_) => EventKind::Schedule,
            Event::Other { name, .. } => EventKind::Other(name.clone()),
        }
    }
}

fn parse<T: DeserializeOwned>(
    kind: &EventKind,
    payload: serde_json::Value,
) -> Result<T, EventError> {
    serde_json::from_value(payload).map_err(|e| EventError::MalformedPayload {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}
