//! Resolved configuration types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

pub const DEFAULT_TITLE: &str = "CI Notification";
pub const DEFAULT_PRIORITY: i64 = 3;
pub const DEFAULT_SERVER_TYPE: &str = "github";

/// Hosting platform whose payload field names are used for push events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServerKind {
    #[default]
    GitHub,
    Gitea,
    /// Any other `server_type` value. Platform-specific fields render empty.
    Unrecognized(String),
}

impl ServerKind {
    /// Parse a `server_type` input. Never fails.
    pub fn from_str_value(s: &str) -> Self {
        match s {
            "github" => Self::GitHub,
            "gitea" => Self::Gitea,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => write!(f, "github"),
            Self::Gitea => write!(f, "gitea"),
            Self::Unrecognized(other) => write!(f, "{}", other),
        }
    }
}

/// Serialized as the `server_type` value, same as `Display`.
impl Serialize for ServerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Authorization scheme applied to the outbound request.
///
/// Credentials are pre-encoded by the user and passed through untouched.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    Bearer(String),
    Basic(String),
}

impl Auth {
    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {}", token),
            Self::Basic(credentials) => format!("Basic {}", credentials),
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer",
            Self::Basic(_) => "basic",
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auth({}, <redacted>)", self.scheme())
    }
}

/// Validated notification configuration, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotifyConfig {
    pub debug: bool,
    pub simple_message: bool,
    pub server_kind: ServerKind,
    pub url: String,
    #[serde(skip_serializing)]
    pub basic_auth: Option<String>,
    #[serde(skip_serializing)]
    pub token_auth: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub tags: Vec<String>,
    pub topic: String,
    pub title: String,
    pub details: String,
    pub priority: i64,
}

impl NotifyConfig {
    /// Configuration with defaults for everything but the endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            debug: false,
            simple_message: false,
            server_kind: ServerKind::default(),
            url: url.into(),
            basic_auth: None,
            token_auth: None,
            headers: BTreeMap::new(),
            tags: Vec::new(),
            topic: String::new(),
            title: DEFAULT_TITLE.to_string(),
            details: String::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Authorization to apply. A token takes precedence over basic credentials.
    pub fn auth(&self) -> Option<Auth> {
        if let Some(token) = &self.token_auth {
            return Some(Auth::Bearer(token.clone()));
        }
        self.basic_auth.clone().map(Auth::Basic)
    }

    /// Resolved configuration with credentials masked, for diagnostic logs.
    pub fn redacted(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        if let serde_json::Value::Object(map) = &mut value {
            let mask = |set: bool| {
                if set {
                    serde_json::Value::from("<redacted>")
                } else {
                    serde_json::Value::Null
                }
            };
            map.insert("basic_auth".to_string(), mask(self.basic_auth.is_some()));
            map.insert("token_auth".to_string(), mask(self.token_auth.is_some()));
        }
        value
    }
}
