//! Input resolution.
//!
//! Reads every recognized key from an [`InputStore`], applies coercion and
//! defaults, and validates the result.
//!
//! | key | type | default |
//! |---|---|---|
//! | `debug` | bool | `false` |
//! | `simple_message` | bool | `false` |
//! | `server_type` | `github` / `gitea` | `github` |
//! | `url` | string | required |
//! | `basic_auth`, `token_auth` | string | unset |
//! | `headers` | JSON object | `{}` |
//! | `tags` | comma-separated | empty |
//! | `topic` | string | empty |
//! | `title` | string | `CI Notification` |
//! | `details` | string | empty |
//! | `priority` | integer | `3` |

use tracing::{debug, warn};

use crate::coercion::{
    Coerced, parse_bool, parse_headers, parse_int, parse_with_default, split_tags,
};
use crate::errors::ConfigError;
use crate::inputs::InputStore;
use crate::types::{DEFAULT_PRIORITY, DEFAULT_SERVER_TYPE, DEFAULT_TITLE, NotifyConfig, ServerKind};
use crate::validation::validate_config;

/// Resolve and validate the notification configuration.
///
/// Coercion failures never abort: they fall back to defaults and are logged
/// as `config.input.coercion_failed`. The only errors are a missing or
/// unusable endpoint.
pub fn resolve(inputs: &dyn InputStore) -> Result<NotifyConfig, ConfigError> {
    let raw = |key: &str| inputs.get(key).filter(|value| !value.is_empty());

    let debug_enabled = coerce("debug", raw("debug"), parse_bool, false);
    let simple_message = coerce("simple_message", raw("simple_message"), parse_bool, false);
    let headers = coerce("headers", raw("headers"), parse_headers, Default::default());
    let priority = coerce("priority", raw("priority"), parse_int, DEFAULT_PRIORITY);

    let server_type = raw("server_type").unwrap_or_else(|| DEFAULT_SERVER_TYPE.to_string());

    let config = NotifyConfig {
        debug: debug_enabled,
        simple_message,
        server_kind: ServerKind::from_str_value(&server_type),
        url: raw("url").unwrap_or_default(),
        basic_auth: raw("basic_auth"),
        token_auth: raw("token_auth"),
        headers,
        tags: raw("tags").map(|tags| split_tags(&tags)).unwrap_or_default(),
        topic: raw("topic").unwrap_or_default(),
        title: raw("title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        details: raw("details").unwrap_or_default(),
        priority,
    };

    if config.debug {
        debug!(
            event = "config.resolve.completed",
            config = %config.redacted(),
        );
    }

    validate_config(&config)?;
    Ok(config)
}

fn coerce<T, E, F>(key: &str, raw: Option<String>, parser: F, default: T) -> T
where
    F: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    let Coerced { value, warning } = parse_with_default(raw.as_deref(), parser, default);
    if let Some(warning) = warning {
        warn!(
            event = "config.input.coercion_failed",
            key = key,
            error = %warning,
            "Malformed input, using default"
        );
    }
    value
}
