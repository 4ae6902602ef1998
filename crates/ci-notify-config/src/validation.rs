//! Configuration validation.

use crate::errors::ConfigError;
use crate::types::NotifyConfig;

/// Validate a resolved configuration.
///
/// # Validation Rules
///
/// - `url` must be present and non-empty
/// - `url` must use the `http` or `https` scheme
///
/// # Errors
///
/// Returns `ConfigError::MissingInput` when the endpoint is empty.
/// Returns `ConfigError::InvalidConfiguration` when the scheme is unsupported.
pub fn validate_config(config: &NotifyConfig) -> Result<(), ConfigError> {
    if config.url.is_empty() {
        return Err(ConfigError::MissingInput {
            key: "url".to_string(),
        });
    }

    if !(config.url.starts_with("http://") || config.url.starts_with("https://")) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Endpoint '{}' must start with http:// or https://",
                config.url
            ),
        });
    }

    Ok(())
}
