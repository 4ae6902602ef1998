use std::error::Error;

/// Base trait for all application errors
pub trait CiNotifyError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the error stems from user input rather than the environment
    fn is_user_error(&self) -> bool {
        false
    }
}

impl CiNotifyError for ci_notify_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ci_notify_config::ConfigError::MissingInput { .. } => "CONFIG_MISSING_INPUT",
            ci_notify_config::ConfigError::InvalidConfiguration { .. } => {
                "CONFIG_INVALID_CONFIGURATION"
            }
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
