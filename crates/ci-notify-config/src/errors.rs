#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required input '{key}'")]
    MissingInput { key: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
