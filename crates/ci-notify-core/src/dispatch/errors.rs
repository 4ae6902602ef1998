use crate::errors::CiNotifyError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    #[error("Failed to serialize notification payload: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CiNotifyError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::InvalidHeader { .. } => "DISPATCH_INVALID_HEADER",
            DispatchError::SerializationError { .. } => "DISPATCH_SERIALIZATION_ERROR",
            DispatchError::RequestFailed { .. } => "DISPATCH_REQUEST_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DispatchError::InvalidHeader { .. })
    }
}
