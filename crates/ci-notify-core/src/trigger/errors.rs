use crate::errors::CiNotifyError;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("No event payload available: {message}")]
    PayloadUnavailable { message: String },

    #[error("Malformed '{kind}' event payload: {message}")]
    MalformedPayload { kind: String, message: String },

    #[error("IO error reading event payload: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CiNotifyError for EventError {
    fn error_code(&self) -> &'static str {
        match self {
            EventError::PayloadUnavailable { .. } => "EVENT_PAYLOAD_UNAVAILABLE",
            EventError::MalformedPayload { .. } => "EVENT_MALFORMED_PAYLOAD",
            EventError::IoError { .. } => "EVENT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, EventError::PayloadUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_payload() {
        let error = EventError::MalformedPayload {
            kind: "push".to_string(),
            message: "missing field `head_commit`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed 'push' event payload: missing field `head_commit`"
        );
        assert_eq!(error.error_code(), "EVENT_MALFORMED_PAYLOAD");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_payload_unavailable() {
        let error = EventError::PayloadUnavailable {
            message: "GITHUB_EVENT_PATH is not set".to_string(),
        };
        assert_eq!(error.error_code(), "EVENT_PAYLOAD_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error() {
        let error = EventError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("IO error"));
        assert_eq!(error.error_code(), "EVENT_IO_ERROR");
    }
}
