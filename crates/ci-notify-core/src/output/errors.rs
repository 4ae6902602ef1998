use crate::errors::CiNotifyError;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Output '{name}' contains the reserved delimiter")]
    DelimiterCollision { name: String },

    #[error("IO error writing output: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CiNotifyError for OutputError {
    fn error_code(&self) -> &'static str {
        match self {
            OutputError::DelimiterCollision { .. } => "OUTPUT_DELIMITER_COLLISION",
            OutputError::IoError { .. } => "OUTPUT_IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let error = OutputError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("IO error"));
        assert_eq!(error.error_code(), "OUTPUT_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
