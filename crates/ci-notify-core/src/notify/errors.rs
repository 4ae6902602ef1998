use ci_notify_config::ConfigError;

use crate::dispatch::DispatchError;
use crate::errors::CiNotifyError;
use crate::trigger::EventError;

/// Any failure that aborts a notification run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl RunError {
    fn inner(&self) -> &dyn CiNotifyError {
        match self {
            RunError::Config(e) => e,
            RunError::Event(e) => e,
            RunError::Dispatch(e) => e,
        }
    }
}

impl CiNotifyError for RunError {
    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }

    fn is_user_error(&self) -> bool {
        self.inner().is_user_error()
    }
}
