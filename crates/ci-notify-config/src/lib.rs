//! # ci-notify-config
//!
//! Action input resolution for ci-notify: reads the flat string inputs the
//! pipeline host provides, coerces them to typed values with documented
//! defaults, and validates the result.

mod loading;
mod validation;

pub mod coercion;
pub mod errors;
pub mod inputs;
pub mod types;

// Public API re-exports
pub use coercion::{Coerced, parse_with_default};
pub use errors::ConfigError;
pub use inputs::{EnvInputs, InputStore, MapInputs};
pub use loading::resolve;
pub use types::{Auth, DEFAULT_PRIORITY, DEFAULT_TITLE, NotifyConfig, ServerKind};
pub use validation::validate_config;

impl NotifyConfig {
    /// Resolve configuration from a host input store.
    ///
    /// See [`loading::resolve`] for details.
    pub fn resolve(inputs: &dyn InputStore) -> Result<Self, ConfigError> {
        loading::resolve(inputs)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
