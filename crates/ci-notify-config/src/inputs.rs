//! Host input stores.
//!
//! The pipeline host hands action inputs over as a flat string key/value
//! store. [`EnvInputs`] reads them the way GitHub and Gitea runners expose
//! them (`INPUT_<KEY>` environment variables); [`MapInputs`] keeps them in
//! memory for tests and embedding.

use std::collections::HashMap;

/// Read-only access to raw, string-typed action inputs.
pub trait InputStore {
    /// Raw value for `key`, or `None` when the host did not provide one.
    fn get(&self, key: &str) -> Option<String>;
}

/// Inputs read from `INPUT_<KEY>` environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl EnvInputs {
    /// Environment variable name the runner uses for an input key.
    ///
    /// Keys are upper-cased and spaces become underscores. Hyphens are kept,
    /// matching what the runner does.
    pub fn variable_name(key: &str) -> String {
        format!("INPUT_{}", key.replace(' ', "_").to_uppercase())
    }
}

impl InputStore for EnvInputs {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(Self::variable_name(key))
            .ok()
            .map(|value| value.trim().to_string())
    }
}

/// In-memory input store.
#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    values: HashMap<String, String>,
}

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl InputStore for MapInputs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapInputs {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut inputs = MapInputs::new();
        for (key, value) in pairs {
            inputs.insert(key, value);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env::with_vars;

    #[test]
    fn test_variable_name_uppercases_key() {
        assert_eq!(EnvInputs::variable_name("url"), "INPUT_URL");
        assert_eq!(
            EnvInputs::variable_name("simple_message"),
            "INPUT_SIMPLE_MESSAGE"
        );
    }

    #[test]
    fn test_variable_name_replaces_spaces_keeps_hyphens() {
        assert_eq!(EnvInputs::variable_name("my input"), "INPUT_MY_INPUT");
        assert_eq!(EnvInputs::variable_name("token-auth"), "INPUT_TOKEN-AUTH");
    }

    #[test]
    fn test_env_inputs_reads_and_trims() {
        with_vars(
            [
                ("INPUT_TOPIC", Some("  builds \n")),
                ("INPUT_TITLE", None::<&str>),
            ],
            || {
                let inputs = EnvInputs;
                assert_eq!(inputs.get("topic"), Some("builds".to_string()));
                assert_eq!(inputs.get("title"), None);
            },
        );
    }

    #[test]
    fn test_map_inputs_from_pairs() {
        let inputs = MapInputs::from([("url", "https://ntfy.sh"), ("topic", "ci")]);
        assert_eq!(inputs.get("url"), Some("https://ntfy.sh".to_string()));
        assert_eq!(inputs.get("topic"), Some("ci".to_string()));
        assert_eq!(inputs.get("tags"), None);
    }
}
