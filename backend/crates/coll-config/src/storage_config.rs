use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_NAME, DEFAULT_BACKEND_URI};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named storage backends. Carried through to the server untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StorageConfig {
    /// Backend name -> connection URI
    #[serde(alias = "backends")]
    pub backends: BTreeMap<String, String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let mut backends = BTreeMap::new();
        backends.insert(
            String::from(DEFAULT_BACKEND_NAME),
            String::from(DEFAULT_BACKEND_URI),
        );
        Self { backends }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, uri) in &self.backends {
            if name.trim().is_empty() {
                return Err(ConfigError::storage("storage backend name must not be empty"));
            }
            if uri.trim().is_empty() {
                return Err(ConfigError::storage(format!(
                    "storage backend '{name}' has an empty URI"
                )));
            }
        }

        Ok(())
    }
}
