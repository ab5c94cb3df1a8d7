use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADDRESS, StorageConfig};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServerConfig {
    /// host:port to bind. An empty host (":8080") binds all interfaces.
    #[serde(alias = "address")]
    pub address: String,
    #[serde(alias = "storage")]
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: String::from(DEFAULT_ADDRESS),
            storage: StorageConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some((_, port)) = self.address.rsplit_once(':') else {
            return Err(ConfigError::server(format!(
                "server.address must be host:port, got '{}'",
                self.address
            )));
        };

        port.parse::<u16>().map_err(|_| {
            ConfigError::server(format!(
                "server.address has an invalid port, got '{}'",
                self.address
            ))
        })?;

        self.storage.validate()
    }

    /// Address in a form the socket layer accepts.
    pub fn bind_addr(&self) -> String {
        if self.address.starts_with(':') {
            format!("0.0.0.0{}", self.address)
        } else {
            self.address.clone()
        }
    }
}
