use crate::{
    APP_NAME, CONFIG_DEFAULT_FILE_NAME, ConfigError, ConfigErrorResult, LoggingConfig,
    ServerConfig,
};

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
/// Keys are PascalCase; lowercase spellings are accepted as aliases.
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    #[serde(alias = "server")]
    pub server: ServerConfig,
    #[serde(alias = "logging")]
    pub logging: LoggingConfig,

    #[serde(skip)]
    path: PathBuf,
    #[serde(skip)]
    created: bool,
}

impl Config {
    /// Load config from `path`, or from the default per-user location.
    ///
    /// Loading order:
    /// 1. Resolve the file: explicit path, else `$HOME/.config/coll_server/coll_server.cfg.json`
    /// 2. Create a default file (and its directories) if none exists
    /// 3. Parse the JSON file
    /// 4. Apply COLL_* environment variable overrides
    ///
    /// An existing file is never rewritten. Does NOT validate - call validate() after load().
    pub fn load(path: Option<&Path>) -> ConfigErrorResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let created = Self::create_default_if_missing(&path)?;

        let mut config = Self::load_json(&path)?;
        config.path = path;
        config.created = created;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Default config file location.
    pub fn default_path() -> ConfigErrorResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home
            .join(".config")
            .join(APP_NAME)
            .join(CONFIG_DEFAULT_FILE_NAME))
    }

    /// File this config was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when load() had to write a default file.
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (bind {})",
            self.server.address,
            self.bind_addr()
        );

        let backends: Vec<&str> = self
            .server
            .storage
            .backends
            .keys()
            .map(String::as_str)
            .collect();
        info!("  storage backends: [{}]", backends.join(", "));

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    /// Parse JSON file with detailed error context.
    fn load_json(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write a default config to `path` unless a file is already there.
    /// Returns whether a file was written.
    fn create_default_if_missing(path: &Path) -> ConfigErrorResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let mut contents =
            serde_json::to_string_pretty(&Config::default()).map_err(|e| ConfigError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;
        contents.push('\n');

        // never truncate a file that appeared after the exists() check
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(true)
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("COLL_SERVER_ADDRESS", &mut self.server.address);

        // Logging
        Self::apply_env_parse("COLL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("COLL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("COLL_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
