
use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp directory and a config path inside it, with COLL_* overrides cleared
pub(crate) fn setup_config_path() -> (TempDir, PathBuf, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("coll_server.cfg.json");
    let guards = vec![
        EnvGuard::remove("COLL_SERVER_ADDRESS"),
        EnvGuard::remove("COLL_LOG_LEVEL"),
        EnvGuard::remove("COLL_LOG_COLORED"),
        EnvGuard::remove("COLL_LOG_FILE"),
    ];
    (temp, path, guards)
}
