//! Where fwstamp looks for its configuration.

use std::path::PathBuf;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fwstamp.toml";

/// Path to the fwstamp configuration file.
///
/// Can be overridden via `FWSTAMP_CONFIG`, which build systems use to point
/// at a per-project file.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("FWSTAMP_CONFIG") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    PathBuf::from(CONFIG_FILE_NAME)
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
