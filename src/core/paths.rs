//! Data-directory resolution.

use std::path::PathBuf;

use crate::DATA_DIR_ENV_VAR;

/// Resolve the data directory: explicit flag, then the
/// `UNDERSTAT_XG_DATA_DIR` env var, then `<platform data dir>/understat-xg`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("understat-xg")
}
