mod config;
pub mod history;

pub use config::{Config, NotificationsConfig};
pub use history::{History, SessionRecord, TIMESTAMP_FORMAT};

use std::path::PathBuf;

/// Returns `~/.config/forcedoro[-dev]/` based on FORCEDORO_ENV.
///
/// Set FORCEDORO_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FORCEDORO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("forcedoro-dev")
    } else {
        base_dir.join("forcedoro")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
