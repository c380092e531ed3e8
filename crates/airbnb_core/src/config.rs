//! Compiled-in run configuration.
//!
//! # Responsibility
//! - Hold the fixed store path, seed record and logging defaults.
//! - Resolve relative paths against the working directory.
//!
//! # Invariants
//! - Nothing here reads files or environment variables.

use crate::logging::default_log_level;
use crate::model::user::NewUser;
use std::io;
use std::path::{Path, PathBuf};

/// Store file used by the CLI, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "air_bnb_database.db";
/// Rolling log directory used by the CLI, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const SEED_USER_NAME: &str = "John Doe";
pub const SEED_USER_EMAIL: &str = "mosaproject1@gmail.com";

/// Settings for one seed-and-report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub seed_user: NewUser,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            seed_user: NewUser::new(SEED_USER_NAME, SEED_USER_EMAIL),
            log_level: default_log_level(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl AppConfig {
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_seed_user(mut self, seed_user: NewUser) -> Self {
        self.seed_user = seed_user;
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Absolute log directory, as required by `init_logging`.
    pub fn resolved_log_dir(&self) -> io::Result<PathBuf> {
        absolutize(&self.log_dir)
    }
}

fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_DB_PATH, SEED_USER_EMAIL, SEED_USER_NAME};
    use crate::model::user::NewUser;
    use std::path::Path;

    #[test]
    fn defaults_point_at_fixed_store_and_seed_user() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, Path::new(DEFAULT_DB_PATH));
        assert_eq!(config.seed_user, NewUser::new(SEED_USER_NAME, SEED_USER_EMAIL));
        assert_eq!(config.db_path, Path::new("air_bnb_database.db"));
    }

    #[test]
    fn relative_log_dir_resolves_to_absolute() {
        let config = AppConfig::default().with_log_dir("logs/dev");
        let resolved = config.resolved_log_dir().expect("cwd should be readable");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("logs/dev"));
    }

    #[test]
    fn absolute_log_dir_is_kept() {
        let dir = std::env::temp_dir().join("air-bnb-logs");
        let config = AppConfig::default().with_log_dir(dir.clone());
        assert_eq!(config.resolved_log_dir().unwrap(), dir);
    }
}
