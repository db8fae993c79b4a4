//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::store::Credentials;

/// Server and store settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Storage file (from FOLIO_DB_PATH). `None` means the platform data dir.
    pub db_path: Option<PathBuf>,
    /// Admin username/password (from FOLIO_ADMIN_USERNAME / FOLIO_ADMIN_PASSWORD)
    pub credentials: Credentials,
    /// Pause before saving personal info (from FOLIO_SAVE_DELAY_MS)
    pub save_delay: Duration,
    /// Allowed CORS origins (from FOLIO_CORS_ORIGINS, comma-separated).
    /// `None` allows no cross-origin callers.
    pub cors_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Self {
        let db_path = std::env::var("FOLIO_DB_PATH").ok().map(PathBuf::from);

        let defaults = Credentials::default();
        let credentials = Credentials::new(
            std::env::var("FOLIO_ADMIN_USERNAME").unwrap_or(defaults.username),
            std::env::var("FOLIO_ADMIN_PASSWORD").unwrap_or(defaults.password),
        );

        let save_delay = std::env::var("FOLIO_SAVE_DELAY_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SAVE_DELAY);

        let cors_origins = std::env::var("FOLIO_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect());

        Self {
            db_path,
            credentials,
            save_delay,
            cors_origins,
        }
    }

    /// Defaults without the save delay, for tests.
    pub fn for_tests() -> Self {
        Self {
            save_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            credentials: Credentials::default(),
            save_delay: DEFAULT_SAVE_DELAY,
            cors_origins: None,
        }
    }
}
