// Runtime configuration from environment variables

use crate::ai::gemini_client::GEMINI_API_URL;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8384;
pub const DEFAULT_DB_PATH: &str = "zexly.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to bind the HTTP server to (`ZEXLY_HOST`)
    pub host: String,
    /// Preferred port (`ZEXLY_PORT`); nearby ports are tried if taken
    pub port: u16,
    /// SQLite file holding settings and history (`ZEXLY_DB_PATH`)
    pub db_path: PathBuf,
    /// Built front end to serve at `/` (`ZEXLY_STATIC_DIR`)
    pub static_dir: Option<PathBuf>,
    /// Gemini endpoint (`GEMINI_BASE_URL`)
    pub gemini_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            static_dir: None,
            gemini_base_url: GEMINI_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let port = match get("ZEXLY_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Invalid ZEXLY_PORT, using default");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        AppConfig {
            host: get("ZEXLY_HOST").unwrap_or(defaults.host),
            port,
            db_path: get("ZEXLY_DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            static_dir: get("ZEXLY_STATIC_DIR").map(PathBuf::from),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
        }
    }
}
