// API key resolution for the generation gateway
//
// Lookup order:
// - `API_KEY` process environment variable
// - `ai_api_key` entry in the settings store (set from the UI)
//
// A missing key fails the submission before any network attempt.

use crate::db::KeyValueStore;
use crate::error::{AppError, Result};
use tracing::{debug, info};

pub const API_KEY_ENV: &str = "API_KEY";
pub const API_KEY_SETTING: &str = "ai_api_key";

pub struct CredentialManager;

impl CredentialManager {
    /// Resolve the key to use for the next request.
    pub fn resolve_api_key<S: KeyValueStore + ?Sized>(store: &S) -> Result<String> {
        Self::resolve_with(std::env::var(API_KEY_ENV).ok(), store)
    }

    /// Resolve with an explicit environment value instead of reading the process env.
    pub(crate) fn resolve_with<S: KeyValueStore + ?Sized>(env_value: Option<String>, store: &S) -> Result<String> {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            debug!(source = "env", "Using API key");
            return Ok(key);
        }

        match store.get(API_KEY_SETTING)? {
            Some(key) if !key.trim().is_empty() => {
                debug!(source = "settings", "Using API key");
                Ok(key)
            }
            _ => Err(AppError::MissingApiKey),
        }
    }

    /// Store an API key in the settings store.
    pub fn store_api_key<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidApiKey);
        }
        store.set(API_KEY_SETTING, key)?;
        info!(key_len = key.len(), "API key stored in settings");
        Ok(())
    }

    /// Whether a key is available from either source.
    pub fn has_api_key<S: KeyValueStore + ?Sized>(store: &S) -> Result<bool> {
        match Self::resolve_api_key(store) {
            Ok(_) => Ok(true),
            Err(AppError::MissingApiKey) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Remove the stored key. The environment variable is left alone.
    pub fn delete_api_key<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
        store.remove(API_KEY_SETTING)?;
        info!("API key removed from settings");
        Ok(())
    }
}
