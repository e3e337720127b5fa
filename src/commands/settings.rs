// Settings commands: stored API key management

use super::AppState;
use crate::ai::CredentialManager;
use crate::error::Result;

/// Store the Gemini API key in the settings DB
pub fn set_ai_api_key(state: &AppState, api_key: &str) -> Result<()> {
    CredentialManager::store_api_key(&state.db, api_key)
}

/// Whether a key is available (environment or settings)
pub fn get_ai_api_key_status(state: &AppState) -> Result<bool> {
    CredentialManager::has_api_key(&state.db)
}

/// Delete the stored API key
pub fn delete_ai_api_key(state: &AppState) -> Result<()> {
    CredentialManager::delete_api_key(&state.db)
}
