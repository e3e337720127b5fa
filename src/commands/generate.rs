// Generation command: credential check, remote call, history append

use super::AppState;
use crate::ai::credentials::API_KEY_ENV;
use crate::ai::{generate_lyrics, CredentialManager, GeminiClient, TextGenerator};
use crate::error::Result;
use crate::song::{GenerationResult, HistoryItem, SongConfig};
use tracing::{error, info};

/// Generate lyrics with the configured Gemini endpoint.
///
/// Only one generation may be outstanding; a second submission gets `Busy`.
pub async fn generate(state: &AppState, config: SongConfig) -> Result<GenerationResult> {
    generate_with_env_key(state, std::env::var(API_KEY_ENV).ok(), config).await
}

async fn generate_with_env_key(
    state: &AppState,
    env_key: Option<String>,
    config: SongConfig,
) -> Result<GenerationResult> {
    let _in_flight = state.begin_generation()?;

    let api_key = CredentialManager::resolve_with(env_key, &state.db)?;
    let client = GeminiClient::with_base_url(api_key, state.gemini_base_url.as_str());

    complete(state, &client, config).await
}

/// Same as [`generate`] with an explicit generator.
pub async fn generate_with<G: TextGenerator + ?Sized>(
    state: &AppState,
    generator: &G,
    config: SongConfig,
) -> Result<GenerationResult> {
    let _in_flight = state.begin_generation()?;
    complete(state, generator, config).await
}

async fn complete<G: TextGenerator + ?Sized>(
    state: &AppState,
    generator: &G,
    config: SongConfig,
) -> Result<GenerationResult> {
    let result = generate_lyrics(generator, &config).await?;

    let item = HistoryItem::new(config, result.clone());
    let id = item.id.clone();
    match state.history.lock()?.append(item) {
        Ok(()) => {
            info!(history_id = %id, lyrics_len = result.lyrics.len(), "Generation stored in history")
        }
        Err(e) => error!(history_id = %id, error = %e, "Failed to store generation in history"),
    }

    Ok(result)
}
