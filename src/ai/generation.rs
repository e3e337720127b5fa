// Lyric generation pipeline: prompt -> remote model -> parsed result

use super::gemini_client::TextGenerator;
use super::prompt_builder::build_prompt;
use super::response_parser::parse_response;
use crate::error::{AppError, Result};
use crate::song::{GenerationResult, SongConfig};
use tracing::{error, info};

/// Run one generation against `generator`.
///
/// Transport and remote failures are logged with their detail and surface to
/// the caller only as `AppError::GenerationFailed`. Badly formatted output is
/// not an error; the parser absorbs it.
pub async fn generate_lyrics<G: TextGenerator + ?Sized>(
    generator: &G,
    config: &SongConfig,
) -> Result<GenerationResult> {
    let prompt = build_prompt(config);

    info!(
        provider = generator.name(),
        model = generator.model(),
        title = config.title_or_placeholder(),
        "Generating lyrics"
    );

    let raw = generator.generate(&prompt).await.map_err(|e| {
        error!(error = %e, provider = generator.name(), "Error generating lyrics");
        AppError::GenerationFailed
    })?;

    Ok(parse_response(&raw))
}
