// Response parser for lyric generation output
//
// Model output is free-form text. The parser never fails: when the expected
// marker or labels are missing it fills the result with fallback sentinels so
// the caller always has something to show.

use super::system_prompt::STYLE_ANALYSIS_MARKER;
use crate::song::GenerationResult;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

pub const MISSING_ANALYSIS: &str = "AI failed to generate style analysis. Please try regenerating.";
pub const NOT_GENERATED: &str = "Not generated.";

/// "Title: ...\n\nLyrics:\n" preamble. Dot matches newline and is greedy, so
/// it runs to the last "Lyrics:" label after the first "Title:".
static TITLE_PREAMBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Title:.*\n\nLyrics:\n").expect("valid title regex"));

static GENRE_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Genre & Style:\s*(.*?)(?:\nAvoid Style:|\z)").expect("valid genre regex")
});

static AVOID_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Avoid Style:\s*(.*)").expect("valid avoid regex"));

/// Parse raw model output into lyrics and style analysis.
pub fn parse_response(raw: &str) -> GenerationResult {
    let parts: Vec<&str> = raw.split(STYLE_ANALYSIS_MARKER).collect();

    if parts.len() < 2 {
        warn!(
            response_len = raw.len(),
            "Model response has no style analysis marker, using fallback"
        );
        let lyrics_only = strip_title_preamble(raw);
        let lyrics = if lyrics_only.is_empty() {
            raw.to_string()
        } else {
            lyrics_only
        };
        return GenerationResult {
            lyrics,
            genre_style: MISSING_ANALYSIS.to_string(),
            avoid_style: String::new(),
        };
    }

    let lyrics_block = parts[0];
    let analysis_block = parts[1];

    GenerationResult {
        lyrics: strip_title_preamble(lyrics_block),
        genre_style: capture(&GENRE_STYLE, analysis_block),
        avoid_style: capture(&AVOID_STYLE, analysis_block),
    }
}

/// Remove the first title/lyrics preamble and trim.
fn strip_title_preamble(text: &str) -> String {
    TITLE_PREAMBLE.replace(text, "").trim().to_string()
}

fn capture(pattern: &Regex, block: &str) -> String {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_GENERATED.to_string())
}
