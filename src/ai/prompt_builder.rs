// Prompt builder for lyric generation
//
// Renders a SongConfig into the single text blob sent to the model:
// the fixed training preamble followed by the concrete request fields.

use super::system_prompt::TRAINING_PROMPT;
use crate::song::SongConfig;

pub const NO_STORY: &str = "No specific story provided. Focus on the emotion.";
pub const NONE_SPECIFIED: &str = "None specified";
pub const NO_ENHANCEMENTS: &str = "None";

const REQUEST_HEADER: &str = "**HERE IS THE SPECIFIC REQUEST. GENERATE LYRICS AND THE STYLE ANALYSIS FOLLOWING ALL RULES, SYSTEMS, AND FORMATS DEFINED ABOVE.**";

pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full prompt. Pure and deterministic for a given config.
    pub fn build(config: &SongConfig) -> String {
        format!(
            "\n{preamble}\n\n---\n\n{header}\n\n\
             **Title:** \"{title}\"\n\n\
             **Story / Core Message:**\n{story}\n\n\
             **Main Genre:** {genre}\n\n\
             **Song Structure:**\n{structure}\n\n\
             **Language:** {language}\n\
             **BPM:** {bpm}\n\
             **Emotion(s):** {emotions}\n\n\
             **Optional Enhancements Enabled:**\n{enhancements}\n  ",
            preamble = TRAINING_PROMPT,
            header = REQUEST_HEADER,
            title = config.song_title,
            story = Self::story_text(config),
            genre = config.genre.map(|g| g.as_str()).unwrap_or(NONE_SPECIFIED),
            structure = config.structure.join(", "),
            language = config.language,
            bpm = config.bpm,
            emotions = Self::emotion_text(config),
            enhancements = Self::enhancement_text(config),
        )
    }

    fn story_text(config: &SongConfig) -> &str {
        if config.story.is_empty() {
            NO_STORY
        } else {
            &config.story
        }
    }

    fn emotion_text(config: &SongConfig) -> String {
        if config.emotion.is_empty() {
            return NONE_SPECIFIED.to_string();
        }
        config
            .emotion
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One "- <label>" bullet per enabled flag, in declared order.
    fn enhancement_text(config: &SongConfig) -> String {
        let lines: Vec<String> = config
            .enhancements
            .enabled()
            .map(|flag| format!("- {}", flag.label()))
            .collect();

        if lines.is_empty() {
            NO_ENHANCEMENTS.to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Convenience wrapper around [`PromptBuilder::build`].
pub fn build_prompt(config: &SongConfig) -> String {
    PromptBuilder::build(config)
}
