// AI module for lyric generation
//
// This module provides:
// - The fixed training preamble and output contract
// - Prompt rendering from a song configuration
// - Gemini API client behind the TextGenerator trait
// - Tolerant parsing of the model's two-part reply
// - API key resolution

pub mod credentials;
pub mod gemini_client;
pub mod generation;
pub mod prompt_builder;
pub mod response_parser;
pub mod system_prompt;

// Re-export commonly used types
pub use credentials::CredentialManager;
pub use gemini_client::{GeminiClient, LlmError, TextGenerator, GEMINI_MODEL};
pub use generation::generate_lyrics;
pub use prompt_builder::{build_prompt, PromptBuilder};
pub use response_parser::parse_response;
pub use system_prompt::{STYLE_ANALYSIS_MARKER, TRAINING_PROMPT};
