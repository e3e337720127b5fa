// Song request model
//
// Typed shape of everything a user can choose for a generation request,
// plus the result and history records built from it.

pub mod config;
pub mod options;
pub mod structure;

pub use config::{GenerationResult, HistoryItem, HistorySummary, SongConfig};
pub use options::{Bpm, EnhancementFlag, Enhancements, Emotion, Genre, Language};
pub use structure::{SectionKind, StructurePreset};
