// Song request configuration, generation result and history records

use super::options::{Bpm, EnhancementFlag, Enhancements, Emotion, Genre, Language};
use super::structure::{self, SectionKind, StructurePreset};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const UNTITLED: &str = "Untitled";

/// Everything the user chose for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongConfig {
    pub song_title: String,
    #[serde(default)]
    pub story: String,
    #[serde(default, with = "genre_field")]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub structure: Vec<String>,
    #[serde(default)]
    pub bpm: Bpm,
    /// Selection order, not canonical order.
    #[serde(default)]
    pub emotion: Vec<Emotion>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub enhancements: Enhancements,
}

impl Default for SongConfig {
    fn default() -> Self {
        SongConfig {
            song_title: UNTITLED.to_string(),
            story: String::new(),
            genre: None,
            structure: ["Intro", "Verse 1", "Hook 1", "Verse 2", "Hook 2", "Outro"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bpm: Bpm::default(),
            emotion: vec![Emotion::DarkConfidence],
            language: Language::English,
            enhancements: Enhancements::default(),
        }
    }
}

impl SongConfig {
    /// The title, or "Untitled" when empty. Used for display only.
    pub fn title_or_placeholder(&self) -> &str {
        if self.song_title.is_empty() {
            UNTITLED
        } else {
            &self.song_title
        }
    }

    /// Add or remove an emotion without duplicating it.
    pub fn toggle_emotion(&mut self, emotion: Emotion) {
        if let Some(pos) = self.emotion.iter().position(|e| *e == emotion) {
            self.emotion.remove(pos);
        } else {
            self.emotion.push(emotion);
        }
    }

    /// Selecting the current genre again clears it.
    pub fn toggle_genre(&mut self, genre: Genre) {
        self.genre = if self.genre == Some(genre) { None } else { Some(genre) };
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_bpm(&mut self, bpm: Bpm) {
        self.bpm = bpm;
    }

    pub fn set_enhancement(&mut self, flag: EnhancementFlag, enabled: bool) {
        self.enhancements.set(flag, enabled);
    }

    pub fn add_structure_part(&mut self, kind: SectionKind) {
        structure::add_part(&mut self.structure, kind);
    }

    pub fn remove_last_part(&mut self) {
        structure::remove_last_part(&mut self.structure);
    }

    pub fn clear_structure(&mut self) {
        self.structure.clear();
    }

    pub fn apply_preset(&mut self, preset: StructurePreset) {
        self.structure = preset.to_structure();
    }
}

/// Unset genre travels as `""`, matching what the front end stores.
mod genre_field {
    use super::*;

    pub fn serialize<S: Serializer>(genre: &Option<Genre>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(genre.map(|g| g.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Genre>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => name.parse::<Genre>().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

/// Parsed model output. Empty `lyrics` means "no result yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub lyrics: String,
    pub genre_style: String,
    pub avoid_style: String,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.lyrics.is_empty()
    }

    pub fn has_style_analysis(&self) -> bool {
        !self.lyrics.is_empty() && !self.genre_style.is_empty()
    }
}

/// Immutable snapshot of one completed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    #[serde(alias = "configuration")]
    pub form_state: SongConfig,
    pub result: GenerationResult,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn new(form_state: SongConfig, result: GenerationResult) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen();
        HistoryItem {
            id: format!("{}-{:08x}", timestamp, suffix),
            form_state,
            result,
            timestamp,
        }
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            id: self.id.clone(),
            title: self.form_state.title_or_placeholder().to_string(),
            timestamp: self.timestamp,
            genre: self.form_state.genre,
            language: self.form_state.language,
            emotions: self.form_state.emotion.clone(),
            bpm: self.form_state.bpm,
        }
    }
}

/// What the history browser lists for each entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub id: String,
    pub title: String,
    pub timestamp: i64,
    #[serde(with = "genre_field")]
    pub genre: Option<Genre>,
    pub language: Language,
    pub emotions: Vec<Emotion>,
    pub bpm: Bpm,
}
