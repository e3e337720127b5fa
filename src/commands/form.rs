// Form helper commands: option lists, structure editing, presets

use crate::ai::GEMINI_MODEL;
use crate::song::options::{BPM_MAX, BPM_MIN, BPM_STEP};
use crate::song::structure::{self, SectionKind, StructurePreset};
use crate::song::{EnhancementFlag, Emotion, Genre, Language, SongConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDTO {
    pub name: &'static str,
    pub parts: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementDTO {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmRangeDTO {
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

/// Everything the form needs to render its controls
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub emotions: &'static [Emotion],
    pub languages: &'static [Language],
    pub genres: &'static [Genre],
    pub section_kinds: Vec<SectionKind>,
    pub presets: Vec<PresetDTO>,
    pub enhancements: Vec<EnhancementDTO>,
    pub bpm: BpmRangeDTO,
    pub model: &'static str,
    pub defaults: SongConfig,
}

pub fn get_form_options() -> FormOptions {
    FormOptions {
        emotions: Emotion::ALL,
        languages: Language::ALL,
        genres: Genre::ALL,
        section_kinds: SectionKind::ALL.to_vec(),
        presets: StructurePreset::ALL
            .iter()
            .map(|p| PresetDTO {
                name: p.name(),
                parts: p.parts(),
            })
            .collect(),
        enhancements: EnhancementFlag::ALL
            .iter()
            .map(|f| EnhancementDTO {
                key: f.key(),
                label: f.label(),
            })
            .collect(),
        bpm: BpmRangeDTO {
            min: BPM_MIN,
            max: BPM_MAX,
            step: BPM_STEP,
        },
        model: GEMINI_MODEL,
        defaults: SongConfig::default(),
    }
}

/// Apply one "+ part" click to a structure and return the result
pub fn add_structure_part(mut current: Vec<String>, part: SectionKind) -> Vec<String> {
    structure::add_part(&mut current, part);
    current
}

pub fn apply_structure_preset(preset: StructurePreset) -> Vec<String> {
    preset.to_structure()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_options_serialization() {
        let json = serde_json::to_value(get_form_options()).unwrap();
        assert_eq!(json["emotions"].as_array().unwrap().len(), 15);
        assert_eq!(json["genres"][4], "R&B");
        assert_eq!(json["sectionKinds"][2], "Pre-Chorus");
        assert_eq!(json["presets"][0]["name"], "Classic Rap");
        assert_eq!(json["enhancements"][1]["label"], "Auto Cadence Adjust");
        assert_eq!(json["bpm"]["step"], 5);
        assert_eq!(json["defaults"]["bpm"], 120);
    }

    #[test]
    fn test_add_structure_part() {
        let structure = add_structure_part(vec!["Verse 1".to_string()], SectionKind::Intro);
        assert_eq!(structure, vec!["Intro", "Verse 1"]);

        let structure = add_structure_part(structure, SectionKind::Verse);
        assert_eq!(structure, vec!["Intro", "Verse 1", "Verse 2"]);
    }

    #[test]
    fn test_apply_preset() {
        assert_eq!(apply_structure_preset(StructurePreset::Aaba)[2], "Bridge 1");
    }
}
