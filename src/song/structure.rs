// Song structure editing: add/remove parts and presets
//
// Structure entries are opaque labels. Nothing here validates existing
// entries against the section vocabulary; presets and the add operations are
// just convenient ways to produce labels.

use serde::{Deserialize, Serialize};

/// A section the user can append to the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Intro,
    Verse,
    #[serde(rename = "Pre-Chorus")]
    PreChorus,
    Chorus,
    #[serde(rename = "Post-Chorus")]
    PostChorus,
    Hook,
    Bridge,
    Skit,
    Outro,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Intro,
        SectionKind::Verse,
        SectionKind::PreChorus,
        SectionKind::Chorus,
        SectionKind::PostChorus,
        SectionKind::Hook,
        SectionKind::Bridge,
        SectionKind::Skit,
        SectionKind::Outro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Intro => "Intro",
            SectionKind::Verse => "Verse",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Chorus => "Chorus",
            SectionKind::PostChorus => "Post-Chorus",
            SectionKind::Hook => "Hook",
            SectionKind::Bridge => "Bridge",
            SectionKind::Skit => "Skit",
            SectionKind::Outro => "Outro",
        }
    }

    /// Intro and Outro appear at most once; everything else gets a running number.
    pub fn is_singleton(&self) -> bool {
        matches!(self, SectionKind::Intro | SectionKind::Outro)
    }
}

/// Add a part to the structure.
///
/// Numbered kinds append `"<Base> <n>"`, where `n` is one more than the number
/// of entries already starting with the base label. Singletons are a no-op
/// when an entry with that prefix exists; Intro goes to the front, Outro to
/// the back.
pub fn add_part(structure: &mut Vec<String>, kind: SectionKind) {
    let base = kind.label();

    if !kind.is_singleton() {
        let count = structure.iter().filter(|p| p.starts_with(base)).count();
        structure.push(format!("{} {}", base, count + 1));
        return;
    }

    if structure.iter().any(|p| p.starts_with(base)) {
        return;
    }

    if kind == SectionKind::Intro {
        structure.insert(0, base.to_string());
    } else {
        structure.push(base.to_string());
    }
}

/// Drop the last part, if any.
pub fn remove_last_part(structure: &mut Vec<String>) {
    structure.pop();
}

/// Built-in structure presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructurePreset {
    #[serde(rename = "Classic Rap")]
    ClassicRap,
    #[serde(rename = "Trap Anthem")]
    TrapAnthem,
    Storytelling,
    Drill,
    Pop,
    #[serde(rename = "Verse-Chorus-Bridge")]
    VerseChorusBridge,
    #[serde(rename = "AABA")]
    Aaba,
}

impl StructurePreset {
    pub const ALL: [StructurePreset; 7] = [
        StructurePreset::ClassicRap,
        StructurePreset::TrapAnthem,
        StructurePreset::Storytelling,
        StructurePreset::Drill,
        StructurePreset::Pop,
        StructurePreset::VerseChorusBridge,
        StructurePreset::Aaba,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StructurePreset::ClassicRap => "Classic Rap",
            StructurePreset::TrapAnthem => "Trap Anthem",
            StructurePreset::Storytelling => "Storytelling",
            StructurePreset::Drill => "Drill",
            StructurePreset::Pop => "Pop",
            StructurePreset::VerseChorusBridge => "Verse-Chorus-Bridge",
            StructurePreset::Aaba => "AABA",
        }
    }

    pub fn parts(&self) -> &'static [&'static str] {
        match self {
            StructurePreset::ClassicRap => &[
                "Intro", "Verse 1", "Hook 1", "Verse 2", "Hook 2", "Bridge 1", "Hook 3", "Outro",
            ],
            StructurePreset::TrapAnthem => &[
                "Intro", "Hook 1", "Verse 1", "Hook 2", "Verse 2", "Hook 3", "Outro",
            ],
            StructurePreset::Storytelling => &[
                "Intro", "Verse 1", "Chorus 1", "Verse 2", "Chorus 2", "Bridge 1", "Verse 3", "Outro",
            ],
            StructurePreset::Drill => &[
                "Intro", "Verse 1", "Hook 1", "Verse 2", "Hook 2", "Verse 3", "Hook 3", "Outro",
            ],
            StructurePreset::Pop => &[
                "Intro",
                "Verse 1",
                "Pre-Chorus 1",
                "Chorus 1",
                "Verse 2",
                "Pre-Chorus 2",
                "Chorus 2",
                "Bridge 1",
                "Chorus 3",
                "Outro",
            ],
            StructurePreset::VerseChorusBridge => &[
                "Verse 1", "Chorus 1", "Verse 2", "Chorus 2", "Bridge 1", "Chorus 3", "Outro",
            ],
            StructurePreset::Aaba => &["Verse 1", "Verse 2", "Bridge 1", "Verse 3", "Outro"],
        }
    }

    pub fn to_structure(&self) -> Vec<String> {
        self.parts().iter().map(|p| p.to_string()).collect()
    }
}
