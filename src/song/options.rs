// Enumerated option sets for a song request
//
// Every selectable value is a closed enum so unknown names are rejected when
// a request is deserialized instead of travelling into the prompt.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed option set with its display names, in canonical order.
macro_rules! option_set {
    ($(#[$meta:meta])* $name:ident, $what:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| format!("Unknown {} '{}'", $what, s))
            }
        }
    };
}

option_set!(
    /// Emotional tone; a request may blend several.
    Emotion, "emotion" {
        Rage => "Rage",
        Melancholy => "Melancholy",
        DarkConfidence => "Dark Confidence",
        SarcasticAnnoying => "Sarcastic / Annoying",
        StreetCold => "Street Cold",
        Hopeful => "Hopeful",
        AggressiveHype => "Aggressive Hype",
        ReflectiveNostalgia => "Reflective Nostalgia",
        Vulnerable => "Vulnerable",
        Defiant => "Defiant",
        Celebratory => "Celebratory",
        AnxiousParanoid => "Anxious / Paranoid",
        Romantic => "Romantic",
        Spiritual => "Spiritual",
        Playful => "Playful",
    }
);

option_set!(
    /// Language the lyrics are written in.
    Language, "language" {
        English => "English",
        Indonesian => "Indonesian",
        Japanese => "Japanese",
    }
);

option_set!(
    /// Optional main genre.
    Genre, "genre" {
        Rap => "Rap",
        Drill => "Drill",
        Pop => "Pop",
        Trap => "Trap",
        RnB => "R&B",
        LoFi => "Lo-Fi",
        Hyperpop => "Hyperpop",
        Indie => "Indie",
        Rock => "Rock",
        Edm => "EDM",
    }
);

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

// --- BPM ---

pub const BPM_MIN: u16 = 90;
pub const BPM_MAX: u16 = 180;
pub const BPM_STEP: u16 = 5;
pub const BPM_DEFAULT: u16 = 120;

/// Tempo in beats per minute, limited to the slider domain (90-180, step 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Bpm(u16);

impl Bpm {
    pub fn new(value: u16) -> Result<Self, AppError> {
        if (BPM_MIN..=BPM_MAX).contains(&value) && (value - BPM_MIN) % BPM_STEP == 0 {
            Ok(Bpm(value))
        } else {
            Err(AppError::InvalidBpm(value))
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Bpm {
    fn default() -> Self {
        Bpm(BPM_DEFAULT)
    }
}

impl TryFrom<u16> for Bpm {
    type Error = AppError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Bpm::new(value)
    }
}

impl From<Bpm> for u16 {
    fn from(bpm: Bpm) -> Self {
        bpm.0
    }
}

impl fmt::Display for Bpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Enhancements ---

/// Optional auto systems the prompt can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnhancementFlag {
    AutoEmotionLink,
    AutoCadenceAdjust,
    AutoBeatSync,
}

impl EnhancementFlag {
    /// Declared order; the prompt lists enabled flags in this order.
    pub const ALL: [EnhancementFlag; 3] = [
        EnhancementFlag::AutoEmotionLink,
        EnhancementFlag::AutoCadenceAdjust,
        EnhancementFlag::AutoBeatSync,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnhancementFlag::AutoEmotionLink => "Auto Emotion Link",
            EnhancementFlag::AutoCadenceAdjust => "Auto Cadence Adjust",
            EnhancementFlag::AutoBeatSync => "Auto Beat Sync",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EnhancementFlag::AutoEmotionLink => "autoEmotionLink",
            EnhancementFlag::AutoCadenceAdjust => "autoCadenceAdjust",
            EnhancementFlag::AutoBeatSync => "autoBeatSync",
        }
    }
}

/// Fixed-key record of enhancement toggles. Keys never change, only values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancements {
    pub auto_emotion_link: bool,
    pub auto_cadence_adjust: bool,
    pub auto_beat_sync: bool,
}

impl Default for Enhancements {
    fn default() -> Self {
        Enhancements {
            auto_emotion_link: true,
            auto_cadence_adjust: true,
            auto_beat_sync: true,
        }
    }
}

impl Enhancements {
    pub fn none() -> Self {
        Enhancements {
            auto_emotion_link: false,
            auto_cadence_adjust: false,
            auto_beat_sync: false,
        }
    }

    pub fn is_enabled(&self, flag: EnhancementFlag) -> bool {
        match flag {
            EnhancementFlag::AutoEmotionLink => self.auto_emotion_link,
            EnhancementFlag::AutoCadenceAdjust => self.auto_cadence_adjust,
            EnhancementFlag::AutoBeatSync => self.auto_beat_sync,
        }
    }

    pub fn set(&mut self, flag: EnhancementFlag, enabled: bool) {
        match flag {
            EnhancementFlag::AutoEmotionLink => self.auto_emotion_link = enabled,
            EnhancementFlag::AutoCadenceAdjust => self.auto_cadence_adjust = enabled,
            EnhancementFlag::AutoBeatSync => self.auto_beat_sync = enabled,
        }
    }

    /// Enabled flags in declared order.
    pub fn enabled(&self) -> impl Iterator<Item = EnhancementFlag> + '_ {
        EnhancementFlag::ALL
            .into_iter()
            .filter(move |flag| self.is_enabled(*flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_serializes_by_display_name() {
        let json = serde_json::to_string(&Emotion::SarcasticAnnoying).unwrap();
        assert_eq!(json, "\"Sarcastic / Annoying\"");

        let parsed: Emotion = serde_json::from_str("\"Dark Confidence\"").unwrap();
        assert_eq!(parsed, Emotion::DarkConfidence);
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(serde_json::from_str::<Genre>("\"Polka\"").is_err());
        assert!(serde_json::from_str::<Language>("\"Klingon\"").is_err());
        assert!("Polka".parse::<Genre>().is_err());
        assert_eq!("R&B".parse::<Genre>().unwrap(), Genre::RnB);
    }

    #[test]
    fn test_option_set_sizes() {
        assert_eq!(Emotion::ALL.len(), 15);
        assert_eq!(Language::ALL.len(), 3);
        assert_eq!(Genre::ALL.len(), 10);
    }

    #[test]
    fn test_bpm_domain() {
        assert!(Bpm::new(90).is_ok());
        assert!(Bpm::new(180).is_ok());
        assert!(Bpm::new(125).is_ok());
        assert!(Bpm::new(85).is_err());
        assert!(Bpm::new(185).is_err());
        assert!(Bpm::new(121).is_err());
        assert_eq!(Bpm::default().value(), 120);
    }

    #[test]
    fn test_bpm_deserialize_validates() {
        let bpm: Bpm = serde_json::from_str("140").unwrap();
        assert_eq!(bpm.value(), 140);
        assert!(serde_json::from_str::<Bpm>("141").is_err());
        assert_eq!(serde_json::to_string(&bpm).unwrap(), "140");
    }

    #[test]
    fn test_enhancements_enabled_in_declared_order() {
        let mut enhancements = Enhancements::none();
        enhancements.set(EnhancementFlag::AutoBeatSync, true);
        enhancements.set(EnhancementFlag::AutoEmotionLink, true);

        let enabled: Vec<_> = enhancements.enabled().collect();
        assert_eq!(
            enabled,
            vec![EnhancementFlag::AutoEmotionLink, EnhancementFlag::AutoBeatSync]
        );
    }

    #[test]
    fn test_enhancements_wire_keys() {
        let json = serde_json::to_value(Enhancements::default()).unwrap();
        for flag in EnhancementFlag::ALL {
            assert_eq!(json[flag.key()], serde_json::Value::Bool(true));
        }
    }
}
