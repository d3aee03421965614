use serde::{Deserialize, Serialize};

/// Which unit boundaries the masking policies run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Word boundaries when compiled in, characters otherwise.
    #[default]
    Auto,
    /// Same as `Auto`; falls back silently when word boundaries are unavailable.
    Words,
    Characters,
}

/// How many eligible units stay visible after each reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyThresholds {
    /// Level 2: visible units after a punctuation mark or line break.
    pub prediction_visible: usize,
    /// Level 3: visible units at the start of each line.
    pub generation_visible: usize,
}

impl PolicyThresholds {
    pub const WORDS: Self = Self {
        prediction_visible: 1,
        generation_visible: 1,
    };

    /// Roughly one two-character word.
    pub const CHARACTERS: Self = Self {
        prediction_visible: 2,
        generation_visible: 2,
    };
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self::WORDS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSegmenterConfig")]
pub struct SegmenterConfig {
    pub mode: SegmentationMode,
    pub word_thresholds: PolicyThresholds,
    pub character_thresholds: PolicyThresholds,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            mode: SegmentationMode::Auto,
            word_thresholds: PolicyThresholds::WORDS,
            character_thresholds: PolicyThresholds::CHARACTERS,
        }
    }
}

/// Thresholds as written in a config file; missing fields take the
/// default of the mode they belong to.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialThresholds {
    prediction_visible: Option<usize>,
    generation_visible: Option<usize>,
}

impl PartialThresholds {
    fn or(self, defaults: PolicyThresholds) -> PolicyThresholds {
        PolicyThresholds {
            prediction_visible: self.prediction_visible.unwrap_or(defaults.prediction_visible),
            generation_visible: self.generation_visible.unwrap_or(defaults.generation_visible),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSegmenterConfig {
    mode: SegmentationMode,
    word_thresholds: PartialThresholds,
    character_thresholds: PartialThresholds,
}

impl From<RawSegmenterConfig> for SegmenterConfig {
    fn from(raw: RawSegmenterConfig) -> Self {
        Self {
            mode: raw.mode,
            word_thresholds: raw.word_thresholds.or(PolicyThresholds::WORDS),
            character_thresholds: raw.character_thresholds.or(PolicyThresholds::CHARACTERS),
        }
    }
}

impl SegmenterConfig {
    pub fn characters() -> Self {
        Self {
            mode: SegmentationMode::Characters,
            ..Self::default()
        }
    }
}
