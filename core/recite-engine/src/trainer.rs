use recite_protocol::{DifficultyLevel, Generation, GroupId, RevealState};
use recite_segmenter::{Segmenter, SegmenterConfig};
use serde::{Deserialize, Serialize};

use crate::clues::{ClueBatch, ClueOutcome, ClueRequest};
use crate::RevealEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub segmenter: SegmenterConfig,
    pub level: DifficultyLevel,
    /// Drawn once per character of a masked span.
    pub placeholder: char,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            level: DifficultyLevel::default(),
            placeholder: '□',
        }
    }
}

/// A practice session: the passage, the chosen level, and the reveal state
/// computed from them. Changing either input re-segments from scratch.
pub struct Trainer {
    segmenter: Segmenter,
    text: String,
    level: DifficultyLevel,
    placeholder: char,
    engine: RevealEngine,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        let mut trainer = Self {
            segmenter: Segmenter::new(config.segmenter),
            text: String::new(),
            level: config.level,
            placeholder: config.placeholder,
            engine: RevealEngine::new(),
        };
        trainer.rebuild();
        trainer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub fn generation(&self) -> Generation {
        self.engine.generation()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Generation {
        let text = text.into();
        if text == self.text {
            return self.engine.generation();
        }
        self.text = text;
        self.rebuild()
    }

    pub fn set_level(&mut self, level: DifficultyLevel) -> Generation {
        if level == self.level {
            return self.engine.generation();
        }
        self.level = level;
        self.rebuild()
    }

    fn rebuild(&mut self) -> Generation {
        let segmentation = self.segmenter.segment(&self.text, self.level);
        self.engine.load(segmentation)
    }

    pub fn activate(&mut self, group: GroupId) -> Option<RevealState> {
        self.engine.activate(group)
    }

    pub fn reset_all(&mut self) {
        self.engine.reset_all();
    }

    pub fn apply_clues<I>(&mut self, clues: I) -> usize
    where
        I: IntoIterator<Item = (GroupId, String)>,
    {
        self.engine.apply_clues(clues)
    }

    pub fn take_clue_request(&mut self) -> Option<ClueRequest> {
        self.engine.take_clue_request()
    }

    pub fn apply_batch(&mut self, batch: ClueBatch) -> ClueOutcome {
        self.engine.apply_batch(batch)
    }
}
