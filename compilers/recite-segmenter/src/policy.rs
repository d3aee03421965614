use recite_protocol::DifficultyLevel;

use crate::config::PolicyThresholds;
use crate::parser::UnitKind;

/// Running masking state for one level, selected once per rebuild.
///
/// Structural units other than the level's reset markers leave the
/// counters untouched. Whitespace never affects any level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPolicy {
    /// Strict alternation over the whole text, starting visible.
    Scaffolding { hide_next: bool },
    /// First `visible` units after each punctuation mark or line break stay visible.
    Prediction { shown: usize, visible: usize },
    /// First `visible` units of each line stay visible.
    Generation { shown: usize, visible: usize },
}

impl LevelPolicy {
    pub fn new(level: DifficultyLevel, thresholds: PolicyThresholds) -> Self {
        match level {
            DifficultyLevel::Scaffolding => LevelPolicy::Scaffolding { hide_next: false },
            DifficultyLevel::Prediction => LevelPolicy::Prediction {
                shown: 0,
                visible: thresholds.prediction_visible.max(1),
            },
            DifficultyLevel::Generation => LevelPolicy::Generation {
                shown: 0,
                visible: thresholds.generation_visible.max(1),
            },
        }
    }

    /// Feeds the next unit; returns whether it is masked.
    pub fn observe(&mut self, kind: UnitKind) -> bool {
        match (self, kind) {
            (_, UnitKind::Whitespace) => false,

            (LevelPolicy::Scaffolding { hide_next }, UnitKind::Eligible) => {
                let hide = *hide_next;
                *hide_next = !hide;
                hide
            }
            (LevelPolicy::Scaffolding { .. }, _) => false,

            (LevelPolicy::Prediction { shown, .. }, UnitKind::Punctuation | UnitKind::LineBreak) => {
                *shown = 0;
                false
            }
            (LevelPolicy::Generation { shown, .. }, UnitKind::LineBreak) => {
                *shown = 0;
                false
            }
            (LevelPolicy::Generation { .. }, UnitKind::Punctuation) => false,

            (
                LevelPolicy::Prediction { shown, visible } | LevelPolicy::Generation { shown, visible },
                UnitKind::Eligible,
            ) => {
                if *shown < *visible {
                    *shown += 1;
                    false
                } else {
                    true
                }
            }
        }
    }
}
