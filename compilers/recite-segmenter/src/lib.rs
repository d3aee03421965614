pub mod config;
pub mod grouping;
pub mod parser;
pub mod policy;
pub mod token;
pub mod units;

use recite_protocol::{DifficultyLevel, GroupId, TokenFlags, TokenId};
use serde::Serialize;

use crate::grouping::group_spans;
use crate::parser::{scan_chars, ScannedChar, UnitKind};
use crate::policy::LevelPolicy;
use crate::units::{character_units, word_units, Unit};

pub use crate::config::{PolicyThresholds, SegmentationMode, SegmenterConfig};
pub use crate::token::{Span, Token};

/// The boundaries a segmentation was actually computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundaries {
    #[default]
    Words,
    Characters,
}

/// Output of one segmentation run: every character as a token, plus the
/// maskable spans in text order.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    level: DifficultyLevel,
    boundaries: Boundaries,
    tokens: Vec<Token>,
    spans: Vec<Span>,
}

impl Segmentation {
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0 as usize)
    }

    /// Spans are ordered by group id, so this is a binary search.
    pub fn span(&self, group: GroupId) -> Option<&Span> {
        self.spans
            .binary_search_by_key(&group, |s| s.group)
            .ok()
            .map(|i| &self.spans[i])
    }

    pub fn span_text(&self, group: GroupId) -> Option<String> {
        self.span(group).map(|s| s.text(&self.tokens))
    }

    /// Reassembles the input.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.character).collect()
    }
}

/// Turns raw text plus a difficulty level into tokens and spans.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Pure apart from the ids it hands out.
    pub fn segment(&self, text: &str, level: DifficultyLevel) -> Segmentation {
        let chars = scan_chars(text);
        let (boundaries, units) = self.units(text, &chars);

        let thresholds = self.thresholds(boundaries);

        let mut tokens: Vec<Token> = chars
            .iter()
            .enumerate()
            .map(|(i, c)| Token {
                id: TokenId(i as u32),
                character: c.character,
                offset: c.offset,
                flags: c.kind.flags(),
                group: None,
            })
            .collect();

        apply_policy(&mut tokens, &units, LevelPolicy::new(level, thresholds));
        let spans = group_spans(&mut tokens);

        tracing::debug!(
            ?level,
            ?boundaries,
            tokens = tokens.len(),
            spans = spans.len(),
            "segmented text"
        );

        Segmentation {
            level,
            boundaries,
            tokens,
            spans,
        }
    }

    fn units(&self, text: &str, chars: &[ScannedChar]) -> (Boundaries, Vec<Unit>) {
        self.pick_units(chars, || word_units(text, chars))
    }

    /// `words` yields `None` when word boundaries cannot be computed.
    fn pick_units<F>(&self, chars: &[ScannedChar], words: F) -> (Boundaries, Vec<Unit>)
    where
        F: FnOnce() -> Option<Vec<Unit>>,
    {
        match self.config.mode {
            SegmentationMode::Characters => (Boundaries::Characters, character_units(chars)),
            SegmentationMode::Auto | SegmentationMode::Words => match words() {
                Some(units) => (Boundaries::Words, units),
                None => {
                    tracing::debug!("word boundaries unavailable, segmenting per character");
                    (Boundaries::Characters, character_units(chars))
                }
            },
        }
    }

    pub fn thresholds(&self, boundaries: Boundaries) -> PolicyThresholds {
        match boundaries {
            Boundaries::Words => self.config.word_thresholds,
            Boundaries::Characters => self.config.character_thresholds,
        }
    }
}

fn apply_policy(tokens: &mut [Token], units: &[Unit], mut policy: LevelPolicy) {
    for unit in units {
        let masked = policy.observe(unit.kind);
        if masked && unit.kind == UnitKind::Eligible {
            for token in &mut tokens[unit.chars.clone()] {
                token.flags |= TokenFlags::MASKED;
            }
        }
    }
}

/// Segments with the default configuration.
pub fn segment(text: &str, level: DifficultyLevel) -> Segmentation {
    Segmenter::default().segment(text, level)
}
