pub mod clues;
pub mod components;
pub mod systems;
pub mod trainer;
pub mod view;

use std::collections::HashMap;

use hecs::{Entity, World};
use recite_protocol::{Generation, GroupId, RevealState};
use recite_segmenter::Segmentation;

use crate::clues::{ClueBatch, ClueOutcome, ClueRequest};
use crate::components::{Reveal, SpanMembers};
use crate::systems::{promote, reveal};
use crate::view::{Progress, SpanView, TokenView};

pub use crate::trainer::{Trainer, TrainerConfig};

/// Owns the reveal state of every span of the current segmentation.
///
/// Each span is one entity carrying its member range and its `Reveal`
/// state. Loading a new segmentation throws all of it away, clues included,
/// and bumps the generation.
pub struct RevealEngine {
    world: World,
    index: HashMap<GroupId, Entity>,
    clues: HashMap<GroupId, String>,
    segmentation: Segmentation,
    generation: Generation,
    clues_requested: bool,
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealEngine {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            clues: HashMap::new(),
            segmentation: Segmentation::default(),
            generation: Generation::default(),
            clues_requested: false,
        }
    }

    /// Replaces the current segmentation and starts a new generation.
    pub fn load(&mut self, segmentation: Segmentation) -> Generation {
        self.world.clear();
        self.index.clear();
        self.clues.clear();
        self.clues_requested = false;

        for span in segmentation.spans() {
            let entity = self.world.spawn((
                SpanMembers {
                    group: span.group,
                    tokens: span.tokens.clone(),
                },
                Reveal::default(),
            ));
            self.index.insert(span.group, entity);
        }

        self.segmentation = segmentation;
        self.generation = self.generation.next();

        tracing::debug!(
            generation = %self.generation,
            spans = self.index.len(),
            "loaded segmentation"
        );
        self.generation
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    /// Advances one span. Unknown groups are ignored and yield `None`.
    pub fn activate(&mut self, group: GroupId) -> Option<RevealState> {
        let Some(&entity) = self.index.get(&group) else {
            tracing::debug!(%group, "activate on unknown group ignored");
            return None;
        };
        let has_clue = self.has_clue(group);
        reveal::activate(&mut self.world, entity, has_clue)
    }

    /// Masks every span again. Clues are kept.
    pub fn reset_all(&mut self) {
        let changed = reveal::reset_all(&mut self.world);
        tracing::debug!(changed, "reset all spans");
    }

    /// Merges clues into the table and promotes masked spans whose clue just
    /// became available. Replaying the same clues changes nothing.
    ///
    /// Returns how many spans were promoted.
    pub fn apply_clues<I>(&mut self, clues: I) -> usize
    where
        I: IntoIterator<Item = (GroupId, String)>,
    {
        let mut fresh = Vec::new();

        for (group, clue) in clues {
            let Some(&entity) = self.index.get(&group) else {
                tracing::debug!(%group, "clue for unknown group ignored");
                continue;
            };
            if clue.is_empty() {
                // Never blank out a clue a span may already be showing
                self.clues.entry(group).or_default();
                continue;
            }
            if !self.has_clue(group) {
                fresh.push(entity);
            }
            self.clues.insert(group, clue);
        }

        promote::promote_masked(&mut self.world, fresh)
    }

    /// Applies a batch only if it was requested for the current generation.
    pub fn apply_batch(&mut self, batch: ClueBatch) -> ClueOutcome {
        if batch.generation != self.generation {
            tracing::debug!(
                batch = %batch.generation,
                current = %self.generation,
                "dropping stale clue batch"
            );
            return ClueOutcome::Stale {
                batch: batch.generation,
                current: self.generation,
            };
        }

        ClueOutcome::Applied {
            promoted: self.apply_clues(batch.clues),
        }
    }

    /// Builds the clue request for this generation from every span still
    /// `MASKED`. Only the first call per generation returns a request.
    pub fn take_clue_request(&mut self) -> Option<ClueRequest> {
        if self.clues_requested {
            return None;
        }

        let (groups, texts): (Vec<GroupId>, Vec<String>) = self
            .segmentation
            .spans()
            .iter()
            .filter(|span| self.state(span.group) == Some(RevealState::Masked))
            .map(|span| (span.group, span.text(self.segmentation.tokens())))
            .filter(|(_, text)| !text.is_empty())
            .unzip();

        if groups.is_empty() {
            return None;
        }

        self.clues_requested = true;
        Some(ClueRequest {
            generation: self.generation,
            groups,
            texts,
        })
    }

    pub fn state(&self, group: GroupId) -> Option<RevealState> {
        let entity = *self.index.get(&group)?;
        self.world.get::<&Reveal>(entity).ok().map(|r| r.state)
    }

    /// The recorded clue, which may be empty.
    pub fn clue(&self, group: GroupId) -> Option<&str> {
        self.clues.get(&group).map(String::as_str)
    }

    /// Whether a displayable clue exists for `group`.
    pub fn has_clue(&self, group: GroupId) -> bool {
        self.clue(group).is_some_and(|c| !c.is_empty())
    }

    pub fn tokens(&self) -> Vec<TokenView> {
        self.segmentation
            .tokens()
            .iter()
            .map(|token| TokenView {
                id: token.id,
                character: token.character,
                is_masked: token.is_masked(),
                is_punctuation: token.is_punctuation(),
                is_line_break: token.is_line_break(),
                group: token.group,
                state: token.group.and_then(|g| self.state(g)),
            })
            .collect()
    }

    pub fn spans(&self) -> Vec<SpanView> {
        self.segmentation
            .spans()
            .iter()
            .map(|span| SpanView {
                group: span.group,
                tokens: span.member_ids().collect(),
                text: span.text(self.segmentation.tokens()),
                state: self.state(span.group).unwrap_or_default(),
                clue: self.clue(span.group).map(str::to_owned),
            })
            .collect()
    }

    pub fn progress(&self) -> Progress {
        let mut progress = Progress::default();
        for (_id, (_members, reveal)) in self.world.query::<(&SpanMembers, &Reveal)>().iter() {
            progress.total += 1;
            match reveal.state {
                RevealState::Masked => progress.masked += 1,
                RevealState::Clued => progress.clued += 1,
                RevealState::Revealed => progress.revealed += 1,
            }
        }
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recite_protocol::DifficultyLevel;
    use recite_segmenter::segment;

    const POEM: &str = "春眠不觉晓，处处闻啼鸟。";

    fn engine(text: &str, level: DifficultyLevel) -> RevealEngine {
        let mut engine = RevealEngine::new();
        engine.load(segment(text, level));
        engine
    }

    fn clue(group: u32, text: &str) -> (GroupId, String) {
        (GroupId(group), text.to_string())
    }

    #[test]
    fn test_cycle_without_clue() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let g = GroupId(1);

        assert_eq!(engine.state(g), Some(RevealState::Masked));
        assert_eq!(engine.activate(g), Some(RevealState::Revealed));
        assert_eq!(engine.activate(g), Some(RevealState::Masked));
        assert_eq!(engine.activate(g), Some(RevealState::Revealed));
    }

    #[test]
    fn test_cycle_with_clue() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let g = GroupId(7);
        // Clue arrives, user has not touched the span yet
        assert_eq!(engine.apply_clues([clue(7, "🐦")]), 1);
        assert_eq!(engine.state(g), Some(RevealState::Clued));

        assert_eq!(engine.activate(g), Some(RevealState::Revealed));
        assert_eq!(engine.activate(g), Some(RevealState::Masked));
        assert_eq!(engine.activate(g), Some(RevealState::Clued));
        assert_eq!(engine.activate(g), Some(RevealState::Revealed));
    }

    #[test]
    fn test_activate_is_atomic_across_members() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.activate(GroupId(1));

        let tokens = engine.tokens();
        let states: Vec<Option<RevealState>> = tokens
            .iter()
            .filter(|t| t.group == Some(GroupId(1)))
            .map(|t| t.state)
            .collect();
        assert_eq!(states.len(), 4);
        assert!(states.iter().all(|s| *s == Some(RevealState::Revealed)));

        // The other span is untouched
        assert!(tokens
            .iter()
            .filter(|t| t.group == Some(GroupId(7)))
            .all(|t| t.state == Some(RevealState::Masked)));
        // Unmasked tokens have no state
        assert_eq!(tokens[0].state, None);
        assert_eq!(tokens[5].state, None);
    }

    #[test]
    fn test_unknown_group_is_noop() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        // Token 0 is visible and leads no span
        assert_eq!(engine.activate(GroupId(0)), None);
        assert_eq!(engine.activate(GroupId(500)), None);
        assert_eq!(engine.progress().masked, 2);
        assert_eq!(engine.apply_clues([clue(3, "x")]), 0);
        assert_eq!(engine.clue(GroupId(3)), None);
    }

    #[test]
    fn test_late_clue_does_not_regress() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.activate(GroupId(1));
        assert_eq!(engine.state(GroupId(1)), Some(RevealState::Revealed));

        assert_eq!(engine.apply_clues([clue(1, "🍎")]), 0);
        assert_eq!(engine.state(GroupId(1)), Some(RevealState::Revealed));
        assert_eq!(engine.clue(GroupId(1)), Some("🍎"));
    }

    #[test]
    fn test_apply_clues_is_idempotent() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let clues = vec![clue(1, "😴"), clue(7, "🐦")];

        assert_eq!(engine.apply_clues(clues.clone()), 2);
        let before = engine.spans();
        assert_eq!(engine.apply_clues(clues), 0);
        assert_eq!(engine.spans(), before);
    }

    #[test]
    fn test_replay_after_cycling_does_not_promote() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.apply_clues([clue(1, "😴")]);
        engine.activate(GroupId(1)); // revealed
        engine.activate(GroupId(1)); // masked
        assert_eq!(engine.apply_clues([clue(1, "😴")]), 0);
        assert_eq!(engine.state(GroupId(1)), Some(RevealState::Masked));
    }

    #[test]
    fn test_reset_keeps_clues() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.apply_clues([clue(1, "😴")]);
        engine.activate(GroupId(1));
        engine.activate(GroupId(7));

        engine.reset_all();
        assert_eq!(engine.state(GroupId(1)), Some(RevealState::Masked));
        assert_eq!(engine.state(GroupId(7)), Some(RevealState::Masked));
        assert_eq!(engine.clue(GroupId(1)), Some("😴"));

        // No replay needed: the known clue still routes through CLUED
        assert_eq!(engine.activate(GroupId(1)), Some(RevealState::Clued));
        assert_eq!(engine.activate(GroupId(7)), Some(RevealState::Revealed));
    }

    #[test]
    fn test_empty_clue_is_recorded_but_not_shown() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        assert_eq!(engine.apply_clues([clue(1, "")]), 0);
        assert_eq!(engine.clue(GroupId(1)), Some(""));
        assert!(!engine.has_clue(GroupId(1)));
        assert_eq!(engine.activate(GroupId(1)), Some(RevealState::Revealed));

        // A real clue later still counts as newly available
        engine.activate(GroupId(1));
        assert_eq!(engine.apply_clues([clue(1, "😴")]), 1);
    }

    #[test]
    fn test_empty_clue_never_replaces_a_real_one() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.apply_clues([clue(7, "🐦")]);
        assert_eq!(engine.apply_clues([clue(7, "")]), 0);

        assert_eq!(engine.state(GroupId(7)), Some(RevealState::Clued));
        assert!(engine.has_clue(GroupId(7)));
        assert_eq!(engine.clue(GroupId(7)), Some("🐦"));
    }

    #[test]
    fn test_clued_spans_always_have_a_clue() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.apply_clues([clue(1, "😴"), clue(7, "")]);
        engine.apply_clues([clue(1, ""), clue(7, "🐦")]);
        engine.activate(GroupId(1));
        engine.reset_all();
        engine.apply_clues([clue(1, ""), clue(7, "")]);
        engine.activate(GroupId(1));

        for span in engine.spans() {
            if span.state == RevealState::Clued {
                assert!(span.clue.is_some_and(|c| !c.is_empty()), "{:?}", span.group);
            }
        }
    }

    #[test]
    fn test_load_discards_state_and_clues() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let first = engine.generation();
        engine.apply_clues([clue(1, "😴")]);
        engine.activate(GroupId(7));

        let second = engine.load(segment(POEM, DifficultyLevel::Scaffolding));
        assert!(second > first);
        assert_eq!(engine.clue(GroupId(1)), None);
        assert!(engine.spans().iter().all(|s| s.state == RevealState::Masked));
    }

    #[test]
    fn test_stale_batch_is_dropped() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let request = engine.take_clue_request().unwrap();
        assert_eq!(request.texts, vec!["眠不觉晓".to_string(), "处闻啼鸟".to_string()]);

        // Level switch while the request is in flight
        engine.load(segment(POEM, DifficultyLevel::Scaffolding));
        let outcome = engine.apply_batch(request.answer(vec!["😴".into(), "🐦".into()]));

        assert!(matches!(outcome, ClueOutcome::Stale { .. }));
        assert!(engine.spans().iter().all(|s| s.clue.is_none()));
    }

    #[test]
    fn test_current_batch_is_applied() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        let request = engine.take_clue_request().unwrap();
        engine.activate(GroupId(7));

        let outcome = engine.apply_batch(request.answer(vec!["😴".into(), "🐦".into()]));
        assert_eq!(outcome, ClueOutcome::Applied { promoted: 1 });
        assert_eq!(engine.state(GroupId(1)), Some(RevealState::Clued));
        assert_eq!(engine.state(GroupId(7)), Some(RevealState::Revealed));
    }

    #[test]
    fn test_one_request_per_generation() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.activate(GroupId(1));

        let request = engine.take_clue_request().unwrap();
        assert_eq!(request.groups, vec![GroupId(7)]);
        assert!(engine.take_clue_request().is_none());

        engine.load(segment(POEM, DifficultyLevel::Prediction));
        assert!(engine.take_clue_request().is_some());
    }

    #[test]
    fn test_no_request_without_spans() {
        let mut engine = engine("，。", DifficultyLevel::Generation);
        assert!(engine.take_clue_request().is_none());
        assert_eq!(engine.progress(), Progress::default());
        assert!(engine.progress().is_complete());
    }

    #[test]
    fn test_progress_counts() {
        let mut engine = engine(POEM, DifficultyLevel::Prediction);
        engine.apply_clues([clue(1, "😴")]);
        engine.activate(GroupId(7));
        let progress = engine.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.clued, 1);
        assert_eq!(progress.revealed, 1);
        assert!(!progress.is_complete());
    }
}
