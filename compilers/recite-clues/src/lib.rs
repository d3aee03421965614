pub mod driver;
pub mod generator;

pub use driver::fetch_clues;
pub use generator::{ClueError, ClueGenerator, LookupClues};

#[cfg(test)]
mod tests {
    use super::*;
    use recite_engine::clues::ClueOutcome;
    use recite_engine::{Trainer, TrainerConfig};
    use recite_protocol::{DifficultyLevel, GroupId, RevealState};

    struct Offline;

    impl ClueGenerator for Offline {
        fn generate(&self, _span_texts: &[String]) -> Result<Vec<String>, ClueError> {
            Err(ClueError::Unavailable("connection refused".into()))
        }
    }

    /// Returns fewer clues than asked for.
    struct Partial;

    impl ClueGenerator for Partial {
        fn generate(&self, _span_texts: &[String]) -> Result<Vec<String>, ClueError> {
            Ok(vec!["😴".into()])
        }
    }

    fn trainer() -> Trainer {
        let mut trainer = Trainer::new(TrainerConfig {
            level: DifficultyLevel::Prediction,
            ..TrainerConfig::default()
        });
        trainer.set_text("春眠不觉晓，处处闻啼鸟。");
        trainer
    }

    #[test]
    fn test_fetch_promotes_masked_spans() {
        let mut trainer = trainer();
        let generator = LookupClues::from_json(r#"{ "眠不觉晓": "😴", "处闻啼鸟": "🐦" }"#).unwrap();

        let outcome = fetch_clues(&mut trainer, &generator);
        assert_eq!(outcome, Some(ClueOutcome::Applied { promoted: 2 }));
        assert_eq!(trainer.engine().clue(GroupId(7)), Some("🐦"));

        // One request per generation
        assert_eq!(fetch_clues(&mut trainer, &generator), None);
    }

    #[test]
    fn test_failure_degrades_to_plain_reveal() {
        let mut trainer = trainer();
        assert_eq!(fetch_clues(&mut trainer, &Offline), None);

        assert_eq!(trainer.activate(GroupId(1)), Some(RevealState::Revealed));
        assert_eq!(trainer.engine().state(GroupId(7)), Some(RevealState::Masked));
    }

    #[test]
    fn test_partial_response_applies_aligned_prefix() {
        let mut trainer = trainer();
        let outcome = fetch_clues(&mut trainer, &Partial);

        assert_eq!(outcome, Some(ClueOutcome::Applied { promoted: 1 }));
        assert_eq!(trainer.engine().state(GroupId(1)), Some(RevealState::Clued));
        assert_eq!(trainer.engine().state(GroupId(7)), Some(RevealState::Masked));
    }

    #[test]
    fn test_generator_as_trait_object() {
        let mut trainer = trainer();
        let generator: Box<dyn ClueGenerator> = Box::new(Offline);
        assert_eq!(fetch_clues(&mut trainer, generator.as_ref()), None);
    }
}
