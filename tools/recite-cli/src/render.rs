use recite_engine::view::{Progress, SpanView, TokenView};
use recite_engine::Trainer;
use recite_protocol::{DifficultyLevel, Generation, RevealState};
use serde::Serialize;

/// Draws the passage the way a learner would see it: placeholders for
/// masked spans, the clue once per clued span, text everywhere else.
pub fn render_passage(tokens: &[TokenView], spans: &[SpanView], placeholder: char) -> String {
    let mut out = String::new();

    for token in tokens {
        match (token.group, token.state) {
            (Some(_), Some(RevealState::Masked)) => out.push(placeholder),
            (Some(group), Some(RevealState::Clued)) => {
                if group.get() == token.id.get() {
                    let clue = spans
                        .iter()
                        .find(|s| s.group == group)
                        .and_then(|s| s.clue.as_deref())
                        .unwrap_or_default();
                    out.push_str(clue);
                }
            }
            _ => out.push(token.character),
        }
    }

    out
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub generation: Generation,
    pub level: DifficultyLevel,
    pub rendered: String,
    pub tokens: Vec<TokenView>,
    pub spans: Vec<SpanView>,
    pub progress: Progress,
}

impl Report {
    pub fn of(trainer: &Trainer) -> Self {
        let engine = trainer.engine();
        let tokens = engine.tokens();
        let spans = engine.spans();
        Self {
            generation: engine.generation(),
            level: trainer.level(),
            rendered: render_passage(&tokens, &spans, trainer.placeholder()),
            tokens,
            spans,
            progress: engine.progress(),
        }
    }
}
