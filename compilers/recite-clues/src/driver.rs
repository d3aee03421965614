use recite_engine::clues::ClueOutcome;
use recite_engine::Trainer;

use crate::generator::ClueGenerator;

/// Issues this generation's clue request and applies the answer.
///
/// Returns `None` when there was nothing to request or the generator
/// failed. A failure leaves every span as it was.
pub fn fetch_clues<G>(trainer: &mut Trainer, generator: &G) -> Option<ClueOutcome>
where
    G: ClueGenerator + ?Sized,
{
    let request = trainer.take_clue_request()?;

    match generator.generate(&request.texts) {
        Ok(clues) => {
            let outcome = trainer.apply_batch(request.answer(clues));
            tracing::debug!(?outcome, "applied clue response");
            Some(outcome)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                generation = %request.generation,
                spans = request.len(),
                "clue generation failed, spans stay masked"
            );
            None
        }
    }
}
