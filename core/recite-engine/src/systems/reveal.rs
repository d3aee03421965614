use hecs::{Entity, World};
use recite_protocol::RevealState;

use crate::components::Reveal;

/// Advances one span. Returns the new state, or `None` if the entity is gone.
pub fn activate(world: &mut World, span: Entity, has_clue: bool) -> Option<RevealState> {
    let mut reveal = world.get::<&mut Reveal>(span).ok()?;
    reveal.state = reveal.state.advance(has_clue);
    Some(reveal.state)
}

/// Puts every span back to `MASKED`. Returns how many actually changed.
pub fn reset_all(world: &mut World) -> usize {
    let mut changed = 0;
    for (_id, reveal) in world.query_mut::<&mut Reveal>() {
        if reveal.state != RevealState::Masked {
            reveal.state = RevealState::Masked;
            changed += 1;
        }
    }
    changed
}
