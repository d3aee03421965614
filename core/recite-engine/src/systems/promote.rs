use hecs::{Entity, World};
use recite_protocol::RevealState;

use crate::components::Reveal;

/// Moves the given spans from `MASKED` to `CLUED`. Spans the user has
/// already moved past are left alone. Returns how many were promoted.
pub fn promote_masked(world: &mut World, spans: impl IntoIterator<Item = Entity>) -> usize {
    let mut promoted = 0;
    for span in spans {
        if let Ok(mut reveal) = world.get::<&mut Reveal>(span) {
            if reveal.state == RevealState::Masked {
                reveal.state = RevealState::Clued;
                promoted += 1;
            }
        }
    }
    promoted
}
