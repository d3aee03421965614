use std::ops::Range;

use recite_protocol::{GroupId, RevealState};

/// The tokens a span entity stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMembers {
    pub group: GroupId,
    pub tokens: Range<usize>,
}

/// Current display state of a span. Member tokens read it from here, so a
/// span can never be half revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    pub state: RevealState,
}
