#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-span display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RevealState {
    /// Placeholder shown.
    #[default]
    Masked,
    /// Clue shown in place of the text.
    Clued,
    /// Original characters shown.
    Revealed,
}

impl RevealState {
    /// State after one activation. `CLUED` is only entered when a clue exists.
    pub const fn advance(self, has_clue: bool) -> Self {
        match self {
            RevealState::Masked if has_clue => RevealState::Clued,
            RevealState::Masked => RevealState::Revealed,
            RevealState::Clued => RevealState::Revealed,
            RevealState::Revealed => RevealState::Masked,
        }
    }

    pub const fn is_hidden(self) -> bool {
        !matches!(self, RevealState::Revealed)
    }
}
