use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-token classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct TokenFlags: u8 {
        const MASKED = 1;
        const PUNCTUATION = 2;
        const LINE_BREAK = 4;
        const WHITESPACE = 8;

        const STRUCTURAL = Self::PUNCTUATION.bits() | Self::LINE_BREAK.bits() | Self::WHITESPACE.bits();
    }
}

impl TokenFlags {
    pub fn is_structural(self) -> bool {
        self.intersects(Self::STRUCTURAL)
    }
}
