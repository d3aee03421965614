#![no_std] // Shared with the wasm platform

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod flags;
pub mod ids;
pub mod level;
pub mod reveal;

// Re-export core types for convenience
pub use flags::TokenFlags;
pub use ids::{Generation, GroupId, TokenId};
pub use level::{DifficultyLevel, LevelError};
pub use reveal::RevealState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_cycle_with_clue() {
        let mut state = RevealState::Masked;
        let mut seen = [RevealState::Masked; 4];
        for slot in seen.iter_mut() {
            state = state.advance(true);
            *slot = state;
        }
        assert_eq!(
            seen,
            [RevealState::Clued, RevealState::Revealed, RevealState::Masked, RevealState::Clued]
        );
    }

    #[test]
    fn test_reveal_cycle_without_clue() {
        let state = RevealState::Masked.advance(false);
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(state.advance(false), RevealState::Masked);
        // Clued always moves on, clue or not
        assert_eq!(RevealState::Clued.advance(false), RevealState::Revealed);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("2".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Prediction));
        assert_eq!("Generation".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Generation));
        assert_eq!(DifficultyLevel::try_from(4), Err(LevelError::OutOfRange(4)));
        assert_eq!("hard".parse::<DifficultyLevel>(), Err(LevelError::UnknownName));
    }

    #[test]
    fn test_structural_flags() {
        assert!(TokenFlags::LINE_BREAK.is_structural());
        assert!((TokenFlags::WHITESPACE).is_structural());
        assert!(!TokenFlags::MASKED.is_structural());
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<GroupId>(), 4);
        assert_eq!(GroupId::led_by(TokenId(7)), GroupId(7));
        assert_eq!(Generation(1).next(), Generation(2));
    }
}
