use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much of the passage is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DifficultyLevel {
    /// Every other unit hidden.
    #[default]
    Scaffolding = 1,
    /// Only the first unit of each clause visible.
    Prediction = 2,
    /// Only the first unit of each line visible.
    Generation = 3,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Scaffolding,
        DifficultyLevel::Prediction,
        DifficultyLevel::Generation,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            DifficultyLevel::Scaffolding => "scaffolding",
            DifficultyLevel::Prediction => "prediction",
            DifficultyLevel::Generation => "generation",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    OutOfRange(u8),
    UnknownName,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::OutOfRange(n) => write!(f, "difficulty level must be 1, 2 or 3, got {}", n),
            LevelError::UnknownName => write!(f, "unknown difficulty level name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LevelError {}

impl TryFrom<u8> for DifficultyLevel {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DifficultyLevel::Scaffolding),
            2 => Ok(DifficultyLevel::Prediction),
            3 => Ok(DifficultyLevel::Generation),
            other => Err(LevelError::OutOfRange(other)),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return DifficultyLevel::try_from(n);
        }
        DifficultyLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or(LevelError::UnknownName)
    }
}
