use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClueError {
    #[error("clue service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed clue data: {0}")]
    Malformed(String),

    #[error("clue service returned no clues")]
    Empty,
}

impl From<serde_json::Error> for ClueError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}

/// Produces one short pictographic clue per span text.
///
/// The answer is positional: `result[i]` belongs to `span_texts[i]`.
pub trait ClueGenerator {
    fn generate(&self, span_texts: &[String]) -> Result<Vec<String>, ClueError>;
}

/// Answers from a fixed text-to-clue table. Unknown texts get an empty clue.
#[derive(Debug, Clone, Default)]
pub struct LookupClues {
    table: HashMap<String, String>,
}

impl LookupClues {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Reads a JSON object mapping span text to clue.
    pub fn from_json(json: &str) -> Result<Self, ClueError> {
        let table: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(table))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ClueGenerator for LookupClues {
    fn generate(&self, span_texts: &[String]) -> Result<Vec<String>, ClueError> {
        let clues: Vec<String> = span_texts
            .iter()
            .map(|text| self.table.get(text).cloned().unwrap_or_default())
            .collect();

        if clues.iter().all(String::is_empty) {
            return Err(ClueError::Empty);
        }
        Ok(clues)
    }
}
