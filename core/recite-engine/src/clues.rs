use recite_protocol::{Generation, GroupId};
use serde::{Deserialize, Serialize};

/// One outstanding clue request, tagged with the segmentation it was cut from.
///
/// `texts[i]` is the text of `groups[i]`; a generator answers positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRequest {
    pub generation: Generation,
    pub groups: Vec<GroupId>,
    pub texts: Vec<String>,
}

impl ClueRequest {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Maps a positional answer back onto group ids.
    ///
    /// Extra or missing entries are dropped; the aligned prefix is kept.
    pub fn answer(&self, clues: Vec<String>) -> ClueBatch {
        if clues.len() != self.groups.len() {
            tracing::warn!(
                expected = self.groups.len(),
                received = clues.len(),
                generation = %self.generation,
                "clue response length does not match request"
            );
        }

        ClueBatch {
            generation: self.generation,
            clues: self.groups.iter().copied().zip(clues).collect(),
        }
    }
}

/// Clues keyed by group, still carrying the generation they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueBatch {
    pub generation: Generation,
    pub clues: Vec<(GroupId, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ClueOutcome {
    Applied { promoted: usize },
    /// The batch was cut from an older segmentation and was dropped.
    Stale { batch: Generation, current: Generation },
}
