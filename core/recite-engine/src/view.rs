use recite_protocol::{GroupId, RevealState, TokenId};
use serde::Serialize;

/// What a host needs to draw one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub id: TokenId,
    pub character: char,
    pub is_masked: bool,
    pub is_punctuation: bool,
    pub is_line_break: bool,
    pub group: Option<GroupId>,
    /// State of the token's span, if it belongs to one.
    pub state: Option<RevealState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanView {
    pub group: GroupId,
    pub tokens: Vec<TokenId>,
    pub text: String,
    pub state: RevealState,
    pub clue: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub total: usize,
    pub masked: usize,
    pub clued: usize,
    pub revealed: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }
}
