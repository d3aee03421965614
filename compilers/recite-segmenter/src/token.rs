use std::ops::Range;

use recite_protocol::{GroupId, TokenFlags, TokenId};
use serde::Serialize;

/// One character of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub id: TokenId,
    pub character: char,
    /// Byte offset into the segmented text.
    pub offset: usize,
    pub flags: TokenFlags,
    /// Maskable span this token belongs to. `None` for every unmasked token.
    pub group: Option<GroupId>,
}

impl Token {
    pub fn is_masked(&self) -> bool {
        self.flags.contains(TokenFlags::MASKED)
    }

    pub fn is_punctuation(&self) -> bool {
        self.flags.contains(TokenFlags::PUNCTUATION)
    }

    pub fn is_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::LINE_BREAK)
    }

    pub fn is_whitespace(&self) -> bool {
        self.flags.contains(TokenFlags::WHITESPACE)
    }

    pub fn is_structural(&self) -> bool {
        self.flags.is_structural()
    }
}

/// A maximal run of masked tokens, revealed as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub group: GroupId,
    /// Index range into the token list. Never empty.
    pub tokens: Range<usize>,
}

impl Span {
    pub fn member_ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens.clone().map(|i| TokenId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: TokenId) -> bool {
        self.tokens.contains(&(token.0 as usize))
    }

    pub fn text(&self, tokens: &[Token]) -> String {
        tokens[self.tokens.clone()].iter().map(|t| t.character).collect()
    }
}
