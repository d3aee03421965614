use nom::{
    branch::alt,
    character::complete::{anychar, satisfy},
    combinator::map,
    IResult,
};
use once_cell::sync::Lazy;
use recite_protocol::TokenFlags;
use regex::Regex;

/// Classification of a character, or of a unit built from characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Candidate for masking.
    Eligible,
    Punctuation,
    LineBreak,
    Whitespace,
}

impl UnitKind {
    pub fn is_structural(self) -> bool {
        self != UnitKind::Eligible
    }

    pub fn flags(self) -> TokenFlags {
        match self {
            UnitKind::Eligible => TokenFlags::empty(),
            UnitKind::Punctuation => TokenFlags::PUNCTUATION,
            UnitKind::LineBreak => TokenFlags::LINE_BREAK,
            UnitKind::Whitespace => TokenFlags::WHITESPACE,
        }
    }
}

pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

pub fn is_inline_space(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// Any character in a Unicode punctuation category (Pc, Pd, Ps, Pe, Pi, Pf, Po).
fn is_unicode_punctuation(c: char) -> bool {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\A\p{P}\z").expect("Valid punctuation category regex"));
    let mut buf = [0u8; 4];
    PATTERN.is_match(c.encode_utf8(&mut buf))
}

/// ASCII punctuation and symbols, the marks and symbol forms Chinese text
/// draws on, and every other script's punctuation by general category.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii_punctuation() {
        return true;
    }
    let listed = match c {
        '¡' | '§' | '«' | '¶' | '·' | '»' | '¿' => true,
        // General Punctuation, minus the spacing and format characters
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' => true,
        // CJK Symbols and Punctuation (U+3000 is a space)
        '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}' => true,
        '\u{30FB}' => true,
        // Vertical, compatibility and small forms
        '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE4F}' | '\u{FE50}'..='\u{FE6B}' => true,
        // Fullwidth ASCII punctuation
        '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}' => true,
        _ => false,
    };
    listed || is_unicode_punctuation(c)
}

pub fn classify(c: char) -> UnitKind {
    if is_line_break(c) {
        UnitKind::LineBreak
    } else if is_inline_space(c) {
        UnitKind::Whitespace
    } else if is_punctuation(c) {
        UnitKind::Punctuation
    } else {
        UnitKind::Eligible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedChar {
    /// Byte offset into the scanned text.
    pub offset: usize,
    pub character: char,
    pub kind: UnitKind,
}

fn scan_one(input: &str) -> IResult<&str, (char, UnitKind)> {
    alt((
        map(satisfy(is_line_break), |c| (c, UnitKind::LineBreak)),
        map(satisfy(is_inline_space), |c| (c, UnitKind::Whitespace)),
        map(satisfy(is_punctuation), |c| (c, UnitKind::Punctuation)),
        map(anychar, |c| (c, UnitKind::Eligible)),
    ))(input)
}

/// Classifies every character of `original_input`, in order. Nothing is skipped.
pub fn scan_chars(original_input: &str) -> Vec<ScannedChar> {
    let mut input = original_input;
    let mut result = Vec::with_capacity(original_input.len());

    while !input.is_empty() {
        match scan_one(input) {
            Ok((next_input, (character, kind))) => {
                let offset = original_input.len() - input.len();
                result.push(ScannedChar {
                    offset,
                    character,
                    kind,
                });
                input = next_input;
            }
            // anychar only fails on empty input
            Err(_) => break,
        }
    }

    result
}
