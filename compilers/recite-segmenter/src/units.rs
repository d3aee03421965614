use std::ops::Range;

use crate::parser::{ScannedChar, UnitKind};

/// A run of scanned characters that the level policies treat as one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    /// Index range into the scanned characters.
    pub chars: Range<usize>,
}

/// One unit per character.
pub fn character_units(chars: &[ScannedChar]) -> Vec<Unit> {
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| Unit {
            kind: c.kind,
            chars: i..i + 1,
        })
        .collect()
}

/// UAX #29 word segments, each cut further at structural characters.
///
/// Returns `None` when word boundaries were not compiled in.
#[cfg(feature = "word-bounds")]
pub fn word_units(text: &str, chars: &[ScannedChar]) -> Option<Vec<Unit>> {
    use unicode_segmentation::UnicodeSegmentation;

    let mut units = Vec::new();
    let mut next = 0;

    for (start, segment) in text.split_word_bound_indices() {
        let end = start + segment.len();
        let first = next;
        while next < chars.len() && chars[next].offset < end {
            next += 1;
        }
        split_at_structural(chars, first..next, &mut units);
    }

    Some(units)
}

#[cfg(not(feature = "word-bounds"))]
pub fn word_units(_text: &str, _chars: &[ScannedChar]) -> Option<Vec<Unit>> {
    None
}

#[cfg_attr(not(feature = "word-bounds"), allow(dead_code))]
fn split_at_structural(chars: &[ScannedChar], range: Range<usize>, units: &mut Vec<Unit>) {
    let mut run: Option<usize> = None;

    for i in range.clone() {
        match chars[i].kind {
            UnitKind::Eligible => {
                run.get_or_insert(i);
            }
            kind => {
                if let Some(start) = run.take() {
                    units.push(Unit {
                        kind: UnitKind::Eligible,
                        chars: start..i,
                    });
                }
                units.push(Unit {
                    kind,
                    chars: i..i + 1,
                });
            }
        }
    }

    if let Some(start) = run {
        units.push(Unit {
            kind: UnitKind::Eligible,
            chars: start..range.end,
        });
    }
}
