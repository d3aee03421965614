use recite_protocol::GroupId;

use crate::token::{Span, Token};

/// Coalesces maximal runs of masked, non-structural tokens into spans and
/// stamps each member with its span's group id.
pub fn group_spans(tokens: &mut [Token]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, GroupId)> = None;

    for i in 0..tokens.len() {
        let maskable = tokens[i].is_masked() && !tokens[i].is_structural();

        if maskable {
            let (_, group) = *open.get_or_insert((i, GroupId::led_by(tokens[i].id)));
            tokens[i].group = Some(group);
        } else {
            tokens[i].group = None;
            if let Some((start, group)) = open.take() {
                spans.push(Span {
                    group,
                    tokens: start..i,
                });
            }
        }
    }

    if let Some((start, group)) = open {
        spans.push(Span {
            group,
            tokens: start..tokens.len(),
        });
    }

    spans
}
