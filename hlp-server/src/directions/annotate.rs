//! Instruction annotation.
//!
//! Finds every directional phrase in an instruction and records it as a
//! byte-offset span over the original text. Precedence is per character
//! range, not per string: a roundabout phrase and a left-turn phrase can
//! both be spanned in one instruction, but once a range is covered by a
//! higher-precedence match it is never re-annotated.

use serde::Serialize;

use super::Direction;
use super::classify::classify;
use super::phrases::PHRASE_TABLE;

/// A matched directional phrase inside an instruction.
///
/// `start`/`end` are byte offsets into the original text, always on char
/// boundaries, with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// The category of the matched phrase.
    pub direction: Direction,
}

/// A display-ready instruction: the raw text plus derived annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedInstruction {
    /// The original instruction, unmodified.
    pub text: String,
    /// Overall category, as [`classify`] reports it.
    pub direction: Option<Direction>,
    /// Matched phrase spans, sorted by start offset, non-overlapping.
    pub spans: Vec<Span>,
}

/// Annotate a driving instruction with its directional phrase spans.
///
/// Applies the same ordered phrase table as [`classify`], so the overall
/// `direction` and the span list always agree: the span list is empty
/// exactly when classification returns `None`. Total; never fails.
///
/// # Examples
///
/// ```
/// use hlp_server::directions::{Direction, annotate};
///
/// let ann = annotate("Tourner à droite");
/// assert_eq!(ann.direction, Some(Direction::Right));
/// assert_eq!(ann.spans.len(), 1);
/// assert_eq!(&ann.text[ann.spans[0].start..ann.spans[0].end], "Tourner à droite");
/// ```
pub fn annotate(text: &str) -> AnnotatedInstruction {
    let (lower, offsets) = lowercase_with_offsets(text);

    let mut spans: Vec<Span> = Vec::new();
    for (direction, phrases) in PHRASE_TABLE {
        for phrase in *phrases {
            for (at, matched) in lower.match_indices(phrase) {
                let start = offsets[at];
                let end = offsets[at + matched.len()];
                if spans.iter().any(|s| s.start < end && start < s.end) {
                    continue;
                }
                spans.push(Span {
                    start,
                    end,
                    direction: *direction,
                });
            }
        }
    }
    spans.sort_by_key(|s| s.start);

    AnnotatedInstruction {
        text: text.to_string(),
        direction: classify(text),
        spans,
    }
}

/// Lower-case `text` and map every byte of the result back to the byte
/// offset of the original char it came from.
///
/// `to_lowercase` can change byte lengths (and a char can lower-case to
/// several chars), so spans found in the lowered text cannot be used as
/// offsets into the original directly. The returned vector has one entry
/// per byte of the lowered string plus a trailing `text.len()` sentinel,
/// so any match boundary maps to a valid char boundary of `text`.
fn lowercase_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut lower = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len() + 1);

    for (idx, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            let before = lower.len();
            lower.push(low);
            for _ in before..lower.len() {
                offsets.push(idx);
            }
        }
    }
    offsets.push(text.len());

    (lower, offsets)
}
