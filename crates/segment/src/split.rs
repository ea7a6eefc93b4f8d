//! The segment splitter.
//!
//! Turns a value and the capture-group offsets of a full match into an ordered,
//! gap-free sequence of plain and group segments.

use crate::pattern::{MatchResult, StylePattern};
use std::ops::Range;

/// What a segment of the value represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Text outside of any emitted capture group.
    Plain,
    /// Text captured by the group with this 1-based index.
    Group(usize),
}

impl SegmentKind {
    /// The 1-based capture group index, if this is a group segment.
    #[inline]
    pub fn group(self) -> Option<usize> {
        match self {
            SegmentKind::Plain => None,
            SegmentKind::Group(i) => Some(i),
        }
    }
}

/// A contiguous slice of the value, borrowed from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    /// Byte offset of the first byte of `text` in the value.
    pub start: usize,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Detach this segment from the value it borrows.
    #[inline]
    pub fn span(&self) -> SegmentSpan {
        SegmentSpan {
            kind: self.kind,
            range: self.range(),
        }
    }
}

/// Owned form of a [`Segment`], for callers that cache a split next to the
/// value it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentSpan {
    pub kind: SegmentKind,
    pub range: Range<usize>,
}

impl SegmentSpan {
    /// Re-attach this span to `value`.
    ///
    /// Returns `None` if `value` is not the string the span was computed from
    /// (out of bounds or off a char boundary).
    pub fn attach<'a>(&self, value: &'a str) -> Option<Segment<'a>> {
        let text = value.get(self.range.clone())?;
        Some(Segment {
            kind: self.kind,
            start: self.range.start,
            text,
        })
    }
}

/// Split `value` using `pattern`.
///
/// Without a pattern, or when the pattern does not match the whole value, the
/// result is a single plain segment holding the entire value.
///
/// A match that leaves nothing to emit yields no segments at all: a groupless
/// pattern such as `""` matching the empty value returns an empty `Vec`, not a
/// lone empty plain segment.
pub fn split<'a>(value: &'a str, pattern: Option<&StylePattern>) -> Vec<Segment<'a>> {
    match pattern {
        Some(pattern) => split_groups(value, &pattern.match_groups(value)),
        None => vec![whole(value)],
    }
}

/// Split `value` using already computed group offsets.
///
/// Groups are visited in ascending index order. A participating group emits the
/// plain text before it (if any) and then its own text; the cursor then moves
/// to the group's end. Zero-length groups still emit an empty group segment.
///
/// A group starting before the cursor is nested in, or overlaps, a group that
/// was already emitted and is skipped, as is a group whose offsets do not
/// address `value`. This keeps the output ordered and gap-free for any input.
pub fn split_groups<'a>(value: &'a str, result: &MatchResult) -> Vec<Segment<'a>> {
    let MatchResult::Groups(groups) = result else {
        return vec![whole(value)];
    };

    let mut out = Vec::with_capacity(groups.len() * 2 + 1);
    let mut cursor = 0usize;

    for (i, range) in groups.iter().enumerate() {
        let Some(range) = range else {
            continue;
        };
        if range.start < cursor || value.get(range.clone()).is_none() {
            log::trace!(
                target: "richinput.pattern",
                "skipping group {} at {}..{} (cursor {cursor})",
                i + 1,
                range.start,
                range.end
            );
            continue;
        }

        if range.start > cursor {
            out.push(Segment {
                kind: SegmentKind::Plain,
                start: cursor,
                text: &value[cursor..range.start],
            });
        }
        out.push(Segment {
            kind: SegmentKind::Group(i + 1),
            start: range.start,
            text: &value[range.clone()],
        });
        cursor = range.end;
    }

    if cursor < value.len() {
        out.push(Segment {
            kind: SegmentKind::Plain,
            start: cursor,
            text: &value[cursor..],
        });
    }

    out
}

#[inline]
fn whole(value: &str) -> Segment<'_> {
    Segment {
        kind: SegmentKind::Plain,
        start: 0,
        text: value,
    }
}
