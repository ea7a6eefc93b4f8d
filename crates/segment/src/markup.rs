//! HTML rendering of segments.
//!
//! Plain segments become escaped text. Group segments are wrapped in
//! `<b part="group-N">` so that style rules can target each capture group
//! independently.

use crate::split::{Segment, SegmentKind};
use memchr::memchr2;
use std::borrow::Cow;

/// Escape the markup-reserved characters `&` and `<`.
///
/// Returns the input unchanged (borrowed) when neither character occurs.
///
/// ```
/// use segment::html_encode;
///
/// assert_eq!(html_encode("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(html_encode("plain"), "plain");
/// ```
pub fn html_encode(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr2(b'&', b'<', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    let mut rest = &text[first..];
    while let Some(pos) = memchr2(b'&', b'<', rest.as_bytes()) {
        out.push_str(&rest[..pos]);
        match rest.as_bytes()[pos] {
            b'&' => out.push_str("&amp;"),
            _ => out.push_str("&lt;"),
        }
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// The `part` name exposed for capture group `group`.
#[inline]
pub fn part_name(group: usize) -> String {
    format!("group-{group}")
}

/// Render segments as HTML for the output region.
pub fn render_markup(segments: &[Segment<'_>]) -> String {
    let capacity = segments.iter().map(|s| s.text.len() + 24).sum();
    let mut out = String::with_capacity(capacity);
    for segment in segments {
        match segment.kind {
            SegmentKind::Plain => out.push_str(&html_encode(segment.text)),
            SegmentKind::Group(i) => {
                out.push_str("<b part=\"");
                out.push_str(&part_name(i));
                out.push_str("\">");
                out.push_str(&html_encode(segment.text));
                out.push_str("</b>");
            }
        }
    }
    out
}
