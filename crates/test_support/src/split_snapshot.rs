use crate::escape_text;
use segment::{Segment, SegmentKind};

/// Stable one-line-per-segment rendering used by golden split fixtures.
///
/// `plain "text"` for plain segments, `groupN "text"` for group segments.
pub fn format_segments(segments: &[Segment<'_>]) -> Vec<String> {
    segments.iter().map(format_segment).collect()
}

pub fn format_segment(segment: &Segment<'_>) -> String {
    let text = escape_text(segment.text);
    match segment.kind {
        SegmentKind::Plain => format!("plain \"{text}\""),
        SegmentKind::Group(i) => format!("group{i} \"{text}\""),
    }
}

/// Check the splitter laws on an arbitrary split of `value`.
///
/// Returns a description of the first violated law.
pub fn check_split_laws(value: &str, segments: &[Segment<'_>]) -> Result<(), String> {
    let mut cursor = 0usize;
    for (i, segment) in segments.iter().enumerate() {
        if segment.start != cursor {
            return Err(format!(
                "segment #{i} starts at {} but previous segment ended at {cursor}",
                segment.start
            ));
        }
        if value.get(segment.range()) != Some(segment.text) {
            return Err(format!(
                "segment #{i} text does not match value[{}..{}]",
                segment.start,
                segment.end()
            ));
        }
        cursor = segment.end();
    }
    if cursor != value.len() {
        return Err(format!(
            "segments cover {cursor} bytes of a {}-byte value",
            value.len()
        ));
    }
    let joined: String = segments.iter().map(|s| s.text).collect();
    if joined != value {
        return Err(format!(
            "concatenation \"{}\" differs from value \"{}\"",
            escape_text(&joined),
            escape_text(value)
        ));
    }
    Ok(())
}
