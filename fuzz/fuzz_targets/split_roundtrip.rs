#![no_main]

use libfuzzer_sys::fuzz_target;
use segment::{SegmentKind, StylePattern, render_markup, split};

// Input layout: `pattern \0 value`. Without a separator the whole input is the
// value and no pattern is set.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (pattern, value) = match text.split_once('\0') {
        Some((p, v)) => (StylePattern::try_compile(p), v),
        None => (None, text),
    };

    let segments = split(value, pattern.as_ref());

    let mut cursor = 0;
    let mut joined = String::with_capacity(value.len());
    for segment in &segments {
        assert_eq!(segment.start, cursor, "segments must be contiguous");
        assert!(value.is_char_boundary(segment.start));
        assert!(value.is_char_boundary(segment.end()));
        if let SegmentKind::Group(i) = segment.kind {
            let groups = pattern.as_ref().map_or(0, StylePattern::group_count);
            assert!(i >= 1 && i <= groups, "group index {i} out of range");
        } else {
            assert!(
                !segment.text.is_empty() || segments.len() == 1,
                "only a lone plain segment may be empty"
            );
        }
        joined.push_str(segment.text);
        cursor = segment.end();
    }
    assert_eq!(joined, value);

    if pattern.as_ref().is_none_or(|p| !p.is_full_match(value)) {
        assert!(segments.len() <= 1);
    }

    let _ = render_markup(&segments);
});
