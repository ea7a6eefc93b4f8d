//! UTF-8 helpers for single-line values.
//!
//! Offsets handed to the store come from outside (script calls, host events),
//! so every offset is snapped to a character boundary before it touches the
//! value.

use std::borrow::Cow;

/// Snap `index` down to the nearest char boundary of `s`, clamping to `s.len()`.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "x€"; // '€' occupies bytes 1..4
/// assert_eq!(clamp_to_char_boundary(s, 3), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 9), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Drop CR and LF so `s` fits a single-line control. Borrows when there is
/// nothing to drop.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("one\r\ntwo"), "onetwo");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if s.contains(['\n', '\r']) {
        Cow::Owned(s.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(s)
    }
}

/// Length of `s` in UTF-16 code units, the unit form-control limits count in.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_snaps_inside_multibyte_chars() {
        let s = "é😀";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 1), 0);
        assert_eq!(clamp_to_char_boundary(s, 2), 2);
        assert_eq!(clamp_to_char_boundary(s, 5), 2);
        assert_eq!(clamp_to_char_boundary(s, 6), 6);
        assert_eq!(clamp_to_char_boundary("", 3), 0);
    }

    #[test]
    fn single_line_filter_borrows_clean_input() {
        assert!(matches!(filter_single_line("clean"), Cow::Borrowed("clean")));
        assert_eq!(filter_single_line("\r\n"), "");
        assert_eq!(filter_single_line("a\rb\nc"), "abc");
    }

    #[test]
    fn utf16_len_counts_surrogate_pairs() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("€"), 1);
        assert_eq!(utf16_len("😀"), 2);
    }
}
