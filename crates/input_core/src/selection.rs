//! Text selection representation.

/// Selected byte range of a value, `start <= end`, both on char boundaries
/// when handed out by [`InputValueStore`](crate::InputValueStore).
///
/// A collapsed range is the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Range between `a` and `b`, in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Selected text, or `None` if the range does not address `value`.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.get(self.start..self.end)
    }
}

/// Direction in which a selection was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

impl SelectionDirection {
    /// Parse a direction keyword; anything unrecognized means [`SelectionDirection::None`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            s if s.eq_ignore_ascii_case("forward") => SelectionDirection::Forward,
            s if s.eq_ignore_ascii_case("backward") => SelectionDirection::Backward,
            _ => SelectionDirection::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionDirection::Forward => "forward",
            SelectionDirection::Backward => "backward",
            SelectionDirection::None => "none",
        }
    }
}

/// Where the selection lands after a range replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Select the inserted text.
    Select,
    /// Collapse the selection before the inserted text.
    Start,
    /// Collapse the selection after the inserted text.
    End,
    /// Keep the selection, shifted around the replaced range.
    #[default]
    Preserve,
}

impl SelectMode {
    /// Parse a select-mode keyword; anything unrecognized means [`SelectMode::Preserve`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            s if s.eq_ignore_ascii_case("select") => SelectMode::Select,
            s if s.eq_ignore_ascii_case("start") => SelectMode::Start,
            s if s.eq_ignore_ascii_case("end") => SelectMode::End,
            _ => SelectMode::Preserve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_ordered_whatever_the_argument_order() {
        let range = SelectionRange::new(7, 2);
        assert_eq!((range.start, range.end), (2, 7));
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
        assert!(SelectionRange::caret(4).is_empty());
    }

    #[test]
    fn slice_checks_bounds() {
        assert_eq!(SelectionRange::new(2, 4).slice("a€b"), None);
        assert_eq!(SelectionRange::new(1, 4).slice("a€b"), Some("€"));
        assert_eq!(SelectionRange::new(3, 9).slice("abc"), None);
    }

    #[test]
    fn direction_parse_falls_back_to_none() {
        assert_eq!(SelectionDirection::parse("forward"), SelectionDirection::Forward);
        assert_eq!(SelectionDirection::parse(" Backward "), SelectionDirection::Backward);
        assert_eq!(SelectionDirection::parse("sideways"), SelectionDirection::None);
        assert_eq!(SelectionDirection::Backward.as_str(), "backward");
    }

    #[test]
    fn select_mode_parse_falls_back_to_preserve() {
        assert_eq!(SelectMode::parse("select"), SelectMode::Select);
        assert_eq!(SelectMode::parse("END"), SelectMode::End);
        assert_eq!(SelectMode::parse(""), SelectMode::Preserve);
    }
}
