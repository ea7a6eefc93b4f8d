//! # segment
//!
//! Regex-driven colourization core for rich text inputs.
//!
//! This crate provides:
//! - [`StylePattern`]: a whole-string-anchored pattern with capturing groups
//! - [`MatchResult`]: per-group byte offsets of a full match, or no match
//! - [`split`] / [`split_groups`]: the splitter turning a value into ordered
//!   [`Segment`]s (plain text and capture-group text)
//! - [`markup`]: HTML rendering of segments with text escaping
//!
//! ## Laws
//!
//! For every value and every pattern (including no pattern):
//! - concatenating the segment texts reproduces the value exactly;
//! - segments are ordered by start offset and never overlap;
//! - without a full match the result is a single plain segment.
//!
//! ```
//! use segment::{SegmentKind, StylePattern, split};
//!
//! let pattern = StylePattern::compile(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
//! let segments = split("2024-01-15", Some(&pattern));
//!
//! let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         SegmentKind::Group(1),
//!         SegmentKind::Plain,
//!         SegmentKind::Group(2),
//!         SegmentKind::Plain,
//!         SegmentKind::Group(3),
//!     ]
//! );
//! ```

pub mod markup;
mod pattern;
mod split;

pub use markup::{html_encode, part_name, render_markup};
pub use pattern::{MatchResult, PatternError, StylePattern};
pub use split::{Segment, SegmentKind, SegmentSpan, split, split_groups};
