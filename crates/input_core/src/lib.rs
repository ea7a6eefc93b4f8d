//! # input_core
//!
//! UI-agnostic single-line text primitive for rich input controls.
//!
//! This crate provides the host-side building blocks a rich input delegates to:
//! - [`InputId`]: an opaque identifier for a text control
//! - [`InputValueStore`]: value, revision and selection bookkeeping
//! - [`InputStore`]: the trait controls are written against
//! - [`SelectionRange`], [`SelectionDirection`], [`SelectMode`]: selection API types
//!
//! ## Design Principles
//!
//! The crate depends only on `std`. It does not lay out or measure text and
//! does not implement caret navigation, IME or clipboard handling; those stay
//! with the host. All offsets are UTF-8 byte offsets and are snapped to
//! character boundaries on the way in.

mod id;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use selection::{SelectMode, SelectionDirection, SelectionRange};
pub use store::{InputValueStore, RangeError};
pub use text::{clamp_to_char_boundary, filter_single_line, utf16_len};
pub use traits::InputStore;
