//! Internal input state representation.
//!
//! This module contains the per-input state that is stored in the InputValueStore.

use crate::selection::{SelectionDirection, SelectionRange};

/// Internal state for a single text control.
///
/// This is not exposed publicly; it is managed by [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    /// The current text value.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Selection as byte offsets into `value` (UTF-8 char boundaries).
    /// A collapsed selection is the caret.
    pub selection: SelectionRange,

    pub direction: SelectionDirection,
}

impl InputState {
    pub fn with_value(value: String) -> Self {
        let end = value.len();
        Self {
            value,
            value_rev: 0,
            selection: SelectionRange::caret(end),
            direction: SelectionDirection::None,
        }
    }
}
