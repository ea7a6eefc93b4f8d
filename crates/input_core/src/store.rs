//! Central store for input values and selections.
//!
//! This store is UI-agnostic: it does not perform layout, text measurement or
//! caret navigation. It is the single-line text primitive a rich input control
//! delegates to: the value lives here, and so does the selection that script
//! APIs (`setSelectionRange`, `setRangeText`, `select`) manipulate.

use crate::id::InputId;
use crate::selection::{SelectMode, SelectionDirection, SelectionRange};
use crate::state::InputState;
use crate::text::{clamp_to_char_boundary, filter_single_line};
use std::collections::HashMap;

/// Rejected range arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// `start` is greater than `end`.
    StartAfterEnd { start: usize, end: usize },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::StartAfterEnd { start, end } => {
                write!(f, "range start {start} is greater than range end {end}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Central store for text control state.
///
/// # Example
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.insert_text(id, " World");
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    /// Create a new, empty input value store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this input.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the stored value for this input, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Monotonic revision counter for the input's value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Current selection and its direction. A collapsed range is the caret.
    pub fn selection(&self, id: InputId) -> Option<(SelectionRange, SelectionDirection)> {
        self.values.get(&id).map(|s| (s.selection, s.direction))
    }

    /// Set/overwrite the value for this input.
    ///
    /// Newlines are stripped. The caret moves to the end and any selection is
    /// cleared.
    pub fn set(&mut self, id: InputId, value: String) {
        let value = if value.contains(['\n', '\r']) {
            filter_single_line(&value).into_owned()
        } else {
            value
        };
        let value_rev = self
            .values
            .get(&id)
            .map(|s| s.value_rev.wrapping_add(1))
            .unwrap_or(0);
        let mut st = InputState::with_value(value);
        st.value_rev = value_rev;
        self.values.insert(id, st);
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        if !self.values.contains_key(&id) {
            self.set(id, initial);
        }
    }

    /// Forget the state of one input.
    pub fn remove(&mut self, id: InputId) {
        self.values.remove(&id);
    }

    /// Clear all stored input state.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Insert text at the caret, replacing the selection if there is one.
    ///
    /// Newlines are stripped. The caret ends up after the inserted text.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        clamp_state(st);
        let s = filter_single_line(s);
        let sel = st.selection;
        if s.is_empty() && sel.is_empty() {
            return;
        }

        st.value.replace_range(sel.start..sel.end, &s);
        st.selection = SelectionRange::caret(sel.start + s.len());
        st.direction = SelectionDirection::None;
        mark_text_dirty(st);
    }

    /// Set the selection, following `setSelectionRange` semantics.
    ///
    /// Offsets past the end clamp to the end; a `start` past `end` collapses
    /// the selection at `end`.
    pub fn set_selection_range(
        &mut self,
        id: InputId,
        start: usize,
        end: usize,
        direction: SelectionDirection,
    ) {
        let st = self.values.entry(id).or_default();
        let end = clamp_to_char_boundary(&st.value, end);
        let start = clamp_to_char_boundary(&st.value, start).min(end);
        st.selection = SelectionRange { start, end };
        st.direction = direction;
    }

    /// Select all text in the input.
    pub fn select_all(&mut self, id: InputId) {
        let st = self.values.entry(id).or_default();
        st.selection = SelectionRange::new(0, st.value.len());
        st.direction = SelectionDirection::None;
    }

    /// Replace a range of the value, following `setRangeText` semantics.
    ///
    /// With `range == None` the current selection is replaced. Offsets past
    /// the end clamp to the end. The resulting selection depends on `mode`.
    pub fn set_range_text(
        &mut self,
        id: InputId,
        replacement: &str,
        range: Option<(usize, usize)>,
        mode: SelectMode,
    ) -> Result<(), RangeError> {
        if let Some((start, end)) = range
            && start > end
        {
            return Err(RangeError::StartAfterEnd { start, end });
        }

        let st = self.values.entry(id).or_default();
        clamp_state(st);

        let (start, end) = match range {
            Some((start, end)) => (
                clamp_to_char_boundary(&st.value, start),
                clamp_to_char_boundary(&st.value, end),
            ),
            None => (st.selection.start, st.selection.end),
        };

        let replacement = filter_single_line(replacement);
        st.value.replace_range(start..end, &replacement);
        mark_text_dirty(st);

        let new_end = start + replacement.len();
        let old_len = end - start;
        match mode {
            SelectMode::Select => {
                st.selection = SelectionRange::new(start, new_end);
                st.direction = SelectionDirection::None;
            }
            SelectMode::Start => {
                st.selection = SelectionRange::caret(start);
                st.direction = SelectionDirection::None;
            }
            SelectMode::End => {
                st.selection = SelectionRange::caret(new_end);
                st.direction = SelectionDirection::None;
            }
            SelectMode::Preserve => {
                let shift = |pos: usize, inside: usize| {
                    if pos > end {
                        pos - old_len + replacement.len()
                    } else if pos > start {
                        inside
                    } else {
                        pos
                    }
                };
                let sel = st.selection;
                st.selection =
                    SelectionRange::new(shift(sel.start, start), shift(sel.end, new_end));
            }
        }
        clamp_state(st);
        Ok(())
    }
}

// --- Internal helper functions ---

fn clamp_state(st: &mut InputState) {
    let end = clamp_to_char_boundary(&st.value, st.selection.end);
    let start = clamp_to_char_boundary(&st.value, st.selection.start).min(end);
    st.selection = SelectionRange { start, end };
}

fn mark_text_dirty(st: &mut InputState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
