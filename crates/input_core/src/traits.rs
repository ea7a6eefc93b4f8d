//! Input store trait defining the interface of the host text primitive.
//!
//! A rich input control never edits text itself; it reads the value and
//! forwards selection and range calls through this trait. Tests and headless
//! hosts use [`InputValueStore`](crate::InputValueStore); a real frontend can
//! back the trait with its own native text widget.

use crate::id::InputId;
use crate::selection::{SelectMode, SelectionDirection, SelectionRange};
use crate::store::RangeError;

pub trait InputStore {
    // =========================================================================
    // Value
    // =========================================================================

    /// Ensure an input entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Returns the stored value for this input, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Overwrite the value; the caret moves to the end.
    fn set(&mut self, id: InputId, value: String);

    /// Monotonic revision counter for the input's value.
    fn value_revision(&self, id: InputId) -> u64;

    // =========================================================================
    // Selection
    // =========================================================================

    /// Current selection and direction.
    fn selection(&self, id: InputId) -> Option<(SelectionRange, SelectionDirection)>;

    fn set_selection_range(
        &mut self,
        id: InputId,
        start: usize,
        end: usize,
        direction: SelectionDirection,
    );

    fn select_all(&mut self, id: InputId);

    fn set_range_text(
        &mut self,
        id: InputId,
        replacement: &str,
        range: Option<(usize, usize)>,
        mode: SelectMode,
    ) -> Result<(), RangeError>;
}

// =============================================================================
// Implementation for InputValueStore
// =============================================================================

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }

    #[inline]
    fn value_revision(&self, id: InputId) -> u64 {
        crate::store::InputValueStore::value_revision(self, id)
    }

    #[inline]
    fn selection(&self, id: InputId) -> Option<(SelectionRange, SelectionDirection)> {
        crate::store::InputValueStore::selection(self, id)
    }

    #[inline]
    fn set_selection_range(
        &mut self,
        id: InputId,
        start: usize,
        end: usize,
        direction: SelectionDirection,
    ) {
        crate::store::InputValueStore::set_selection_range(self, id, start, end, direction)
    }

    #[inline]
    fn select_all(&mut self, id: InputId) {
        crate::store::InputValueStore::select_all(self, id)
    }

    #[inline]
    fn set_range_text(
        &mut self,
        id: InputId,
        replacement: &str,
        range: Option<(usize, usize)>,
        mode: SelectMode,
    ) -> Result<(), RangeError> {
        crate::store::InputValueStore::set_range_text(self, id, replacement, range, mode)
    }
}
