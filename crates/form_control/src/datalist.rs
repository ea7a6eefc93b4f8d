//! Suggestion lists referenced by the `list` attribute.

use std::collections::HashMap;

/// Resolves a datalist id to its option values.
///
/// The control only sees the host's datalists through this trait; it copies
/// the options while focused and drops the copy on blur.
pub trait DatalistSource {
    fn datalist(&self, id: &str) -> Option<Vec<String>>;
}

impl DatalistSource for HashMap<String, Vec<String>> {
    fn datalist(&self, id: &str) -> Option<Vec<String>> {
        self.get(id).cloned()
    }
}

/// No datalists at all.
impl DatalistSource for () {
    fn datalist(&self, _id: &str) -> Option<Vec<String>> {
        None
    }
}
