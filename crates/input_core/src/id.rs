//! Identifier for text controls held in an input store.

/// Opaque identifier for a text control within an [`InputValueStore`](crate::InputValueStore).
///
/// The value has no meaning inside this crate; hosts map their own element
/// handles onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}
