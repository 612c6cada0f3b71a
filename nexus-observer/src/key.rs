//! Handles for registry slots.
//!
//! A [`CursorKey`] names one live cursor in a [`Registry`](crate::Registry).
//! It pairs the slot index with the generation the slot had when the cursor
//! was linked, so a key that outlives its cursor can never alias whichever
//! cursor reuses the slot later.

/// Handle to a cursor slot in a [`Registry`](crate::Registry).
///
/// Uses a reserved sentinel ([`CursorKey::NONE`]) instead of `Option` for
/// "not linked", matching how the registry stores its handles internally.
///
/// # Example
///
/// ```
/// use nexus_observer::{CursorKey, Registry};
///
/// let mut registry = Registry::new();
/// let key = registry.link(0);
/// assert!(key.is_some());
/// assert!(CursorKey::NONE.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorKey {
    index: usize,
    generation: u32,
}

impl CursorKey {
    /// Sentinel value for a cursor that was never linked.
    pub const NONE: Self = Self {
        index: usize::MAX,
        generation: 0,
    };

    #[inline]
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the generation the slot had when this key was issued.
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.index == usize::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Default for CursorKey {
    fn default() -> Self {
        Self::NONE
    }
}
