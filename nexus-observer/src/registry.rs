//! Registry of live cursors over one sequence.
//!
//! The registry is the bookkeeping half of an observer array. It records,
//! for every live cursor, the index the cursor will read next, and rewrites
//! those indices whenever the sequence changes shape.
//!
//! # Adjustment rule
//!
//! A cursor at position `p` has finished with `[0, p)` and will read `p`
//! next. After one element is inserted at or removed from `modified`:
//!
//! ```text
//! if p > modified { p += delta }     // delta is exactly +1 or -1
//! ```
//!
//! Cursors at or before `modified` are untouched. The same rule serves
//! forward and backward walks because it only distinguishes "finished" from
//! "not yet visited".
//!
//! ```text
//! [A, B, C, D]   cursor at 2 (next is C)
//!
//! insert X at 1  -> adjust(1, +1) -> [A, X, B, C, D]   cursor 3, still C
//! remove at 1    -> adjust(1, -1) -> [A, B, C, D]      cursor 2, still C
//! remove at 3    -> adjust(3, -1) -> [A, B, C]         cursor 2, untouched
//! ```
//!
//! # Storage
//!
//! Cursors live in a `slab::Slab` slot table. Slots are reused, so every
//! [`CursorKey`] carries the slot's generation and stale keys are ignored.

use slab::Slab;
use tracing::{debug, trace};

use crate::{Adjustment, CursorKey};

#[derive(Debug)]
struct Slot {
    position: usize,
    generation: u32,
}

/// The set of cursors currently live over one sequence.
///
/// # Example
///
/// ```
/// use nexus_observer::Registry;
///
/// let mut registry = Registry::new();
/// let a = registry.link(1);
/// let b = registry.link(5);
///
/// // One element inserted at index 3.
/// registry.adjust_cursors(3, 1);
/// assert_eq!(registry.position(a), Some(1));
/// assert_eq!(registry.position(b), Some(6));
///
/// registry.unlink(a);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    slots: Slab<Slot>,
    generation: u32,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` cursors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Returns the number of live cursors.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no cursor is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registers a cursor whose next read is `position`.
    pub fn link(&mut self, position: usize) -> CursorKey {
        let generation = self.generation;
        self.generation = self.generation.wrapping_add(1);

        let index = self.slots.insert(Slot {
            position,
            generation,
        });
        trace!(index, generation, position, "cursor linked");
        CursorKey::new(index, generation)
    }

    /// Removes a cursor from the registry.
    ///
    /// Returns `true` if the cursor was live. Unlinking a key that was
    /// already unlinked, never linked, or belongs to an earlier occupant of
    /// a reused slot does nothing and returns `false`.
    pub fn unlink(&mut self, key: CursorKey) -> bool {
        if !self.is_linked(key) {
            return false;
        }
        self.slots.remove(key.index());
        trace!(index = key.index(), "cursor unlinked");
        true
    }

    /// Returns `true` if `key` names a live cursor.
    #[inline]
    pub fn is_linked(&self, key: CursorKey) -> bool {
        self.slot(key).is_some()
    }

    /// Returns the position of a live cursor.
    #[inline]
    pub fn position(&self, key: CursorKey) -> Option<usize> {
        self.slot(key).map(|slot| slot.position)
    }

    /// Iterates over every live cursor and its position.
    pub fn positions(&self) -> impl Iterator<Item = (CursorKey, usize)> + '_ {
        self.slots
            .iter()
            .map(|(index, slot)| (CursorKey::new(index, slot.generation), slot.position))
    }

    /// Moves a cursor. Only the array and its cursors may do this.
    ///
    /// Returns `false` if `key` is not live.
    pub(crate) fn set_position(&mut self, key: CursorKey, position: usize) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                slot.position = position;
                true
            }
            None => false,
        }
    }

    /// Shifts every cursor past `modified` by one element.
    ///
    /// `adjustment` is `+1` for one element inserted at `modified`, `-1` for
    /// one element removed from it.
    ///
    /// # Panics
    ///
    /// Panics if `adjustment` is anything other than `+1` or `-1`. Larger
    /// changes must be reported one element at a time.
    pub fn adjust_cursors(&mut self, modified: usize, adjustment: isize) {
        match Adjustment::try_from(adjustment) {
            Ok(adjustment) => self.adjust_by(modified, adjustment),
            Err(err) => panic!("{err}"),
        }
    }

    /// Typed form of [`adjust_cursors`](Self::adjust_cursors).
    pub fn adjust_by(&mut self, modified: usize, adjustment: Adjustment) {
        for (_, slot) in self.slots.iter_mut() {
            if slot.position > modified {
                slot.position = adjustment.apply(slot.position);
            }
        }
    }

    /// Resets every live cursor to position zero.
    ///
    /// Used when the whole sequence is emptied at once. Cursors stay linked;
    /// their pre-clear positions are discarded.
    pub fn clear_cursors(&mut self) {
        for (_, slot) in self.slots.iter_mut() {
            slot.position = 0;
        }
        if !self.slots.is_empty() {
            debug!(cursors = self.slots.len(), "cursor positions reset");
        }
    }

    #[inline]
    fn slot(&self, key: CursorKey) -> Option<&Slot> {
        if key.is_none() {
            return None;
        }
        self.slots
            .get(key.index())
            .filter(|slot| slot.generation == key.generation())
    }

    #[inline]
    fn slot_mut(&mut self, key: CursorKey) -> Option<&mut Slot> {
        if key.is_none() {
            return None;
        }
        self.slots
            .get_mut(key.index())
            .filter(|slot| slot.generation == key.generation())
    }
}
