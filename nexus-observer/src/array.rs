//! The observer array: a sequence whose cursors survive mutation.

use std::cell::RefCell;

use tracing::debug;

use crate::{
    Adjustment, BackwardCursor, Config, Cursor, CursorKey, EndLimitedCursor, Error, Registry,
    Result,
};

/// A growable sequence that can be mutated while it is being iterated.
///
/// Mutation goes through `&self`, so code reached from inside a walk (an
/// observer being notified, say) can add or remove entries of the very array
/// being walked. Every live cursor is told about each single-element change
/// and keeps pointing at the element it would have read next.
///
/// Cursors borrow the array, so the array cannot be dropped while one is
/// live.
///
/// Not thread-safe: the array is `!Sync`.
///
/// # Example
///
/// ```
/// use nexus_observer::ObserverArray;
///
/// let listeners: ObserverArray<&str> = ObserverArray::from(vec!["a", "b", "c", "d"]);
///
/// let mut seen = Vec::new();
/// for name in listeners.cursor() {
///     seen.push(name);
///     if name == "b" {
///         // A listener unregistering another one mid-dispatch.
///         listeners.remove_item(&"c");
///     }
/// }
///
/// assert_eq!(seen, ["a", "b", "d"]);
/// ```
#[derive(Debug)]
pub struct ObserverArray<T> {
    elements: RefCell<Vec<T>>,
    registry: RefCell<Registry>,
}

impl<T> ObserverArray<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::default().with_element_capacity(capacity))
    }

    /// Creates an empty array pre-allocated according to `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            elements: RefCell::new(Vec::with_capacity(config.element_capacity)),
            registry: RefCell::new(Registry::with_capacity(config.cursor_capacity)),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Returns the element capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.borrow().capacity()
    }

    /// Returns the number of registry slots in use by live cursors.
    ///
    /// Forward and backward cursors hold one slot each. An end-limited
    /// cursor holds two: its walk position and its end.
    #[inline]
    pub fn cursor_count(&self) -> usize {
        self.registry.borrow().len()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`.
    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        {
            let mut elements = self.elements.borrow_mut();
            let len = elements.len();
            if index > len {
                return Err(Error::OutOfBounds { index, len });
            }
            elements.insert(index, value);
        }
        self.notify_cursors(index, Adjustment::Inserted);
        Ok(())
    }

    /// Appends `value` at the end.
    pub fn push(&self, value: T) {
        let index = {
            let mut elements = self.elements.borrow_mut();
            elements.push(value);
            elements.len() - 1
        };
        self.notify_cursors(index, Adjustment::Inserted);
    }

    /// Appends every item of `iter`, one element at a time.
    ///
    /// Each append is reported to live cursors separately.
    pub fn extend<I: IntoIterator<Item = T>>(&self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    pub fn remove(&self, index: usize) -> Result<T> {
        let value = {
            let mut elements = self.elements.borrow_mut();
            let len = elements.len();
            if index >= len {
                return Err(Error::OutOfBounds { index, len });
            }
            elements.remove(index)
        };
        self.notify_cursors(index, Adjustment::Removed);
        Ok(value)
    }

    /// Removes every element for which `pred` returns `true`.
    ///
    /// Returns the number of elements removed. Each removal is reported to
    /// live cursors separately.
    ///
    /// # Panics
    ///
    /// `pred` runs while the elements are borrowed; it may read the array
    /// but panics if it tries to mutate it.
    pub fn remove_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut index = 0;
        let mut removed = 0;
        loop {
            let matched = {
                let elements = self.elements.borrow();
                match elements.get(index) {
                    Some(value) => pred(value),
                    None => break,
                }
            };
            if matched {
                drop(self.remove(index));
                removed += 1;
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Removes every element and resets every live cursor to position zero.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.elements.borrow_mut());
        let cursors = {
            let mut registry = self.registry.borrow_mut();
            registry.clear_cursors();
            registry.len()
        };
        debug!(elements = removed.len(), cursors, "observer array cleared");
        // Element destructors run with no borrow outstanding.
        drop(removed);
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Returns a forward cursor starting at the first element.
    ///
    /// Elements appended while the cursor is live are visited.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns a forward cursor that stops at the current end.
    ///
    /// The end is tracked like any other cursor: removals and insertions
    /// before it move it, but elements appended after the cursor was
    /// created are not visited.
    pub fn end_limited_cursor(&self) -> EndLimitedCursor<'_, T> {
        EndLimitedCursor::new(self)
    }

    /// Returns a cursor walking from the last element to the first.
    pub fn backward_cursor(&self) -> BackwardCursor<'_, T> {
        BackwardCursor::new(self)
    }

    pub(crate) fn link_cursor(&self, position: usize) -> CursorKey {
        self.registry.borrow_mut().link(position)
    }

    pub(crate) fn unlink_cursor(&self, key: CursorKey) -> bool {
        self.registry.borrow_mut().unlink(key)
    }

    pub(crate) fn cursor_position(&self, key: CursorKey) -> usize {
        self.registry.borrow().position(key).unwrap_or(0)
    }

    pub(crate) fn set_cursor_position(&self, key: CursorKey, position: usize) {
        self.registry.borrow_mut().set_position(key, position);
    }

    #[inline]
    fn notify_cursors(&self, modified: usize, adjustment: Adjustment) {
        self.registry.borrow_mut().adjust_by(modified, adjustment);
    }
}

impl<T: Clone> ObserverArray<T> {
    /// Returns a clone of the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.elements.borrow().get(index).cloned()
    }

    /// Returns a clone of the first element.
    pub fn first(&self) -> Option<T> {
        self.elements.borrow().first().cloned()
    }

    /// Returns a clone of the last element.
    pub fn last(&self) -> Option<T> {
        self.elements.borrow().last().cloned()
    }

    /// Returns a snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.borrow().clone()
    }

    /// Calls `f` with every element present when the call starts.
    ///
    /// `f` may freely add or remove elements. Elements removed before being
    /// reached are skipped; elements appended during the walk are not
    /// visited.
    pub fn notify<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        for value in self.end_limited_cursor() {
            f(value);
        }
    }
}

impl<T: PartialEq> ObserverArray<T> {
    /// Returns `true` if the array contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.borrow().contains(value)
    }

    /// Returns the index of the first occurrence of `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index_of_from(value, 0)
    }

    /// Returns the index of the first occurrence of `value` at or after
    /// `start`.
    pub fn index_of_from(&self, value: &T, start: usize) -> Option<usize> {
        let elements = self.elements.borrow();
        elements
            .get(start..)?
            .iter()
            .position(|v| v == value)
            .map(|offset| start + offset)
    }

    /// Returns the index of the last occurrence of `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.elements.borrow().iter().rposition(|v| v == value)
    }

    /// Appends `value` unless an equal element is already present.
    ///
    /// Returns `true` if it was appended.
    pub fn push_unless_exists(&self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.push(value);
        true
    }

    /// Inserts `value` at the front unless an equal element is already
    /// present.
    ///
    /// Returns `true` if it was inserted.
    pub fn prepend_unless_exists(&self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        // Index 0 is always in bounds.
        self.insert(0, value).is_ok()
    }

    /// Removes the first occurrence of `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_item(&self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Default for ObserverArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ObserverArray<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: RefCell::new(elements),
            registry: RefCell::new(Registry::with_capacity(Config::DEFAULT_CURSOR_CAPACITY)),
        }
    }
}

impl<T> FromIterator<T> for ObserverArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Clones the elements only. Cursors stay with the source array.
impl<T: Clone> Clone for ObserverArray<T> {
    fn clone(&self) -> Self {
        Self::from(self.to_vec())
    }
}
