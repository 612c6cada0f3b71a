//! Cursors over an [`ObserverArray`].
//!
//! Each cursor owns one slot in the array's registry for as long as it
//! lives, and gives it back on drop. Positions move only when the cursor
//! advances or when the array reports a structural change.

use crate::{CursorKey, ObserverArray};

/// Forward cursor: visits elements from the front, including elements
/// appended while it is live.
///
/// # Example
///
/// ```
/// use nexus_observer::ObserverArray;
///
/// let array: ObserverArray<u32> = (1..=3).collect();
/// let mut cursor = array.cursor();
///
/// assert_eq!(cursor.next(), Some(1));
/// array.insert(0, 0).unwrap(); // before the cursor: not visited
/// array.push(4);               // after the cursor: visited
///
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
pub struct Cursor<'a, T> {
    array: &'a ObserverArray<T>,
    key: CursorKey,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a ObserverArray<T>) -> Self {
        let key = array.link_cursor(0);
        Self { array, key }
    }

    /// Returns the index the next call to `next` will read.
    #[inline]
    pub fn position(&self) -> usize {
        self.array.cursor_position(self.key)
    }

    /// Returns `true` if there is an element left to visit.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.position() < self.array.len()
    }

    /// Removes the element just before the cursor, normally the one most
    /// recently returned by `next`.
    ///
    /// Returns `None` if the cursor is at the front. If the last returned
    /// element was already removed by someone else, this removes its
    /// predecessor.
    pub fn remove(&mut self) -> Option<T> {
        let position = self.array.cursor_position(self.key);
        if position == 0 {
            return None;
        }
        self.array.remove(position - 1).ok()
    }

    /// Unlinks the cursor now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<T: Clone> Cursor<'_, T> {
    /// Returns the element `next` would return, without advancing.
    pub fn peek(&self) -> Option<T> {
        self.array.get(self.position())
    }
}

impl<T: Clone> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // `self.position()` would resolve to `Iterator::position` here.
        let position = self.array.cursor_position(self.key);
        let value = self.array.get(position)?;
        self.array.set_cursor_position(self.key, position + 1);
        Some(value)
    }
}

impl<T> Drop for Cursor<'_, T> {
    fn drop(&mut self) {
        self.array.unlink_cursor(self.key);
    }
}

/// Forward cursor bounded by the end of the array at creation time.
///
/// The end is itself registered and adjusted, so removing elements shrinks
/// the walk and inserting before the end grows it, but appending after the
/// end does not. This is the walk used for notifying observers: entries
/// added by an observer during dispatch wait for the next dispatch.
///
/// # Example
///
/// ```
/// use nexus_observer::ObserverArray;
///
/// let array: ObserverArray<u32> = (1..=3).collect();
/// let mut seen = Vec::new();
/// for value in array.end_limited_cursor() {
///     seen.push(value);
///     array.push(value * 10);
/// }
///
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert_eq!(array.len(), 6);
/// ```
pub struct EndLimitedCursor<'a, T> {
    cursor: Cursor<'a, T>,
    end: CursorKey,
}

impl<'a, T> EndLimitedCursor<'a, T> {
    pub(crate) fn new(array: &'a ObserverArray<T>) -> Self {
        let cursor = Cursor::new(array);
        let end = array.link_cursor(array.len());
        Self { cursor, end }
    }

    /// Returns the index the next call to `next` will read.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the (adjusted) index the walk stops at.
    #[inline]
    pub fn end(&self) -> usize {
        self.cursor.array.cursor_position(self.end)
    }

    /// Returns `true` if there is an element left before the end.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.position() < self.end()
    }

    /// Removes the element just before the cursor. See [`Cursor::remove`].
    pub fn remove(&mut self) -> Option<T> {
        self.cursor.remove()
    }

    /// Unlinks the cursor and its end now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<T: Clone> EndLimitedCursor<'_, T> {
    /// Returns the element `next` would return, without advancing.
    ///
    /// `None` once the walk has reached its end, even if elements were
    /// appended past it.
    pub fn peek(&self) -> Option<T> {
        if !self.has_more() {
            return None;
        }
        self.cursor.peek()
    }
}

impl<T: Clone> Iterator for EndLimitedCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.has_more() {
            return None;
        }
        self.cursor.next()
    }
}

impl<T> Drop for EndLimitedCursor<'_, T> {
    fn drop(&mut self) {
        self.cursor.array.unlink_cursor(self.end);
    }
}

/// Cursor walking from the back of the array to the front.
///
/// Its position is the index one past the next element it will read, so
/// the same adjustment rule as forward cursors applies unchanged.
///
/// # Example
///
/// ```
/// use nexus_observer::ObserverArray;
///
/// let array: ObserverArray<u32> = (1..=4).collect();
/// let mut cursor = array.backward_cursor();
///
/// assert_eq!(cursor.next(), Some(4));
/// array.remove(1).unwrap(); // 2 is removed before it is reached
///
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![3, 1]);
/// ```
pub struct BackwardCursor<'a, T> {
    array: &'a ObserverArray<T>,
    key: CursorKey,
}

impl<'a, T> BackwardCursor<'a, T> {
    pub(crate) fn new(array: &'a ObserverArray<T>) -> Self {
        let key = array.link_cursor(array.len());
        Self { array, key }
    }

    /// Returns the cursor position: the next read is at `position - 1`.
    #[inline]
    pub fn position(&self) -> usize {
        self.array.cursor_position(self.key)
    }

    /// Returns `true` if there is an element left to visit.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.position() > 0
    }

    /// Removes the element at the cursor, normally the one most recently
    /// returned by `next`.
    ///
    /// Returns `None` if nothing has been visited yet.
    pub fn remove(&mut self) -> Option<T> {
        self.array.remove(self.array.cursor_position(self.key)).ok()
    }

    /// Unlinks the cursor now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<T: Clone> Iterator for BackwardCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let position = self.array.cursor_position(self.key).checked_sub(1)?;
        let value = self.array.get(position)?;
        self.array.set_cursor_position(self.key, position);
        Some(value)
    }
}

impl<T> Drop for BackwardCursor<'_, T> {
    fn drop(&mut self) {
        self.array.unlink_cursor(self.key);
    }
}
