//! Construction options for [`ObserverArray`](crate::ObserverArray).

/// Pre-allocation hints for an observer array.
///
/// # Example
///
/// ```
/// use nexus_observer::{Config, ObserverArray};
///
/// let config = Config::default()
///     .with_element_capacity(64)
///     .with_cursor_capacity(8);
/// let array: ObserverArray<u32> = ObserverArray::with_config(config);
/// assert!(array.capacity() >= 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Elements to reserve up front.
    pub element_capacity: usize,

    /// Cursor slots to reserve up front. Nested dispatch rarely goes deep,
    /// so a handful covers most uses.
    pub cursor_capacity: usize,
}

impl Config {
    /// Default number of cursor slots.
    pub const DEFAULT_CURSOR_CAPACITY: usize = 4;

    /// Sets the element capacity.
    pub const fn with_element_capacity(mut self, capacity: usize) -> Self {
        self.element_capacity = capacity;
        self
    }

    /// Sets the cursor slot capacity.
    pub const fn with_cursor_capacity(mut self, capacity: usize) -> Self {
        self.cursor_capacity = capacity;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_capacity: 0,
            cursor_capacity: Self::DEFAULT_CURSOR_CAPACITY,
        }
    }
}
