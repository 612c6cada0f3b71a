//! Error types for observer array operations.

use thiserror::Error;

/// Errors returned by [`ObserverArray`](crate::ObserverArray) and
/// [`Adjustment`](crate::Adjustment) conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Index is past the end of the array.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// Array length at the time of the call.
        len: usize,
    },

    /// Cursor adjustments only compose single-element deltas.
    #[error("invalid adjustment {0}: must be -1 or +1")]
    InvalidAdjustment(isize),
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
