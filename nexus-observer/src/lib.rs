//! Observer arrays: sequences that can be mutated while being iterated.
//!
//! Listener lists have an awkward property: a listener invoked during
//! dispatch may register or unregister listeners on the very list being
//! dispatched. A plain `Vec` walk either refuses (borrow checker), skips an
//! element, or visits one twice.
//!
//! This crate splits the problem in two:
//!
//! ```text
//! ObserverArray<T>  - owns the elements, funnels every mutation
//!     │
//!     └── Registry  - slot table of live cursor positions
//!             ▲
//!             │ CursorKey (no borrow held between calls)
//!             │
//!     Cursor / EndLimitedCursor / BackwardCursor
//! ```
//!
//! Every single-element insert or remove is reported to the registry, which
//! moves each cursor positioned strictly after the change by one. A cursor
//! therefore never yields an element twice and never skips one that was
//! present throughout the walk. Clearing the array resets every cursor to
//! zero.
//!
//! # Quick Start
//!
//! ```
//! use nexus_observer::ObserverArray;
//!
//! let observers: ObserverArray<u32> = (1..=4).collect();
//!
//! let mut notified = Vec::new();
//! observers.notify(|id| {
//!     notified.push(id);
//!     if id == 1 {
//!         observers.remove_item(&3); // unregister someone mid-dispatch
//!         observers.push(5);         // registered for the next dispatch
//!     }
//! });
//!
//! assert_eq!(notified, vec![1, 2, 4]);
//! assert_eq!(observers.to_vec(), vec![1, 2, 4, 5]);
//! ```
//!
//! # Using the registry directly
//!
//! [`Registry`] is usable on its own by any sequence type that reports its
//! changes one element at a time:
//!
//! ```
//! use nexus_observer::Registry;
//!
//! let mut registry = Registry::new();
//! let cursor = registry.link(2);
//!
//! registry.adjust_cursors(0, 1);  // inserted at 0
//! assert_eq!(registry.position(cursor), Some(3));
//!
//! registry.clear_cursors();
//! assert_eq!(registry.position(cursor), Some(0));
//! ```
//!
//! # Threading
//!
//! Nothing here is thread-safe. `ObserverArray` uses `RefCell` internally
//! and is `!Sync`.

#![warn(missing_docs)]

pub mod adjustment;
pub mod array;
pub mod config;
pub mod cursor;
pub mod error;
pub mod key;
pub mod registry;

pub use adjustment::Adjustment;
pub use array::ObserverArray;
pub use config::Config;
pub use cursor::{BackwardCursor, Cursor, EndLimitedCursor};
pub use error::{Error, Result};
pub use key::CursorKey;
pub use registry::Registry;
