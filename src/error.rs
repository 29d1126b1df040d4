//! List-specific error type.

use thiserror::Error;

/// Errors reported by [`DynList`](crate::DynList) and
/// [`Cursor`](crate::iter::Cursor) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The requested backing capacity would truncate live elements.
    #[error("requested capacity {requested} is below list length {len}")]
    CapacityBelowLength {
        /// Number of slots requested.
        requested: usize,
        /// Number of live elements that must keep a slot.
        len: usize,
    },
    /// Indexed access outside the live range `[0, len)`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of access.
        len: usize,
    },
    /// A cursor observed a mutation made after it captured the list version.
    #[error("list was modified during cursor traversal")]
    ConcurrentModification,
    /// The cursor is not positioned on an element.
    #[error("cursor has no current element")]
    NoCurrentElement,
}
