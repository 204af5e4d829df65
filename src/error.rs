use thiserror::Error;

/// Error value reported by every fallible container and cursor operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Error)]
pub enum Error {
    /// Memory for a new slot or node could not be obtained.
    ///
    /// The container is left exactly as it was before the call.
    #[error("insufficient memory")]
    Failure,

    /// The position does not exist for this operation.
    ///
    /// Insertions accept `0..=len`, every other positional operation
    /// requires `0..len`. Cursor operations other than `add`, `seek` and
    /// `reset` report this when the cursor is after the last element.
    #[error("position out of range")]
    PositionOutOfRange,

    /// A required element buffer was missing: the slice supplied for a
    /// value or an output was not exactly `element_size` bytes long.
    #[error("element buffer missing or not element_size bytes long")]
    Null,
}

/// Result of a successful `set`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SetOutcome {
    /// The stored bytes were replaced.
    Applied,
    /// The new bytes were identical to the stored ones; nothing changed.
    Unchanged,
}

/// Shorthand used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
