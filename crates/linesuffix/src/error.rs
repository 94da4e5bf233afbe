use core::fmt;

use thiserror::Error;

/// A capability the stream refuses to provide.
///
/// Each of these would require a stable notion of "line" or of seekable
/// position, which the transformed stream no longer has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Reading a whole line from the transformed output.
    ReadLine,
    /// Marking the current position for a later reset.
    Mark,
    /// Returning to a previously marked position.
    Reset,
    /// Skipping forward over characters.
    Skip,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadLine => "read_line",
            Self::Mark => "mark",
            Self::Reset => "reset",
            Self::Skip => "skip",
        })
    }
}

/// Errors surfaced by [`SuffixedLineStream`](crate::SuffixedLineStream).
///
/// `E` is the error type of the underlying [`LineSource`](crate::LineSource);
/// its failures pass through unchanged as [`StreamError::Source`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StreamError<E> {
    /// The configured suffix was empty. Raised at construction; fatal.
    #[error("suffix must not be empty")]
    EmptySuffix,

    /// The offset/len pair of a bulk read does not fit the destination.
    /// A programming error on the caller's side, not a transient condition.
    #[error("range out of bounds: offset {offset} + len {len} exceeds capacity {capacity}")]
    OutOfBounds {
        /// Requested start index into the destination.
        offset: usize,
        /// Requested number of characters.
        len: usize,
        /// Length of the destination slice.
        capacity: usize,
    },

    /// The invoked operation is intentionally unsupported.
    #[error("{0} is not supported on a suffix-injecting stream")]
    Unsupported(Operation),

    /// The underlying line source failed during a pull. Not retried; the
    /// stream should be discarded after inspecting the cause.
    #[error("line source error: {0}")]
    Source(E),
}
