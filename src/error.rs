//! Status taxonomy shared by every container in this crate.

use core::fmt;

/// The closed set of ways an operation on one of these containers can fail.
///
/// There is no `panic!`/`unwrap` on any caller-triggerable input; every fallible operation
/// returns `Result<_, Error>` (or `Option<_>` where there is nothing useful to say about the
/// failure beyond "empty"/"not present").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bounds violation, a null/invalid handle, or a size that does not fit the operation
    /// (e.g. an interior insert index greater than the current length).
    ArgError,
    /// Growth was required to satisfy the request but the container's allocator is [`NoAlloc`]
    /// (arena mode).
    ///
    /// [`NoAlloc`]: crate::alloc::NoAlloc
    NoAlloc,
    /// The container's [`RawAlloc`](crate::alloc::RawAlloc) returned an error while growing or
    /// reallocating.
    MemError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArgError => f.write_str("invalid argument (bounds, handle, or size)"),
            Error::NoAlloc => f.write_str("growth required but no allocator is installed"),
            Error::MemError => f.write_str("allocator failed to satisfy a growth request"),
        }
    }
}

impl core::error::Error for Error {}

/// Result of [`crate::buffer::Buffer::validate`]/the heap, deque, and list `validate` methods.
///
/// Kept separate from [`Error`] because validation failures describe *which* invariant broke,
/// which is useful in tests and debug assertions but not part of the steady-state error surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `count` exceeded `capacity`, or a `front`/handle was out of its valid range.
    CountOutOfBounds,
    /// The heap-order relation did not hold between a parent and a child slot.
    HeapPropertyViolated,
    /// Forward iteration did not visit exactly `count` elements, or the endpoints did not line
    /// up with `front`/the logical back.
    IterationMismatch,
    /// A forward link did not have a matching backward link, or a node appeared to be its own
    /// successor.
    LinkInconsistent,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::CountOutOfBounds => f.write_str("count/capacity/index out of bounds"),
            ValidationError::HeapPropertyViolated => f.write_str("heap property violated"),
            ValidationError::IterationMismatch => f.write_str("iteration did not match count"),
            ValidationError::LinkInconsistent => f.write_str("inconsistent forward/backward link"),
        }
    }
}

impl core::error::Error for ValidationError {}
