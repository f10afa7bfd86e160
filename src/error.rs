//! Errors reported by permutation construction and algebra.
use thiserror::Error;

use crate::El;

/// An error during a permutation operation.
///
/// Validation is eager: every operation checks its arguments before doing any work, so a failed
/// operation never leaves a partially constructed value behind. All errors are recoverable
/// conditions for the caller; the library itself never logs or retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument (image list, composition partner) was absent.
    #[error("required argument was absent")]
    NullInput,
    /// An argument was present but structurally invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(Reason),
}

/// The structural violation behind an [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    /// An image value occurred more than once, so the map is not injective.
    #[error("duplicate image value {0}")]
    DuplicateImage(El),
    /// An image value lies outside 1..=n.
    #[error("image value {value} outside 1..={degree}")]
    ImageOutOfRange { value: El, degree: usize },
    /// A point passed to `sigma` lies outside the domain 1..=n.
    #[error("point {point} outside domain 1..={degree}")]
    PointOutOfDomain { point: El, degree: usize },
    /// A 1-indexed cycle access lies outside the cycle list.
    #[error("cycle index {index} out of range for {cycles} cycles")]
    CycleIndexOutOfRange { index: usize, cycles: usize },
    /// Composition partners have different degrees.
    #[error("degree mismatch: {left} != {right}")]
    DegreeMismatch { left: usize, right: usize },
    /// The LCM of an empty collection was requested.
    #[error("lcm of an empty collection is undefined")]
    EmptyLcm,
}

impl From<Reason> for Error {
    fn from(reason: Reason) -> Error {
        Error::InvalidArgument(reason)
    }
}
