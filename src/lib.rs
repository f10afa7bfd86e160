//! A finite symmetric group library
//!
//! This crate provides an immutable value type for the elements of the symmetric group
//! S<sub>n</sub>: bijections of the set {1, ..., n}. It implements the group operations
//! (composition, inversion), disjoint-cycle decomposition, and derived invariants such as the
//! order of a permutation.
//!
//! Permutations are plain in-memory values. They never change after construction, so sharing
//! them between threads requires no synchronization.
pub mod error;
pub mod perm;

pub use error::{Error, Reason};
pub use perm::Permutation;

/// Point of the underlying set.
///
/// Points are represented by positive integers (`u32`). A permutation of degree n acts on the
/// points 1, ..., n.
pub type El = u32;
