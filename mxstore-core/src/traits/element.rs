//! Coefficient type constraints
//!
//! Storages only need to clone, compare and print their coefficients. All
//! arithmetic goes through an externally supplied [`Ring`](super::Ring).

use core::fmt::Debug;

/// Trait for types that can be stored as matrix or vector entries
///
/// Entries must be:
/// - Clone: reads hand out owned values (defaults and constants included)
/// - PartialEq: compaction and write-legality checks compare values
/// - Debug: errors and logs can show them
pub trait MatrixElement: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> MatrixElement for T {}
