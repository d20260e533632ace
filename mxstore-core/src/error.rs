//! Error types for matrix and vector storages

use thiserror::Error;

/// Errors raised by storages, views, factories and operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Coordinate or length argument outside `[0, extent)`
    #[error("index {index} is out of range for extent {extent}")]
    IndexOutOfRange { index: usize, extent: usize },
    /// Mutation forbidden by the shape of the storage
    #[error("operation `{operation}` is not legal for {storage} storage")]
    IllegalOperation {
        operation: &'static str,
        storage: &'static str,
    },
    /// A required ring, monoid, comparator or factory was not supplied
    #[error("missing required {dependency}")]
    MissingDependency { dependency: &'static str },
    /// Two shapes that must agree do not
    #[error("shape {}x{} does not match shape {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A square-only storage was requested with unequal extents
    #[error("storage requires a square shape, got {lines}x{columns}")]
    NotSquare { lines: usize, columns: usize },
    /// The cell count of a `lines x columns` storage overflows `usize`
    #[error("a {lines}x{columns} storage has more cells than usize can count")]
    CapacityOverflow { lines: usize, columns: usize },
    /// A value stream does not fill the target exactly
    #[error("expected {expected} values, got {found}")]
    ValueCount { expected: usize, found: usize },
    /// An index sequence could not be built or parsed
    #[error("invalid index sequence: {reason}")]
    InvalidSequence { reason: &'static str },
}

/// Coarse classification of [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    IndexRange,
    Structural,
    MissingDependency,
    Shape,
    InvalidInput,
}

impl MatrixError {
    /// Shorthand for [`MatrixError::IllegalOperation`]
    pub const fn illegal(operation: &'static str, storage: &'static str) -> Self {
        MatrixError::IllegalOperation { operation, storage }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::IndexOutOfRange { .. } => ErrorCategory::IndexRange,
            MatrixError::IllegalOperation { .. } => ErrorCategory::Structural,
            MatrixError::MissingDependency { .. } => ErrorCategory::MissingDependency,
            MatrixError::ShapeMismatch { .. }
            | MatrixError::NotSquare { .. }
            | MatrixError::CapacityOverflow { .. }
            | MatrixError::ValueCount { .. } => ErrorCategory::Shape,
            MatrixError::InvalidSequence { .. } => ErrorCategory::InvalidInput,
        }
    }

    /// True for errors raised because a storage's shape forbids a mutation
    pub const fn is_structural(&self) -> bool {
        matches!(self.category(), ErrorCategory::Structural)
    }
}

/// Result type for storage operations
pub type Result<T> = core::result::Result<T, MatrixError>;
