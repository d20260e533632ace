//! mxstore - matrix and vector storages behind one access contract
//!
//! Every storage answers the same small set of questions: its extent, the
//! value at a coordinate, and whether a structural mutation (line swap,
//! line scaling, line combination) is legal for its shape. Views translate
//! coordinates over any storage, or over another view, without copying.
//!
//! ## Architecture
//!
//! - **mxstore-core**: the contract, the algebraic collaborators, errors and
//!   validation (`no_std`, no storage)
//! - **mxstore**: concrete storages, views, factories and the operator
//!
//! ## Quick Start
//!
//! ```rust
//! use mxstore::view::MatrixViewExt;
//! use mxstore::{DenseMatrix, Matrix, MatrixError};
//!
//! fn example() -> Result<(), MatrixError> {
//!     let mut matrix = DenseMatrix::from_row_major(2, 3, vec![1, 2, 3, 4, 5, 6])?;
//!
//!     // Line 1 of the transpose is column 1 of the backing
//!     let transposed = (&mut matrix).transpose();
//!     assert_eq!(transposed.get(1, 0)?, 2);
//!     assert_eq!(transposed.dimensions(), (3, 2));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Storages
//!
//! - **Dense**: every cell stored, every mutation legal
//! - **Triangular / diagonal**: only the structure is stored; cells outside
//!   it read as the default and reject writes
//! - **Identity / zero**: constant matrices over a ring or monoid
//! - **Bit-packed symmetric**: one bit per unordered boolean pair
//! - **Sparse**: hash-map backed, only non-default cells stored

// Re-export the contract so most callers only depend on this crate
pub use mxstore_core::{
    // Contract
    Matrix, MatrixElement, Structure, Vector,
    // Traversal
    Entries, IndexedEntries, VectorEntries,
    // Algebra
    BooleanRing, DefaultEquality, EqualityComparator, Monoid, Ring, StandardRing,
    // Index sets
    parse_sequence, IndexSequence,
    // Error handling
    ErrorCategory, MatrixError, Result,
};

mod legality;

// Storages
mod bits;
pub mod constant;
pub mod dense;
pub mod diagonal;
pub mod shared;
pub mod sparse;
pub mod symmetric;
pub mod triangular;

// Derived access
pub mod view;

// Construction and arithmetic
pub mod dynamic;
pub mod factory;
pub mod operator;
pub mod setup;

pub use constant::{IdentityMatrix, ZeroMatrix, ZeroVector};
pub use dense::{DenseMatrix, DenseVector};
pub use diagonal::DiagonalMatrix;
pub use shared::Shared;
pub use sparse::{SparseMatrix, SparseVector};
pub use symmetric::BitSymmetricMatrix;
pub use triangular::{Triangle, TriangularMatrix};

pub use dynamic::{DynamicFactory, DynamicMatrix, StorageConfig, StorageKind};
pub use factory::{MatrixFactory, VectorFactory};
pub use operator::{MatrixOperator, OperatorBuilder};
pub use setup::{fill_matrix, fill_vector};
