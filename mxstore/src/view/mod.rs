//! Views: derived matrices and vectors without storage of their own
//!
//! Every view owns a *handle* to its backing (`&mut M`, [`Shared<M>`],
//! `Box<M>` or another view) plus a rule for translating coordinates.
//! Translation is the only thing a view does; none of them inspects or
//! flattens its backing, so any nesting reads and writes the right cell.
//!
//! A view never outlives its backing: borrowed handles are tied to the
//! borrow, and shared handles keep the storage alive. Changes made to the
//! backing through any other handle are visible through the view.
//!
//! [`Shared<M>`]: crate::Shared

mod ext;
mod line;
mod submatrix;
mod subvector;
mod transpose;

pub use ext::{MatrixViewExt, VectorViewExt};
pub use line::LineVector;
pub use submatrix::{IndexedSubMatrix, Selection, SequenceSubMatrix};
pub use subvector::{IndexedSubVector, SequenceSubVector};
pub use transpose::Transposed;
