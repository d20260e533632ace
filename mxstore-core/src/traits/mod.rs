//! Abstract interfaces shared by every storage and view

pub mod algebra;
pub mod compare;
pub mod element;
pub mod matrix;
pub mod vector;

pub use algebra::{BooleanRing, Monoid, Ring, StandardRing};
pub use compare::{entries_equal, DefaultEquality, EqualityComparator};
pub use element::MatrixElement;
pub use matrix::{symmetric_by_entries, Matrix, Structure};
pub use vector::Vector;
