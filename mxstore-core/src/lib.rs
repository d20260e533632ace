#![no_std]

//! mxstore core - access contract for matrix and vector storages
//!
//! This crate defines what every storage and view must provide, the
//! algebraic collaborators they are parameterised by, and the validation
//! and error conventions they share. It holds no concrete storage.

extern crate alloc;

pub mod error;
pub mod iter;
pub mod sequence;
pub mod traits;
pub mod validation;

pub use error::*;
pub use iter::{Entries, IndexedEntries, VectorEntries};
pub use sequence::IndexSequence;
pub use traits::*;
pub use validation::*;
