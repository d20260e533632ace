//! Validation utilities
//!
//! Pure checks with no storage dependencies: coordinate bounds, shape
//! agreement and sequence parsing.

pub mod bounds;
pub mod parsing;

pub use bounds::{
    check_index, check_indices, check_position, check_same_shape, check_square,
    checked_cell_count, checked_triangle_count,
};
pub use parsing::parse_sequence;
