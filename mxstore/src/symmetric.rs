//! Bit-packed symmetric boolean storage
//!
//! Logical cells `(l, c)` and `(c, l)` share one physical bit, keyed by
//! `(min(l, c), |l - c|)`. Rows of that key space shrink by one per line, so
//! the bits are packed the same way an upper triangle is.

use mxstore_core::{
    check_index, check_position, checked_triangle_count, EqualityComparator, Matrix, Result, Ring,
};

use crate::bits::PackedBits;
use crate::legality::reject;

const BIT_SYMMETRIC: &str = "bit-packed symmetric";

/// Square boolean matrix that is symmetric by construction
///
/// Writing either cell of a mirrored pair writes both. Swaps, line scaling
/// and line combination are refused since each would break the symmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSymmetricMatrix {
    dimension: usize,
    bits: PackedBits,
}

impl BitSymmetricMatrix {
    /// A `dimension x dimension` matrix with every cell set to `default`
    pub fn new(dimension: usize, default: bool) -> Result<Self> {
        Ok(Self {
            dimension,
            bits: PackedBits::new(checked_triangle_count(dimension)?, default),
        })
    }

    /// Physical key of a logical cell: `(min, max - min)`
    pub fn physical_cell(line: usize, column: usize) -> (usize, usize) {
        let low = line.min(column);
        (low, line.max(column) - low)
    }

    /// Number of physical bits (one per unordered pair, diagonal included)
    pub fn stored_len(&self) -> usize {
        self.bits.len()
    }

    /// Heap bytes holding the bits
    pub fn stored_bytes(&self) -> usize {
        self.bits.byte_len()
    }

    /// Number of unordered pairs, diagonal included, that are set
    pub fn count_set(&self) -> usize {
        self.bits.count_ones()
    }

    fn bit_index(&self, line: usize, column: usize) -> usize {
        let (low, offset) = Self::physical_cell(line, column);
        low * (2 * self.dimension - low + 1) / 2 + offset
    }
}

impl Matrix<bool> for BitSymmetricMatrix {
    fn lines(&self) -> usize {
        self.dimension
    }

    fn columns(&self) -> usize {
        self.dimension
    }

    fn storage_kind(&self) -> &'static str {
        BIT_SYMMETRIC
    }

    fn get(&self, line: usize, column: usize) -> Result<bool> {
        check_position(line, column, self.dimension, self.dimension)?;
        Ok(self.bits.get(self.bit_index(line, column)))
    }

    fn set(&mut self, line: usize, column: usize, value: bool) -> Result<()> {
        check_position(line, column, self.dimension, self.dimension)?;
        let index = self.bit_index(line, column);
        self.bits.set(index, value);
        Ok(())
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_lines", BIT_SYMMETRIC)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_columns", BIT_SYMMETRIC)
    }

    fn multiply_line(&mut self, line: usize, _factor: &bool, _ring: &dyn Ring<bool>) -> Result<()> {
        check_index(line, self.dimension)?;
        reject("multiply_line", BIT_SYMMETRIC)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &bool,
        _source_factor: &bool,
        _ring: &dyn Ring<bool>,
    ) -> Result<()> {
        check_index(target, self.dimension)?;
        check_index(source, self.dimension)?;
        reject("combine_lines", BIT_SYMMETRIC)
    }

    fn is_symmetric(&self, _comparator: Option<&dyn EqualityComparator<bool>>) -> Result<bool> {
        Ok(true)
    }
}
