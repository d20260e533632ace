//! Triangular storage: only one side of the diagonal is physically stored
//!
//! Line `l` of a lower matrix stores `l + 1` cells, line `l` of an upper
//! matrix stores `n - l`. Both are packed line after line into one `Vec`.

use mxstore_core::{
    check_index, check_position, checked_triangle_count, Matrix, MatrixElement, Result, Ring,
    Structure,
};

use crate::legality::{illegal, reject};

/// Which triangle a [`TriangularMatrix`] stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Triangle {
    /// Diagonal and below
    #[default]
    Lower,
    /// Diagonal and above
    Upper,
}

impl Triangle {
    const fn storage_kind(self) -> &'static str {
        match self {
            Triangle::Lower => "lower triangular",
            Triangle::Upper => "upper triangular",
        }
    }

    const fn structure(self) -> Structure {
        match self {
            Triangle::Lower => Structure::Lower,
            Triangle::Upper => Structure::Upper,
        }
    }
}

/// Square matrix storing a single triangle
///
/// Cells on the other side read as `default` and reject writes. Lines and
/// columns can never be swapped or combined, since either would move values
/// across the diagonal; scaling a single line is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularMatrix<T> {
    triangle: Triangle,
    dimension: usize,
    default: T,
    // invariant: data.len() == dimension * (dimension + 1) / 2
    data: Vec<T>,
}

impl<T: MatrixElement> TriangularMatrix<T> {
    /// A `dimension x dimension` matrix with every stored cell set to `default`
    pub fn new(triangle: Triangle, dimension: usize, default: T) -> Result<Self> {
        let stored = checked_triangle_count(dimension)?;
        Ok(Self {
            triangle,
            dimension,
            data: vec![default.clone(); stored],
            default,
        })
    }

    pub fn lower(dimension: usize, default: T) -> Result<Self> {
        Self::new(Triangle::Lower, dimension, default)
    }

    pub fn upper(dimension: usize, default: T) -> Result<Self> {
        Self::new(Triangle::Upper, dimension, default)
    }

    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of physically stored cells
    pub fn stored_len(&self) -> usize {
        self.data.len()
    }

    /// Packed offset of `(line, column)`, `None` on the defaulted side
    fn slot(&self, line: usize, column: usize) -> Option<usize> {
        match self.triangle {
            Triangle::Lower if column <= line => Some(line * (line + 1) / 2 + column),
            Triangle::Upper if column >= line => {
                Some(line * (2 * self.dimension - line + 1) / 2 + (column - line))
            }
            _ => None,
        }
    }
}

impl<T: MatrixElement> Matrix<T> for TriangularMatrix<T> {
    fn lines(&self) -> usize {
        self.dimension
    }

    fn columns(&self) -> usize {
        self.dimension
    }

    fn storage_kind(&self) -> &'static str {
        self.triangle.storage_kind()
    }

    fn structure(&self) -> Structure {
        self.triangle.structure()
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        check_position(line, column, self.dimension, self.dimension)?;
        Ok(match self.slot(line, column) {
            Some(slot) => self.data[slot].clone(),
            None => self.default.clone(),
        })
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        check_position(line, column, self.dimension, self.dimension)?;
        let slot = self
            .slot(line, column)
            .ok_or_else(|| illegal("set", self.triangle.storage_kind()))?;
        self.data[slot] = value;
        Ok(())
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_lines", self.storage_kind())
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_columns", self.storage_kind())
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.dimension)?;
        for column in self.triangle.structure().column_span(line, self.dimension) {
            if let Some(slot) = self.slot(line, column) {
                self.data[slot] = ring.multiply(factor, &self.data[slot]);
            }
        }
        Ok(())
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &T,
        _source_factor: &T,
        _ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.dimension)?;
        check_index(source, self.dimension)?;
        reject("combine_lines", self.storage_kind())
    }
}
