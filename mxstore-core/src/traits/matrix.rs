//! The matrix access contract
//!
//! Every storage variant and every view implements [`Matrix`]. Reads hand
//! out owned values because many storages have nothing physical to borrow
//! from (defaults, constants, folded cells).

extern crate alloc;
use alloc::boxed::Box;
use core::ops::Range;

use super::algebra::{Monoid, Ring};
use super::compare::{entries_equal, EqualityComparator};
use super::element::MatrixElement;
use crate::iter::Entries;
use crate::Result;

/// Which cells of a matrix are structurally present
///
/// Cells outside the structure always read as the storage's default value
/// and reject writes. Traversal with [`Matrix::entries`] visits only the
/// cells inside the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Structure {
    /// Every cell
    Full,
    /// Cells with `column <= line`
    Lower,
    /// Cells with `column >= line`
    Upper,
    /// Cells with `column == line`
    Diagonal,
}

impl Structure {
    /// Whether `(line, column)` lies inside the structure
    pub const fn contains(self, line: usize, column: usize) -> bool {
        match self {
            Structure::Full => true,
            Structure::Lower => column <= line,
            Structure::Upper => column >= line,
            Structure::Diagonal => column == line,
        }
    }

    /// Columns of `line` inside the structure, for a matrix with `columns` columns
    pub fn column_span(self, line: usize, columns: usize) -> Range<usize> {
        match self {
            Structure::Full => 0..columns,
            Structure::Lower => 0..columns.min(line + 1),
            Structure::Upper => line.min(columns)..columns,
            Structure::Diagonal if line < columns => line..line + 1,
            Structure::Diagonal => 0..0,
        }
    }
}

/// Uniform entry-access contract for two-dimensional storages
///
/// Coordinates are zero-based. Any coordinate outside `[0, extent)` fails
/// with [`MatrixError::IndexOutOfRange`](crate::MatrixError::IndexOutOfRange);
/// any mutation the storage's shape forbids fails with
/// [`MatrixError::IllegalOperation`](crate::MatrixError::IllegalOperation).
pub trait Matrix<T: MatrixElement> {
    /// Number of lines (rows)
    fn lines(&self) -> usize;

    /// Number of columns
    fn columns(&self) -> usize;

    /// Short name of the storage, used in structural errors
    fn storage_kind(&self) -> &'static str;

    /// Read the entry at `(line, column)`
    fn get(&self, line: usize, column: usize) -> Result<T>;

    /// Write the entry at `(line, column)`
    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()>;

    /// Exchange two lines
    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()>;

    /// Exchange two columns
    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()>;

    /// `line ← factor · line` under `ring`
    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()>;

    /// `target ← target_factor · target + source_factor · source` under `ring`
    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        target_factor: &T,
        source_factor: &T,
        ring: &dyn Ring<T>,
    ) -> Result<()>;

    /// Cells that are structurally present
    fn structure(&self) -> Structure {
        Structure::Full
    }

    /// `(lines, columns)`
    fn dimensions(&self) -> (usize, usize) {
        (self.lines(), self.columns())
    }

    /// Whether `M[i, j]` equals `M[j, i]` everywhere, using `comparator` when
    /// given and `PartialEq` otherwise. Non-square matrices are never symmetric.
    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        symmetric_by_entries(self, comparator)
    }

    /// Whether every entry is the additive unity of `monoid`
    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        for line in 0..self.lines() {
            for column in 0..self.columns() {
                if !monoid.is_additive_unity(&self.get(line, column)?) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Lazy row-major traversal over the structurally present cells
    ///
    /// Each call starts a fresh traversal. Values are read when the iterator
    /// advances, so they reflect the live contents.
    fn entries(&self) -> Entries<'_, T, Self>
    where
        Self: Sized,
    {
        Entries::new(self)
    }
}

/// Symmetry test that reads every mirrored pair through [`Matrix::get`]
pub fn symmetric_by_entries<T, M>(
    matrix: &M,
    comparator: Option<&dyn EqualityComparator<T>>,
) -> Result<bool>
where
    T: MatrixElement,
    M: Matrix<T> + ?Sized,
{
    if matrix.lines() != matrix.columns() {
        return Ok(false);
    }
    for line in 0..matrix.lines() {
        for column in 0..line {
            let lower = matrix.get(line, column)?;
            let upper = matrix.get(column, line)?;
            if !entries_equal(comparator, &lower, &upper) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

macro_rules! forward_matrix {
    () => {
        fn lines(&self) -> usize {
            (**self).lines()
        }

        fn columns(&self) -> usize {
            (**self).columns()
        }

        fn storage_kind(&self) -> &'static str {
            (**self).storage_kind()
        }

        fn get(&self, line: usize, column: usize) -> Result<T> {
            (**self).get(line, column)
        }

        fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
            (**self).set(line, column, value)
        }

        fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
            (**self).swap_lines(first, second)
        }

        fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
            (**self).swap_columns(first, second)
        }

        fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
            (**self).multiply_line(line, factor, ring)
        }

        fn combine_lines(
            &mut self,
            target: usize,
            source: usize,
            target_factor: &T,
            source_factor: &T,
            ring: &dyn Ring<T>,
        ) -> Result<()> {
            (**self).combine_lines(target, source, target_factor, source_factor, ring)
        }

        fn structure(&self) -> Structure {
            (**self).structure()
        }

        fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
            (**self).is_symmetric(comparator)
        }

        fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
            (**self).is_null(monoid)
        }
    };
}

// Borrowed backing: a view over `&mut M` lives no longer than the borrow.
impl<T: MatrixElement, M: Matrix<T> + ?Sized> Matrix<T> for &mut M {
    forward_matrix!();
}

impl<T: MatrixElement, M: Matrix<T> + ?Sized> Matrix<T> for Box<M> {
    forward_matrix!();
}
