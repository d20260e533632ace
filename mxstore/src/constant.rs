//! Constant storages: identity and zero
//!
//! Neither stores any entries. Their values come from the algebraic
//! collaborator they were built with, so they stay consistent with whatever
//! the surrounding code considers "zero" and "one".

use std::marker::PhantomData;

use mxstore_core::{
    check_index, check_position, EqualityComparator, Matrix, MatrixElement, Monoid, Result, Ring,
    Vector,
};

use crate::legality::{illegal, reject};

const IDENTITY: &str = "identity";
const ZERO: &str = "zero";

/// Identity matrix over a ring
///
/// Reads give the multiplicative unity on the diagonal and the additive unity
/// elsewhere. Writes and line scaling only succeed when they would leave the
/// matrix unchanged. Swaps and line combination are always rejected.
#[derive(Debug, Clone)]
pub struct IdentityMatrix<T, R> {
    dimension: usize,
    ring: R,
    _entry: PhantomData<fn() -> T>,
}

impl<T: MatrixElement, R: Ring<T>> IdentityMatrix<T, R> {
    pub fn new(dimension: usize, ring: R) -> Self {
        Self {
            dimension,
            ring,
            _entry: PhantomData,
        }
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    fn value_at(&self, line: usize, column: usize) -> T {
        if line == column {
            self.ring.multiplicative_unity()
        } else {
            self.ring.additive_unity()
        }
    }
}

impl<T: MatrixElement, R: Ring<T>> Matrix<T> for IdentityMatrix<T, R> {
    fn lines(&self) -> usize {
        self.dimension
    }

    fn columns(&self) -> usize {
        self.dimension
    }

    fn storage_kind(&self) -> &'static str {
        IDENTITY
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        check_position(line, column, self.dimension, self.dimension)?;
        Ok(self.value_at(line, column))
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        check_position(line, column, self.dimension, self.dimension)?;
        if value == self.value_at(line, column) {
            Ok(())
        } else {
            Err(illegal("set", IDENTITY))
        }
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_lines", IDENTITY)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.dimension)?;
        check_index(second, self.dimension)?;
        reject("swap_columns", IDENTITY)
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.dimension)?;
        let unchanged = (0..self.dimension).all(|column| {
            let current = self.value_at(line, column);
            ring.multiply(factor, &current) == current
        });
        if unchanged {
            Ok(())
        } else {
            reject("multiply_line", IDENTITY)
        }
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
        reject("combine_lines", IDENTITY)
    }

    fn is_symmetric(&self, _comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        Ok(true)
    }
}

/// Matrix whose every entry is a monoid's additive unity
///
/// Writing the additive unity is a no-op; anything else fails. Swaps, line
/// scaling and line combination all leave a zero matrix unchanged and so
/// succeed once their indices are checked.
#[derive(Debug, Clone)]
pub struct ZeroMatrix<T, M> {
    lines: usize,
    columns: usize,
    monoid: M,
    _entry: PhantomData<fn() -> T>,
}

impl<T: MatrixElement, M: Monoid<T>> ZeroMatrix<T, M> {
    pub fn new(lines: usize, columns: usize, monoid: M) -> Self {
        Self {
            lines,
            columns,
            monoid,
            _entry: PhantomData,
        }
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }
}

impl<T: MatrixElement, M: Monoid<T>> Matrix<T> for ZeroMatrix<T, M> {
    fn lines(&self) -> usize {
        self.lines
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn storage_kind(&self) -> &'static str {
        ZERO
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        check_position(line, column, self.lines, self.columns)?;
        Ok(self.monoid.additive_unity())
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        check_position(line, column, self.lines, self.columns)?;
        if self.monoid.is_additive_unity(&value) {
            Ok(())
        } else {
            Err(illegal("set", ZERO))
        }
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.lines)?;
        check_index(second, self.lines)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.columns)?;
        check_index(second, self.columns)
    }

    fn multiply_line(&mut self, line: usize, _factor: &T, _ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.lines)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &T,
        _source_factor: &T,
        _ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.lines)?;
        check_index(source, self.lines)
    }

    fn is_symmetric(&self, _comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        Ok(true)
    }

    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        Ok(self.lines == 0
            || self.columns == 0
            || monoid.is_additive_unity(&self.monoid.additive_unity()))
    }
}

/// Vector whose every entry is a monoid's additive unity
#[derive(Debug, Clone)]
pub struct ZeroVector<T, M> {
    len: usize,
    monoid: M,
    _entry: PhantomData<fn() -> T>,
}

impl<T: MatrixElement, M: Monoid<T>> ZeroVector<T, M> {
    pub fn new(len: usize, monoid: M) -> Self {
        Self {
            len,
            monoid,
            _entry: PhantomData,
        }
    }
}

impl<T: MatrixElement, M: Monoid<T>> Vector<T> for ZeroVector<T, M> {
    fn len(&self) -> usize {
        self.len
    }

    fn storage_kind(&self) -> &'static str {
        ZERO
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        Ok(self.monoid.additive_unity())
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        if self.monoid.is_additive_unity(&value) {
            Ok(())
        } else {
            Err(illegal("set", ZERO))
        }
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.len)?;
        check_index(second, self.len)
    }

    fn is_symmetric(&self, _comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        Ok(true)
    }

    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        Ok(self.len == 0 || monoid.is_additive_unity(&self.monoid.additive_unity()))
    }
}
