//! Transpose view

use mxstore_core::{
    check_index, EqualityComparator, Matrix, MatrixElement, Result, Ring, Structure,
};

use crate::legality::reject;

const TRANSPOSE: &str = "transpose";

/// `(i, j)` reads and writes `(j, i)` of the backing matrix
///
/// Line swaps become column swaps on the backing matrix and the other way
/// round, so whatever the backing allows or refuses carries over.
#[derive(Debug, Clone)]
pub struct Transposed<M> {
    backing: M,
}

impl<M> Transposed<M> {
    pub fn new(backing: M) -> Self {
        tracing::trace!("transpose");
        Self { backing }
    }

    pub fn backing(&self) -> &M {
        &self.backing
    }

    pub fn into_backing(self) -> M {
        self.backing
    }
}

impl<T: MatrixElement, M: Matrix<T>> Matrix<T> for Transposed<M> {
    fn lines(&self) -> usize {
        self.backing.columns()
    }

    fn columns(&self) -> usize {
        self.backing.lines()
    }

    fn storage_kind(&self) -> &'static str {
        TRANSPOSE
    }

    fn structure(&self) -> Structure {
        match self.backing.structure() {
            Structure::Lower => Structure::Upper,
            Structure::Upper => Structure::Lower,
            other => other,
        }
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        self.backing.get(column, line)
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        self.backing.set(column, line, value)
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        self.backing.swap_columns(first, second)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        self.backing.swap_lines(first, second)
    }

    fn multiply_line(&mut self, line: usize, _factor: &T, _ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.backing.columns())?;
        reject("multiply_line", TRANSPOSE)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &T,
        _source_factor: &T,
        _ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.backing.columns())?;
        check_index(source, self.backing.columns())?;
        reject("combine_lines", TRANSPOSE)
    }

    // A matrix is symmetric exactly when its transpose is.
    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        self.backing.is_symmetric(comparator)
    }
}
