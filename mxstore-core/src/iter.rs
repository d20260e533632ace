//! Lazy entry traversal
//!
//! The iterators keep an explicit cursor and read through the access
//! contract on every step, so a traversal always sees live values. Starting
//! a new traversal is just asking the storage for a new iterator.
//!
//! The cursor never leaves the reported extent, so a read can only fail
//! when a storage breaks its own contract. Traversal ends at the first such
//! failure instead of yielding a made-up value.

use core::marker::PhantomData;

use crate::traits::{Matrix, MatrixElement, Structure, Vector};

/// Row-major traversal over the structurally present cells of a matrix
pub struct Entries<'a, T, M: ?Sized> {
    matrix: &'a M,
    structure: Structure,
    line: usize,
    column: usize,
    column_end: usize,
    _entry: PhantomData<fn() -> T>,
}

impl<'a, T, M> Entries<'a, T, M>
where
    T: MatrixElement,
    M: Matrix<T> + ?Sized,
{
    pub fn new(matrix: &'a M) -> Self {
        let structure = matrix.structure();
        let span = structure.column_span(0, matrix.columns());
        Self {
            matrix,
            structure,
            line: 0,
            column: span.start,
            column_end: span.end,
            _entry: PhantomData,
        }
    }

    /// Same traversal, paired with coordinates
    pub fn indexed(self) -> IndexedEntries<'a, T, M> {
        IndexedEntries { inner: self }
    }
}

impl<'a, T, M> Entries<'a, T, M>
where
    T: MatrixElement,
    M: Matrix<T> + ?Sized,
{
    fn advance(&mut self) -> Option<((usize, usize), T)> {
        let (lines, columns) = (self.matrix.lines(), self.matrix.columns());
        // Skip exhausted (or structurally empty) lines
        while self.column >= self.column_end {
            if self.line >= lines {
                return None;
            }
            self.line += 1;
            let span = self.structure.column_span(self.line, columns);
            self.column = span.start;
            self.column_end = span.end;
        }
        if self.line >= lines {
            return None;
        }
        let position = (self.line, self.column);
        // in range by construction; a failing read ends the traversal
        let Ok(value) = self.matrix.get(self.line, self.column) else {
            self.line = lines;
            return None;
        };
        self.column += 1;
        Some((position, value))
    }
}

impl<T, M> Iterator for Entries<'_, T, M>
where
    T: MatrixElement,
    M: Matrix<T> + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance().map(|(_, value)| value)
    }
}

/// [`Entries`] yielding `((line, column), value)`
pub struct IndexedEntries<'a, T, M: ?Sized> {
    inner: Entries<'a, T, M>,
}

impl<T, M> Iterator for IndexedEntries<'_, T, M>
where
    T: MatrixElement,
    M: Matrix<T> + ?Sized,
{
    type Item = ((usize, usize), T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance()
    }
}

/// Index-order traversal over a vector
pub struct VectorEntries<'a, T, V: ?Sized> {
    vector: &'a V,
    index: usize,
    _entry: PhantomData<fn() -> T>,
}

impl<'a, T, V> VectorEntries<'a, T, V>
where
    T: MatrixElement,
    V: Vector<T> + ?Sized,
{
    pub fn new(vector: &'a V) -> Self {
        Self {
            vector,
            index: 0,
            _entry: PhantomData,
        }
    }
}

impl<T, V> Iterator for VectorEntries<'_, T, V>
where
    T: MatrixElement,
    V: Vector<T> + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.vector.len() {
            return None;
        }
        let Ok(value) = self.vector.get(self.index) else {
            self.index = self.vector.len();
            return None;
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // a failed read may end it early
        let remaining = self.vector.len().saturating_sub(self.index);
        (0, Some(remaining))
    }
}
