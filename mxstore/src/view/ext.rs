//! Extension traits that derive views from any matrix or vector
//!
//! The methods consume their receiver, so call them on whatever handle
//! should back the view: `(&mut m).transpose()` borrows `m`,
//! `shared.clone().transpose()` shares it, and a view can itself back
//! another view.

use mxstore_core::{IndexSequence, Matrix, MatrixElement, Result, Vector};

use super::{
    IndexedSubMatrix, IndexedSubVector, LineVector, Selection, SequenceSubMatrix,
    SequenceSubVector, Transposed,
};

pub trait MatrixViewExt<T: MatrixElement>: Matrix<T> + Sized {
    /// Submatrix through explicit line and column index arrays
    fn sub_matrix(self, lines: Vec<usize>, columns: Vec<usize>) -> Result<IndexedSubMatrix<Self>> {
        IndexedSubMatrix::new(self, lines, columns)
    }

    /// Submatrix through ordered index sequences (ranges convert directly)
    fn sub_matrix_seq(
        self,
        lines: impl Into<IndexSequence>,
        columns: impl Into<IndexSequence>,
    ) -> Result<SequenceSubMatrix<Self>> {
        SequenceSubMatrix::new(self, lines, columns)
    }

    /// Submatrix using a sequence view when both index sets are arithmetic
    fn select(self, lines: &[usize], columns: &[usize]) -> Result<Selection<Self>> {
        match (IndexSequence::detect(lines), IndexSequence::detect(columns)) {
            (Some(lines), Some(columns)) => {
                SequenceSubMatrix::new(self, lines, columns).map(Selection::Sequence)
            }
            _ => IndexedSubMatrix::new(self, lines.to_vec(), columns.to_vec())
                .map(Selection::Indexed),
        }
    }

    fn transpose(self) -> Transposed<Self> {
        Transposed::new(self)
    }

    /// Line `line` as a vector
    fn line_vector(self, line: usize) -> Result<LineVector<Self>> {
        LineVector::new(self, line)
    }
}

impl<T: MatrixElement, M: Matrix<T>> MatrixViewExt<T> for M {}

pub trait VectorViewExt<T: MatrixElement>: Vector<T> + Sized {
    fn sub_vector(self, indices: Vec<usize>) -> Result<IndexedSubVector<Self>> {
        IndexedSubVector::new(self, indices)
    }

    fn sub_vector_seq(self, indices: impl Into<IndexSequence>) -> Result<SequenceSubVector<Self>> {
        SequenceSubVector::new(self, indices)
    }
}

impl<T: MatrixElement, V: Vector<T>> VectorViewExt<T> for V {}
