//! Submatrix views
//!
//! Both views translate `(i, j)` to `(lines[i], columns[j])` on the backing
//! matrix and hold no entries of their own. Neither looks at what its
//! backing is, so views stack freely.

use mxstore_core::{
    check_index, check_indices, check_position, IndexSequence, Matrix, MatrixElement, Result,
    Ring,
};

use crate::legality::reject;

const INDEXED: &str = "index-array submatrix";
const SEQUENCE: &str = "sequence submatrix";

/// Submatrix selected by two explicit index arrays
///
/// Swapping lines or columns permutes the view's index arrays; the backing
/// matrix is never touched by a swap.
#[derive(Debug, Clone)]
pub struct IndexedSubMatrix<M> {
    backing: M,
    lines: Vec<usize>,
    columns: Vec<usize>,
}

impl<M> IndexedSubMatrix<M> {
    /// View `backing` through `lines` and `columns`
    ///
    /// Every index must be in range for the backing matrix. Indices may
    /// repeat and may come in any order.
    pub fn new<T>(backing: M, lines: Vec<usize>, columns: Vec<usize>) -> Result<Self>
    where
        T: MatrixElement,
        M: Matrix<T>,
    {
        check_indices(&lines, backing.lines())?;
        check_indices(&columns, backing.columns())?;
        tracing::trace!(
            lines = lines.len(),
            columns = columns.len(),
            backing = backing.storage_kind(),
            "index-array submatrix"
        );
        Ok(Self {
            backing,
            lines,
            columns,
        })
    }

    pub fn line_indices(&self) -> &[usize] {
        &self.lines
    }

    pub fn column_indices(&self) -> &[usize] {
        &self.columns
    }

    pub fn backing(&self) -> &M {
        &self.backing
    }

    pub fn into_backing(self) -> M {
        self.backing
    }

    fn translate(&self, line: usize, column: usize) -> Result<(usize, usize)> {
        check_position(line, column, self.lines.len(), self.columns.len())?;
        Ok((self.lines[line], self.columns[column]))
    }
}

impl<T: MatrixElement, M: Matrix<T>> Matrix<T> for IndexedSubMatrix<M> {
    fn lines(&self) -> usize {
        self.lines.len()
    }

    fn columns(&self) -> usize {
        self.columns.len()
    }

    fn storage_kind(&self) -> &'static str {
        INDEXED
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        let (line, column) = self.translate(line, column)?;
        self.backing.get(line, column)
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        let (line, column) = self.translate(line, column)?;
        self.backing.set(line, column, value)
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.lines.len())?;
        check_index(second, self.lines.len())?;
        self.lines.swap(first, second);
        Ok(())
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.columns.len())?;
        check_index(second, self.columns.len())?;
        self.columns.swap(first, second);
        Ok(())
    }

    fn multiply_line(&mut self, line: usize, _factor: &T, _ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.lines.len())?;
        reject("multiply_line", INDEXED)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &T,
        _source_factor: &T,
        _ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.lines.len())?;
        check_index(source, self.lines.len())?;
        reject("combine_lines", INDEXED)
    }
}

/// Submatrix selected by two ordered index sequences
///
/// The sequences are owned by the view, so nothing the caller does
/// afterwards changes which cells it shows. Sequences cannot be reordered,
/// which makes every swap illegal here.
#[derive(Debug, Clone)]
pub struct SequenceSubMatrix<M> {
    backing: M,
    lines: IndexSequence,
    columns: IndexSequence,
}

impl<M> SequenceSubMatrix<M> {
    pub fn new<T>(
        backing: M,
        lines: impl Into<IndexSequence>,
        columns: impl Into<IndexSequence>,
    ) -> Result<Self>
    where
        T: MatrixElement,
        M: Matrix<T>,
    {
        let lines = lines.into();
        let columns = columns.into();
        lines.check_within(backing.lines())?;
        columns.check_within(backing.columns())?;
        tracing::trace!(?lines, ?columns, backing = backing.storage_kind(), "sequence submatrix");
        Ok(Self {
            backing,
            lines,
            columns,
        })
    }

    pub fn line_sequence(&self) -> &IndexSequence {
        &self.lines
    }

    pub fn column_sequence(&self) -> &IndexSequence {
        &self.columns
    }

    pub fn backing(&self) -> &M {
        &self.backing
    }

    pub fn into_backing(self) -> M {
        self.backing
    }

    fn translate(&self, line: usize, column: usize) -> Result<(usize, usize)> {
        check_position(line, column, self.lines.len(), self.columns.len())?;
        // In range after the check above.
        let line = self.lines.start() + line * self.lines.step();
        let column = self.columns.start() + column * self.columns.step();
        Ok((line, column))
    }
}

impl<T: MatrixElement, M: Matrix<T>> Matrix<T> for SequenceSubMatrix<M> {
    fn lines(&self) -> usize {
        self.lines.len()
    }

    fn columns(&self) -> usize {
        self.columns.len()
    }

    fn storage_kind(&self) -> &'static str {
        SEQUENCE
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        let (line, column) = self.translate(line, column)?;
        self.backing.get(line, column)
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        let (line, column) = self.translate(line, column)?;
        self.backing.set(line, column, value)
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.lines.len())?;
        check_index(second, self.lines.len())?;
        reject("swap_lines", SEQUENCE)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.columns.len())?;
        check_index(second, self.columns.len())?;
        reject("swap_columns", SEQUENCE)
    }

    fn multiply_line(&mut self, line: usize, _factor: &T, _ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.lines.len())?;
        reject("multiply_line", SEQUENCE)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        _target_factor: &T,
        _source_factor: &T,
        _ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.lines.len())?;
        check_index(source, self.lines.len())?;
        reject("combine_lines", SEQUENCE)
    }
}

/// Whichever submatrix view suits the index sets
///
/// Built by [`MatrixViewExt::select`](super::MatrixViewExt::select): the
/// sequence view when both index sets are arithmetic, the array view
/// otherwise.
#[derive(Debug, Clone)]
pub enum Selection<M> {
    Sequence(SequenceSubMatrix<M>),
    Indexed(IndexedSubMatrix<M>),
}

impl<M> Selection<M> {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Selection::Sequence(_))
    }

    pub fn into_backing(self) -> M {
        match self {
            Selection::Sequence(view) => view.into_backing(),
            Selection::Indexed(view) => view.into_backing(),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $view:ident => $call:expr) => {
        match $self {
            Selection::Sequence($view) => $call,
            Selection::Indexed($view) => $call,
        }
    };
}

impl<T: MatrixElement, M: Matrix<T>> Matrix<T> for Selection<M> {
    fn lines(&self) -> usize {
        dispatch!(self, view => view.lines())
    }

    fn columns(&self) -> usize {
        dispatch!(self, view => view.columns())
    }

    fn storage_kind(&self) -> &'static str {
        dispatch!(self, view => view.storage_kind())
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        dispatch!(self, view => view.get(line, column))
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        dispatch!(self, view => view.set(line, column, value))
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        dispatch!(self, view => view.swap_lines(first, second))
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        dispatch!(self, view => view.swap_columns(first, second))
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        dispatch!(self, view => view.multiply_line(line, factor, ring))
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        target_factor: &T,
        source_factor: &T,
        ring: &dyn Ring<T>,
    ) -> Result<()> {
        dispatch!(self, view => view.combine_lines(target, source, target_factor, source_factor, ring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MatrixViewExt;
    use crate::DenseMatrix;
    use mxstore_core::MatrixError;

    fn grid() -> DenseMatrix<i32> {
        // m[l, c] = 10 * l + c
        let data = (0..4).flat_map(|l| (0..3).map(move |c| 10 * l + c)).collect();
        DenseMatrix::from_row_major(4, 3, data).unwrap()
    }

    #[test]
    fn test_swap_permutes_index_array_only() {
        let mut matrix = grid();
        let mut view = IndexedSubMatrix::new(&mut matrix, vec![2, 0], vec![1]).unwrap();
        assert_eq!(view.get(0, 0), Ok(21));
        assert_eq!(view.get(1, 0), Ok(1));

        view.swap_lines(0, 1).unwrap();
        assert_eq!(view.get(0, 0), Ok(1));
        assert_eq!(view.line_indices(), &[0, 2]);
        drop(view);
        assert_eq!(matrix, grid());
    }

    #[test]
    fn test_indexed_writes_reach_backing() {
        let mut matrix = grid();
        let mut view = (&mut matrix).sub_matrix(vec![3, 3], vec![2, 0]).unwrap();
        view.set(1, 1, -1).unwrap();
        assert!(view.multiply_line(0, &2, &mxstore_core::StandardRing::<i32>::new()).unwrap_err().is_structural());
        assert_eq!(matrix.get(3, 0), Ok(-1));
    }

    #[test]
    fn test_indexed_rejects_out_of_range_indices() {
        let mut matrix = grid();
        assert_eq!(
            IndexedSubMatrix::new(&mut matrix, vec![4], vec![0]).unwrap_err(),
            MatrixError::IndexOutOfRange { index: 4, extent: 4 }
        );
    }

    #[test]
    fn test_sequence_view() {
        let mut matrix = grid();
        let lines = IndexSequence::new(1, 2, 2).unwrap();
        let mut view = SequenceSubMatrix::new(&mut matrix, lines, 1..3).unwrap();
        assert_eq!(view.dimensions(), (2, 2));
        assert_eq!(view.entries().collect::<Vec<_>>(), [11, 12, 31, 32]);
        assert!(view.swap_lines(0, 1).unwrap_err().is_structural());
        assert!(view.get(2, 0).is_err());
        view.set(1, 1, 0).unwrap();
        assert_eq!(matrix.get(3, 2), Ok(0));
        assert!(SequenceSubMatrix::new(&mut matrix, 2..5, 0..1).is_err());
    }

    #[test]
    fn test_select_picks_view_kind() {
        let mut matrix = grid();
        let contiguous = (&mut matrix).select(&[1, 2, 3], &[0, 2]).unwrap();
        assert!(contiguous.is_sequence());
        assert_eq!(contiguous.get(2, 1), Ok(32));

        let scattered = (&mut matrix).select(&[3, 0], &[0, 2]).unwrap();
        assert!(!scattered.is_sequence());
        assert_eq!(scattered.get(0, 1), Ok(32));
    }

    #[test]
    fn test_transpose_over_sequence_over_indexed() {
        let mut matrix = grid();
        // a(i, j) = m([3, 1, 0][i], [2, 0, 1][j]), b = a[1..3, 0..3]
        let mut view = (&mut matrix)
            .sub_matrix(vec![3, 1, 0], vec![2, 0, 1])
            .unwrap()
            .sub_matrix_seq(1..3, 0..3)
            .unwrap()
            .transpose();
        assert_eq!(view.dimensions(), (3, 2));
        assert_eq!(view.get(0, 0), Ok(12));
        assert_eq!(view.get(0, 1), Ok(2));
        assert_eq!(view.get(1, 0), Ok(10));
        assert_eq!(view.get(2, 1), Ok(1));
        assert_eq!(view.entries().collect::<Vec<_>>(), [12, 2, 10, 0, 11, 1]);
        assert!(view.get(0, 2).is_err());

        // line swaps on the transpose are column swaps on the sequence view
        assert_eq!(
            view.swap_lines(0, 1),
            Err(MatrixError::illegal("swap_columns", "sequence submatrix"))
        );
        assert_eq!(
            view.swap_columns(0, 1),
            Err(MatrixError::illegal("swap_lines", "sequence submatrix"))
        );
        assert_eq!(
            view.swap_lines(0, 3),
            Err(MatrixError::IndexOutOfRange { index: 3, extent: 3 })
        );

        view.set(1, 1, 99).unwrap();
        drop(view);
        assert_eq!(matrix.get(0, 0), Ok(99));
        assert_eq!(matrix.get(1, 0), Ok(10));
    }

    #[test]
    fn test_transpose_swap_permutes_inner_index_array() {
        let mut matrix = grid();
        let mut view = (&mut matrix)
            .sub_matrix(vec![0, 2], vec![1, 2])
            .unwrap()
            .transpose();
        assert_eq!(view.entries().collect::<Vec<_>>(), [1, 21, 2, 22]);

        view.swap_columns(0, 1).unwrap();
        assert_eq!(view.get(0, 0), Ok(21));
        assert_eq!(view.entries().collect::<Vec<_>>(), [21, 1, 22, 2]);
        assert_eq!(view.backing().line_indices(), &[2, 0]);

        view.swap_lines(0, 1).unwrap();
        assert_eq!(view.get(0, 0), Ok(22));
        assert_eq!(view.backing().column_indices(), &[2, 1]);
        drop(view);
        assert_eq!(matrix, grid());
    }

    #[test]
    fn test_select_over_transpose() {
        let mut matrix = grid();
        // lines of the transpose are backing columns
        let selection = (&mut matrix).transpose().select(&[2, 0], &[1, 2, 3]).unwrap();
        assert!(!selection.is_sequence());
        assert_eq!(selection.dimensions(), (2, 3));
        assert_eq!(selection.entries().collect::<Vec<_>>(), [12, 22, 32, 10, 20, 30]);
    }
}
