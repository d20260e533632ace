//! A single matrix line seen as a vector

use mxstore_core::{check_index, Matrix, MatrixElement, Result, Vector};

use crate::legality::reject;

const LINE: &str = "line vector";

/// Vector whose entry `i` is entry `(line, i)` of the backing matrix
///
/// Swapping two entries would mean moving whole matrix columns one cell at
/// a time, which this view does not treat as a single operation: only the
/// trivial swap of an entry with itself is accepted.
#[derive(Debug, Clone)]
pub struct LineVector<M> {
    backing: M,
    line: usize,
}

impl<M> LineVector<M> {
    pub fn new<T>(backing: M, line: usize) -> Result<Self>
    where
        T: MatrixElement,
        M: Matrix<T>,
    {
        check_index(line, backing.lines())?;
        tracing::trace!(line, backing = backing.storage_kind(), "line vector");
        Ok(Self { backing, line })
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_backing(self) -> M {
        self.backing
    }
}

impl<T: MatrixElement, M: Matrix<T>> Vector<T> for LineVector<M> {
    fn len(&self) -> usize {
        self.backing.columns()
    }

    fn storage_kind(&self) -> &'static str {
        LINE
    }

    fn get(&self, index: usize) -> Result<T> {
        self.backing.get(self.line, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.backing.set(self.line, index, value)
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.backing.columns())?;
        check_index(second, self.backing.columns())?;
        if first == second {
            Ok(())
        } else {
            reject("swap", LINE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MatrixViewExt;
    use crate::SparseMatrix;
    use mxstore_core::{MatrixError, StandardRing};

    #[test]
    fn test_line_vector_forwards() {
        let mut matrix = SparseMatrix::new(3, 4, 0);
        matrix.set(1, 2, 8).unwrap();
        let mut line = (&mut matrix).line_vector(1).unwrap();
        assert_eq!(line.len(), 4);
        assert_eq!(line.entries().collect::<Vec<_>>(), [0, 0, 8, 0]);
        line.set(0, 3).unwrap();
        assert!(!line.is_null(&StandardRing::<i32>::new()).unwrap());
        assert_eq!(line.swap(2, 2), Ok(()));
        assert_eq!(line.swap(0, 2), Err(MatrixError::illegal("swap", "line vector")));
        assert!(matches!(line.swap(0, 4), Err(MatrixError::IndexOutOfRange { .. })));
        assert_eq!(matrix.get(1, 0), Ok(3));
    }

    #[test]
    fn test_line_out_of_range() {
        let mut matrix = SparseMatrix::new(3, 4, 0);
        assert!(LineVector::new(&mut matrix, 3).is_err());
    }
}
