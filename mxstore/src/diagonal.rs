//! Diagonal storage: only the `n` diagonal cells are kept

use mxstore_core::{
    check_index, check_position, EqualityComparator, Matrix, MatrixElement, Result, Ring,
    Structure,
};

use crate::legality::{illegal, reject};

const DIAGONAL: &str = "diagonal";

/// Square matrix whose off-diagonal cells always read `default`
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalMatrix<T> {
    diagonal: Vec<T>,
    default: T,
}

impl<T: MatrixElement> DiagonalMatrix<T> {
    pub fn new(dimension: usize, default: T) -> Self {
        Self {
            diagonal: vec![default.clone(); dimension],
            default,
        }
    }

    /// Diagonal taken from `values`, everything else `default`
    pub fn from_diagonal(values: Vec<T>, default: T) -> Self {
        Self {
            diagonal: values,
            default,
        }
    }

    pub fn diagonal(&self) -> &[T] {
        &self.diagonal
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: MatrixElement> Matrix<T> for DiagonalMatrix<T> {
    fn lines(&self) -> usize {
        self.diagonal.len()
    }

    fn columns(&self) -> usize {
        self.diagonal.len()
    }

    fn storage_kind(&self) -> &'static str {
        DIAGONAL
    }

    fn structure(&self) -> Structure {
        Structure::Diagonal
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        let n = self.diagonal.len();
        check_position(line, column, n, n)?;
        Ok(if line == column {
            self.diagonal[line].clone()
        } else {
            self.default.clone()
        })
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        let n = self.diagonal.len();
        check_position(line, column, n, n)?;
        if line != column {
            return Err(illegal("set", DIAGONAL));
        }
        self.diagonal[line] = value;
        Ok(())
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.diagonal.len())?;
        check_index(second, self.diagonal.len())?;
        reject("swap_lines", DIAGONAL)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.diagonal.len())?;
        check_index(second, self.diagonal.len())?;
        reject("swap_columns", DIAGONAL)
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.diagonal.len())?;
        self.diagonal[line] = ring.multiply(factor, &self.diagonal[line]);
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
        check_index(target, self.diagonal.len())?;
        check_index(source, self.diagonal.len())?;
        reject("combine_lines", DIAGONAL)
    }

    // Off-diagonal cells all hold the same default.
    fn is_symmetric(&self, _comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxstore_core::{MatrixError, StandardRing};

    #[test]
    fn test_off_diagonal() {
        let mut matrix = DiagonalMatrix::from_diagonal(vec![1, 2, 3], 0);
        assert_eq!(matrix.get(0, 1), Ok(0));
        assert_eq!(matrix.get(2, 2), Ok(3));
        assert_eq!(
            matrix.set(0, 1, 5),
            Err(MatrixError::illegal("set", "diagonal"))
        );
        matrix.set(1, 1, 9).unwrap();
        assert_eq!(matrix.diagonal(), &[1, 9, 3]);
    }

    #[test]
    fn test_multiply_line_touches_one_cell() {
        let ring = StandardRing::<i32>::new();
        let mut matrix = DiagonalMatrix::from_diagonal(vec![1, 2, 3], 0);
        matrix.multiply_line(1, &5, &ring).unwrap();
        assert_eq!(matrix.diagonal(), &[1, 10, 3]);
        assert_eq!(matrix.get(1, 0), Ok(0));
        assert!(matrix.swap_lines(0, 1).unwrap_err().is_structural());
        assert!(matrix.combine_lines(0, 1, &1, &1, &ring).unwrap_err().is_structural());
    }

    #[test]
    fn test_entries_visit_diagonal_only() {
        let matrix = DiagonalMatrix::from_diagonal(vec![4, 5, 6], 0);
        assert_eq!(matrix.entries().collect::<Vec<_>>(), [4, 5, 6]);
        assert!(matrix.is_symmetric(None).unwrap());
    }
}
