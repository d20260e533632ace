//! Positional fill of freshly allocated storages
//!
//! A front end that has parsed a literal hands over the extent and a flat
//! stream of values. Matrices are filled in row-major order: line 0 from
//! column 0 to the last column, then line 1, and so on. A value equal to what
//! the new storage already holds at that position is not written, so a dense
//! stream can populate a triangular, diagonal or zero storage as long as it
//! carries the default outside the structure.

use mxstore_core::{checked_cell_count, Matrix, MatrixElement, MatrixError, Result, Vector};

use crate::factory::{MatrixFactory, VectorFactory};

/// Allocate a `lines x columns` matrix from `factory` and fill it row-major
///
/// The stream must hold exactly `lines * columns` values; otherwise the
/// result is [`MatrixError::ValueCount`]. At most one value past the extent
/// is pulled, so a long stream reports `found` as `expected + 1`.
pub fn fill_matrix<T, F, I>(
    factory: &F,
    lines: usize,
    columns: usize,
    values: I,
) -> Result<F::Output>
where
    T: MatrixElement,
    F: MatrixFactory<T>,
    I: IntoIterator<Item = T>,
{
    let expected = checked_cell_count(lines, columns)?;
    let mut matrix = factory.create_matrix(lines, columns)?;
    let mut values = values.into_iter();
    let mut count = 0usize;
    let mut written = 0usize;

    for (position, value) in values.by_ref().take(expected).enumerate() {
        count += 1;
        let (line, column) = (position / columns, position % columns);
        if matrix.get(line, column)? != value {
            matrix.set(line, column, value)?;
            written += 1;
        }
    }
    check_count(expected, count, &mut values)?;

    tracing::debug!(
        storage = matrix.storage_kind(),
        lines,
        columns,
        written,
        "filled matrix"
    );
    Ok(matrix)
}

/// Allocate a vector of `len` entries from `factory` and fill it in order
pub fn fill_vector<T, F, I>(factory: &F, len: usize, values: I) -> Result<F::Output>
where
    T: MatrixElement,
    F: VectorFactory<T>,
    I: IntoIterator<Item = T>,
{
    let mut vector = factory.create_vector(len)?;
    let mut values = values.into_iter();
    let mut count = 0usize;

    for (index, value) in values.by_ref().take(len).enumerate() {
        count += 1;
        if vector.get(index)? != value {
            vector.set(index, value)?;
        }
    }
    check_count(len, count, &mut values)?;

    tracing::debug!(storage = vector.storage_kind(), len, "filled vector");
    Ok(vector)
}

// Short streams stop early; long ones are detected by one extra pull.
fn check_count<T>(
    expected: usize,
    consumed: usize,
    rest: &mut impl Iterator<Item = T>,
) -> Result<()> {
    let found = if consumed < expected {
        consumed
    } else if rest.next().is_some() {
        expected.saturating_add(1)
    } else {
        return Ok(());
    };
    Err(MatrixError::ValueCount { expected, found })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DenseFactory, DiagonalFactory, SparseFactory, TriangularFactory, ZeroFactory};
    use crate::Triangle;
    use mxstore_core::{StandardRing, Structure};

    #[test]
    fn test_row_major_order() {
        let matrix = fill_matrix(&DenseFactory::new(0), 2, 3, 1..=6).unwrap();
        assert_eq!(matrix.line(0).unwrap(), &[1, 2, 3]);
        assert_eq!(matrix.line(1).unwrap(), &[4, 5, 6]);

        let sparse = fill_matrix(&SparseFactory::new(0), 2, 2, [0, 7, 0, 0]).unwrap();
        assert_eq!(sparse.stored_count(), 1);
        assert_eq!(sparse.get(0, 1), Ok(7));
    }

    #[test]
    fn test_value_count_mismatch() {
        assert_eq!(
            fill_matrix(&DenseFactory::new(0), 2, 2, [1, 2, 3]).unwrap_err(),
            MatrixError::ValueCount { expected: 4, found: 3 }
        );
        assert_eq!(
            fill_matrix(&DenseFactory::new(0), 2, 2, 0..6).unwrap_err(),
            MatrixError::ValueCount { expected: 4, found: 5 }
        );
        assert_eq!(
            fill_vector(&DenseFactory::new(0), 3, [1]).unwrap_err(),
            MatrixError::ValueCount { expected: 3, found: 1 }
        );
    }

    #[test]
    fn test_dense_stream_into_structured_storage() {
        let lower = fill_matrix(
            &TriangularFactory::new(Triangle::Lower, 0),
            3,
            3,
            [1, 0, 0, 2, 3, 0, 4, 5, 6],
        )
        .unwrap();
        assert_eq!(lower.structure(), Structure::Lower);
        assert_eq!(lower.get(2, 1), Ok(5));

        let diagonal = fill_matrix(&DiagonalFactory::new(0), 2, 2, [9, 0, 0, 8]).unwrap();
        assert_eq!(diagonal.diagonal(), &[9, 8]);

        let off_structure = fill_matrix(&DiagonalFactory::new(0), 2, 2, [9, 1, 0, 8]);
        assert!(off_structure.unwrap_err().is_structural());

        let zero = fill_matrix(&ZeroFactory::new(StandardRing::<i32>::new()), 1, 2, [0, 0]);
        assert!(zero.is_ok());
    }

    #[test]
    fn test_fill_vector() {
        let vector = fill_vector(&SparseFactory::new(0u8), 4, [0, 3, 0, 1]).unwrap();
        assert_eq!(vector.stored_count(), 2);
        assert_eq!(vector.last_used_index(), Some(3));

        let empty = fill_matrix(&DenseFactory::new(0), 0, 5, core::iter::empty()).unwrap();
        assert_eq!(empty.dimensions(), (0, 5));
    }

    #[test]
    fn test_unbounded_stream_is_rejected_without_draining() {
        assert_eq!(
            fill_matrix(&DenseFactory::new(0u8), 1, 1, core::iter::repeat(1u8)).unwrap_err(),
            MatrixError::ValueCount { expected: 1, found: 2 }
        );
        assert_eq!(
            fill_vector(&SparseFactory::new(0u8), 3, (0u8..).map(|v| v % 2)).unwrap_err(),
            MatrixError::ValueCount { expected: 3, found: 4 }
        );
    }
}
