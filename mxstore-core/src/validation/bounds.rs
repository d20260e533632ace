//! Coordinate and shape validation
//!
//! Pure checks shared by every storage so that range and shape failures
//! are reported the same way everywhere.

use crate::{MatrixError, Result};

/// Fail unless `index < extent`
#[inline]
pub const fn check_index(index: usize, extent: usize) -> Result<()> {
    if index < extent {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { index, extent })
    }
}

/// Fail unless `(line, column)` lies inside a `lines x columns` matrix
#[inline]
pub const fn check_position(
    line: usize,
    column: usize,
    lines: usize,
    columns: usize,
) -> Result<()> {
    if line >= lines {
        return Err(MatrixError::IndexOutOfRange {
            index: line,
            extent: lines,
        });
    }
    check_index(column, columns)
}

/// Fail unless the requested shape is square
pub const fn check_square(lines: usize, columns: usize) -> Result<()> {
    if lines == columns {
        Ok(())
    } else {
        Err(MatrixError::NotSquare { lines, columns })
    }
}

/// Fail unless two shapes agree
pub fn check_same_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(MatrixError::ShapeMismatch { left, right })
    }
}

/// Fail unless every index is below `extent`
pub fn check_indices(indices: &[usize], extent: usize) -> Result<()> {
    indices
        .iter()
        .try_for_each(|&index| check_index(index, extent))
}

/// Number of cells in a `lines x columns` matrix, rejecting overflow
pub fn checked_cell_count(lines: usize, columns: usize) -> Result<usize> {
    lines
        .checked_mul(columns)
        .ok_or(MatrixError::CapacityOverflow { lines, columns })
}

/// Number of cells on and to one side of the diagonal of a square matrix,
/// `dimension * (dimension + 1) / 2`, rejecting overflow
pub fn checked_triangle_count(dimension: usize) -> Result<usize> {
    let overflow = MatrixError::CapacityOverflow {
        lines: dimension,
        columns: dimension,
    };
    let next = dimension.checked_add(1).ok_or(overflow)?;
    // halve the even factor first so only the final product can overflow
    let product = if dimension % 2 == 0 {
        (dimension / 2).checked_mul(next)
    } else {
        dimension.checked_mul(next / 2)
    };
    product.ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_position() {
        assert_eq!(check_position(1, 2, 2, 3), Ok(()));
        assert_eq!(
            check_position(2, 0, 2, 3),
            Err(MatrixError::IndexOutOfRange { index: 2, extent: 2 })
        );
        assert_eq!(
            check_position(0, 3, 2, 3),
            Err(MatrixError::IndexOutOfRange { index: 3, extent: 3 })
        );
    }

    #[test]
    fn test_shape_checks() {
        assert_eq!(check_square(4, 4), Ok(()));
        assert_eq!(
            check_square(2, 3),
            Err(MatrixError::NotSquare { lines: 2, columns: 3 })
        );
        assert!(check_same_shape((2, 3), (2, 3)).is_ok());
        assert!(check_same_shape((2, 3), (3, 2)).is_err());
        assert_eq!(
            checked_cell_count(usize::MAX, 2),
            Err(MatrixError::CapacityOverflow { lines: usize::MAX, columns: 2 })
        );
        assert_eq!(checked_cell_count(3, 4), Ok(12));
    }

    #[test]
    fn test_check_indices() {
        assert_eq!(check_indices(&[0, 4, 2], 5), Ok(()));
        assert_eq!(
            check_indices(&[0, 5], 5),
            Err(MatrixError::IndexOutOfRange { index: 5, extent: 5 })
        );
    }

    #[test]
    fn test_checked_triangle_count() {
        assert_eq!(checked_triangle_count(0), Ok(0));
        assert_eq!(checked_triangle_count(4), Ok(10));
        assert_eq!(checked_triangle_count(5), Ok(15));
        // exact even when dimension * (dimension + 1) alone would overflow
        let large = 1usize << (usize::BITS / 2);
        assert_eq!(checked_triangle_count(large), Ok((large / 2) * (large + 1)));
        assert_eq!(
            checked_triangle_count(usize::MAX),
            Err(MatrixError::CapacityOverflow {
                lines: usize::MAX,
                columns: usize::MAX
            })
        );
        assert!(checked_triangle_count(usize::MAX / 2).is_err());
    }
}
