//! Entry-wise matrix arithmetic over a ring
//!
//! The operator reads its operands through the access contract only, so any
//! storage or view can take part. Results are allocated by the configured
//! factory; cells whose computed value already matches the freshly allocated
//! result are left untouched, which lets structured factories (triangular,
//! diagonal, zero) hold results that respect their shape.

use mxstore_core::{check_same_shape, Matrix, MatrixElement, MatrixError, Result, Ring};

use crate::factory::MatrixFactory;

/// Adds and multiplies matrices, allocating results through a factory
#[derive(Debug, Clone)]
pub struct MatrixOperator<F, R> {
    factory: F,
    ring: R,
}

impl<F, R> MatrixOperator<F, R> {
    pub fn builder() -> OperatorBuilder<F, R> {
        OperatorBuilder::new()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// `left + right`, cell by cell
    pub fn add<T, A, B>(&self, left: &A, right: &B) -> Result<F::Output>
    where
        T: MatrixElement,
        F: MatrixFactory<T>,
        R: Ring<T>,
        A: Matrix<T> + ?Sized,
        B: Matrix<T> + ?Sized,
    {
        check_same_shape(left.dimensions(), right.dimensions())?;
        let (lines, columns) = left.dimensions();
        tracing::debug!(operation = "add", lines, columns, "running matrix operator");

        let mut result = self.factory.create_matrix(lines, columns)?;
        for line in 0..lines {
            for column in 0..columns {
                let sum = self
                    .ring
                    .add(&left.get(line, column)?, &right.get(line, column)?);
                write_changed(&mut result, line, column, sum)?;
            }
        }
        Ok(result)
    }

    /// Matrix product `left · right`
    pub fn multiply<T, A, B>(&self, left: &A, right: &B) -> Result<F::Output>
    where
        T: MatrixElement,
        F: MatrixFactory<T>,
        R: Ring<T>,
        A: Matrix<T> + ?Sized,
        B: Matrix<T> + ?Sized,
    {
        if left.columns() != right.lines() {
            return Err(MatrixError::ShapeMismatch {
                left: left.dimensions(),
                right: right.dimensions(),
            });
        }
        let (lines, inner, columns) = (left.lines(), left.columns(), right.columns());
        tracing::debug!(
            operation = "multiply",
            lines,
            inner,
            columns,
            "running matrix operator"
        );

        let mut result = self.factory.create_matrix(lines, columns)?;
        for line in 0..lines {
            let row = (0..inner)
                .map(|k| left.get(line, k))
                .collect::<Result<Vec<T>>>()?;
            for column in 0..columns {
                let mut sum = self.ring.additive_unity();
                for (k, factor) in row.iter().enumerate() {
                    let product = self.ring.multiply(factor, &right.get(k, column)?);
                    sum = self.ring.add(&sum, &product);
                }
                write_changed(&mut result, line, column, sum)?;
            }
        }
        Ok(result)
    }
}

fn write_changed<T: MatrixElement, M: Matrix<T>>(
    matrix: &mut M,
    line: usize,
    column: usize,
    value: T,
) -> Result<()> {
    if matrix.get(line, column)? == value {
        Ok(())
    } else {
        matrix.set(line, column, value)
    }
}

/// Collects the factory and ring of a [`MatrixOperator`]
#[derive(Debug, Clone)]
pub struct OperatorBuilder<F, R> {
    factory: Option<F>,
    ring: Option<R>,
}

impl<F, R> Default for OperatorBuilder<F, R> {
    fn default() -> Self {
        Self {
            factory: None,
            ring: None,
        }
    }
}

impl<F, R> OperatorBuilder<F, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn ring(mut self, ring: R) -> Self {
        self.ring = Some(ring);
        self
    }

    /// Fails with [`MatrixError::MissingDependency`] when either part is absent
    pub fn build(self) -> Result<MatrixOperator<F, R>> {
        let factory = self
            .factory
            .ok_or(MatrixError::MissingDependency { dependency: "factory" })?;
        let ring = self
            .ring
            .ok_or(MatrixError::MissingDependency { dependency: "ring" })?;
        Ok(MatrixOperator { factory, ring })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DenseFactory, DiagonalFactory, SparseFactory, TriangularFactory};
    use crate::view::MatrixViewExt;
    use crate::{DenseMatrix, DiagonalMatrix, IdentityMatrix, Triangle, TriangularMatrix};
    use mxstore_core::{BooleanRing, StandardRing};

    type Ring64 = StandardRing<i64>;

    fn dense(lines: usize, columns: usize, data: &[i64]) -> DenseMatrix<i64> {
        DenseMatrix::from_row_major(lines, columns, data.to_vec()).unwrap()
    }

    #[test]
    fn test_builder_requires_factory_and_ring() {
        let missing_factory = OperatorBuilder::<DenseFactory<i64>, Ring64>::new()
            .ring(StandardRing::new())
            .build()
            .unwrap_err();
        assert_eq!(
            missing_factory,
            MatrixError::MissingDependency { dependency: "factory" }
        );

        let missing_ring = MatrixOperator::<_, Ring64>::builder()
            .factory(DenseFactory::new(0i64))
            .build()
            .unwrap_err();
        assert_eq!(missing_ring, MatrixError::MissingDependency { dependency: "ring" });
    }

    #[test]
    fn test_add_dense() {
        let operator = OperatorBuilder::new()
            .factory(DenseFactory::new(0i64))
            .ring(Ring64::new())
            .build()
            .unwrap();
        let sum = operator
            .add(&dense(2, 2, &[1, 2, 3, 4]), &dense(2, 2, &[10, 20, 30, 40]))
            .unwrap();
        assert_eq!(sum.row_major_data(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_shape_mismatch() {
        let operator = OperatorBuilder::new()
            .factory(DenseFactory::new(0i64))
            .ring(Ring64::new())
            .build()
            .unwrap();
        let left = dense(2, 3, &[0; 6]);
        let right = dense(2, 2, &[0; 4]);
        assert_eq!(
            operator.add(&left, &right).unwrap_err(),
            MatrixError::ShapeMismatch { left: (2, 3), right: (2, 2) }
        );
        assert!(operator.multiply(&left, &right).is_err());
        assert!(operator.multiply(&right, &left).is_ok());
    }

    #[test]
    fn test_multiply_through_views() {
        let operator = OperatorBuilder::new()
            .factory(SparseFactory::new(0i64))
            .ring(Ring64::new())
            .build()
            .unwrap();
        let left = dense(2, 3, &[1, 2, 3, 4, 5, 6]);
        // (2x3) · (3x2) via the transpose of a 2x3 matrix
        let mut right_backing = dense(2, 3, &[1, 0, 1, 0, 1, 0]);
        let right = (&mut right_backing).transpose();
        let product = operator.multiply(&left, &right).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product.get(0, 0), Ok(4));
        assert_eq!(product.get(0, 1), Ok(2));
        assert_eq!(product.get(1, 0), Ok(10));
        assert_eq!(product.get(1, 1), Ok(5));
    }

    #[test]
    fn test_structured_results_keep_their_shape() {
        let ring = Ring64::new();
        let upper = {
            let mut m = TriangularMatrix::upper(3, 0i64).unwrap();
            for (l, c, v) in [(0, 0, 1), (0, 2, 4), (1, 1, 2), (2, 2, 3)] {
                m.set(l, c, v).unwrap();
            }
            m
        };
        let operator = OperatorBuilder::new()
            .factory(TriangularFactory::new(Triangle::Upper, 0i64))
            .ring(ring)
            .build()
            .unwrap();
        let doubled = operator.add(&upper, &upper).unwrap();
        assert_eq!(doubled.get(0, 2), Ok(8));
        let squared = operator.multiply(&upper, &upper).unwrap();
        assert_eq!(squared.get(0, 2), Ok(16));

        let identity = IdentityMatrix::new(3, ring);
        let diagonal_operator = OperatorBuilder::new()
            .factory(DiagonalFactory::new(0i64))
            .ring(ring)
            .build()
            .unwrap();
        let product = diagonal_operator
            .multiply(&identity, &DiagonalMatrix::from_diagonal(vec![2, 3, 4], 0))
            .unwrap();
        assert_eq!(product.diagonal(), &[2, 3, 4]);

        // Off-diagonal result into a diagonal factory is a structural error
        assert!(diagonal_operator
            .multiply(&upper, &upper)
            .unwrap_err()
            .is_structural());
    }

    #[test]
    fn test_boolean_ring() {
        let operator = OperatorBuilder::new()
            .factory(DenseFactory::new(false))
            .ring(BooleanRing)
            .build()
            .unwrap();
        let a = DenseMatrix::from_row_major(1, 2, vec![true, true]).unwrap();
        let b = DenseMatrix::from_row_major(2, 1, vec![true, true]).unwrap();
        assert_eq!(operator.multiply(&a, &b).unwrap().get(0, 0), Ok(false));
        assert_eq!(operator.add(&a, &a).unwrap().row_major_data(), &[false, false]);
    }
}
