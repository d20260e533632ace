//! Factories: build a storage of one kind from an extent
//!
//! A factory fixes everything about a storage except its shape, so the
//! operator and the fill routines can allocate results without knowing which
//! storage they are producing. Square-only storages reject unequal extents
//! with [`MatrixError::NotSquare`](mxstore_core::MatrixError::NotSquare).

use mxstore_core::{check_square, Matrix, MatrixElement, Monoid, Result, Ring, Vector};

use crate::{
    BitSymmetricMatrix, DenseMatrix, DenseVector, DiagonalMatrix, IdentityMatrix, SparseMatrix,
    SparseVector, Triangle, TriangularMatrix, ZeroMatrix, ZeroVector,
};

/// Builds matrices of a single storage kind
pub trait MatrixFactory<T: MatrixElement> {
    type Output: Matrix<T>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output>;
}

/// Builds vectors of a single storage kind
pub trait VectorFactory<T: MatrixElement> {
    type Output: Vector<T>;

    fn create_vector(&self, len: usize) -> Result<Self::Output>;
}

fn log_allocation(kind: &'static str, lines: usize, columns: usize) {
    tracing::debug!(kind, lines, columns, "allocating storage");
}

/// Dense storages with every cell set to `fill`
#[derive(Debug, Clone, Default)]
pub struct DenseFactory<T> {
    pub fill: T,
}

impl<T> DenseFactory<T> {
    pub fn new(fill: T) -> Self {
        Self { fill }
    }
}

impl<T: MatrixElement> MatrixFactory<T> for DenseFactory<T> {
    type Output = DenseMatrix<T>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        log_allocation("dense", lines, columns);
        DenseMatrix::new(lines, columns, self.fill.clone())
    }
}

impl<T: MatrixElement> VectorFactory<T> for DenseFactory<T> {
    type Output = DenseVector<T>;

    fn create_vector(&self, len: usize) -> Result<Self::Output> {
        log_allocation("dense", 1, len);
        Ok(DenseVector::new(len, self.fill.clone()))
    }
}

/// Sparse storages defaulting to `default`
#[derive(Debug, Clone, Default)]
pub struct SparseFactory<T> {
    pub default: T,
}

impl<T> SparseFactory<T> {
    pub fn new(default: T) -> Self {
        Self { default }
    }
}

impl<T: MatrixElement> MatrixFactory<T> for SparseFactory<T> {
    type Output = SparseMatrix<T>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        log_allocation("sparse", lines, columns);
        Ok(SparseMatrix::new(lines, columns, self.default.clone()))
    }
}

impl<T: MatrixElement> VectorFactory<T> for SparseFactory<T> {
    type Output = SparseVector<T>;

    fn create_vector(&self, len: usize) -> Result<Self::Output> {
        log_allocation("sparse", 1, len);
        Ok(SparseVector::new(len, self.default.clone()))
    }
}

/// Square triangular storages
#[derive(Debug, Clone)]
pub struct TriangularFactory<T> {
    pub triangle: Triangle,
    pub default: T,
}

impl<T> TriangularFactory<T> {
    pub fn new(triangle: Triangle, default: T) -> Self {
        Self { triangle, default }
    }
}

impl<T: MatrixElement> MatrixFactory<T> for TriangularFactory<T> {
    type Output = TriangularMatrix<T>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        check_square(lines, columns)?;
        log_allocation("triangular", lines, columns);
        TriangularMatrix::new(self.triangle, lines, self.default.clone())
    }
}

/// Square diagonal storages
#[derive(Debug, Clone, Default)]
pub struct DiagonalFactory<T> {
    pub default: T,
}

impl<T> DiagonalFactory<T> {
    pub fn new(default: T) -> Self {
        Self { default }
    }
}

impl<T: MatrixElement> MatrixFactory<T> for DiagonalFactory<T> {
    type Output = DiagonalMatrix<T>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        check_square(lines, columns)?;
        log_allocation("diagonal", lines, columns);
        Ok(DiagonalMatrix::new(lines, self.default.clone()))
    }
}

/// Square identity matrices over a ring
#[derive(Debug, Clone, Default)]
pub struct IdentityFactory<R> {
    pub ring: R,
}

impl<R> IdentityFactory<R> {
    pub fn new(ring: R) -> Self {
        Self { ring }
    }
}

impl<T: MatrixElement, R: Ring<T> + Clone> MatrixFactory<T> for IdentityFactory<R> {
    type Output = IdentityMatrix<T, R>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        check_square(lines, columns)?;
        log_allocation("identity", lines, columns);
        Ok(IdentityMatrix::new(lines, self.ring.clone()))
    }
}

/// Zero matrices and vectors over a monoid
#[derive(Debug, Clone, Default)]
pub struct ZeroFactory<M> {
    pub monoid: M,
}

impl<M> ZeroFactory<M> {
    pub fn new(monoid: M) -> Self {
        Self { monoid }
    }
}

impl<T: MatrixElement, M: Monoid<T> + Clone> MatrixFactory<T> for ZeroFactory<M> {
    type Output = ZeroMatrix<T, M>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        log_allocation("zero", lines, columns);
        Ok(ZeroMatrix::new(lines, columns, self.monoid.clone()))
    }
}

impl<T: MatrixElement, M: Monoid<T> + Clone> VectorFactory<T> for ZeroFactory<M> {
    type Output = ZeroVector<T, M>;

    fn create_vector(&self, len: usize) -> Result<Self::Output> {
        log_allocation("zero", 1, len);
        Ok(ZeroVector::new(len, self.monoid.clone()))
    }
}

/// Square bit-packed symmetric boolean matrices
#[derive(Debug, Clone, Copy, Default)]
pub struct BitSymmetricFactory {
    pub default: bool,
}

impl BitSymmetricFactory {
    pub fn new(default: bool) -> Self {
        Self { default }
    }
}

impl MatrixFactory<bool> for BitSymmetricFactory {
    type Output = BitSymmetricMatrix;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        check_square(lines, columns)?;
        log_allocation("bit-packed symmetric", lines, columns);
        BitSymmetricMatrix::new(lines, self.default)
    }
}
