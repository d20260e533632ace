//! Configuration-driven storage selection
//!
//! [`StorageConfig`] names a storage kind as data, so callers (or a config
//! file) can choose the storage at runtime. [`DynamicFactory`] turns a config
//! into a [`DynamicMatrix`], which dispatches the contract to whichever
//! storage it holds.

use mxstore_core::{
    EqualityComparator, Matrix, MatrixElement, Monoid, Result, Ring, Structure,
};

use crate::factory::{
    DenseFactory, DiagonalFactory, IdentityFactory, MatrixFactory, SparseFactory,
    TriangularFactory, ZeroFactory,
};
use crate::{
    DenseMatrix, DiagonalMatrix, IdentityMatrix, SparseMatrix, Triangle, TriangularMatrix,
    ZeroMatrix,
};

/// Storage kinds a [`DynamicFactory`] can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageKind {
    #[default]
    Dense,
    Sparse,
    Triangular,
    Diagonal,
    Identity,
    Zero,
}

impl StorageKind {
    /// Whether the kind only exists for square shapes
    pub const fn is_square_only(self) -> bool {
        matches!(
            self,
            StorageKind::Triangular | StorageKind::Diagonal | StorageKind::Identity
        )
    }
}

/// Runtime choice of storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StorageConfig {
    pub kind: StorageKind,
    /// Only read for [`StorageKind::Triangular`]
    pub triangle: Triangle,
}

impl StorageConfig {
    pub fn new(kind: StorageKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: StorageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_triangle(mut self, triangle: Triangle) -> Self {
        self.triangle = triangle;
        self
    }
}

/// A matrix whose storage was picked at runtime
#[derive(Debug, Clone)]
pub enum DynamicMatrix<T, R> {
    Dense(DenseMatrix<T>),
    Sparse(SparseMatrix<T>),
    Triangular(TriangularMatrix<T>),
    Diagonal(DiagonalMatrix<T>),
    Identity(IdentityMatrix<T, R>),
    Zero(ZeroMatrix<T, R>),
}

macro_rules! dispatch {
    ($self:expr, $matrix:ident => $body:expr) => {
        match $self {
            DynamicMatrix::Dense($matrix) => $body,
            DynamicMatrix::Sparse($matrix) => $body,
            DynamicMatrix::Triangular($matrix) => $body,
            DynamicMatrix::Diagonal($matrix) => $body,
            DynamicMatrix::Identity($matrix) => $body,
            DynamicMatrix::Zero($matrix) => $body,
        }
    };
}

impl<T, R> DynamicMatrix<T, R> {
    /// Kind of the held storage
    pub fn kind(&self) -> StorageKind {
        match self {
            DynamicMatrix::Dense(_) => StorageKind::Dense,
            DynamicMatrix::Sparse(_) => StorageKind::Sparse,
            DynamicMatrix::Triangular(_) => StorageKind::Triangular,
            DynamicMatrix::Diagonal(_) => StorageKind::Diagonal,
            DynamicMatrix::Identity(_) => StorageKind::Identity,
            DynamicMatrix::Zero(_) => StorageKind::Zero,
        }
    }
}

impl<T: MatrixElement, R: Ring<T>> Matrix<T> for DynamicMatrix<T, R> {
    fn lines(&self) -> usize {
        dispatch!(self, m => m.lines())
    }

    fn columns(&self) -> usize {
        dispatch!(self, m => m.columns())
    }

    fn storage_kind(&self) -> &'static str {
        dispatch!(self, m => m.storage_kind())
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        dispatch!(self, m => m.get(line, column))
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        dispatch!(self, m => m.set(line, column, value))
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        dispatch!(self, m => m.swap_lines(first, second))
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        dispatch!(self, m => m.swap_columns(first, second))
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        dispatch!(self, m => m.multiply_line(line, factor, ring))
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        target_factor: &T,
        source_factor: &T,
        ring: &dyn Ring<T>,
    ) -> Result<()> {
        dispatch!(self, m => m.combine_lines(target, source, target_factor, source_factor, ring))
    }

    fn structure(&self) -> Structure {
        dispatch!(self, m => m.structure())
    }

    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        dispatch!(self, m => m.is_symmetric(comparator))
    }

    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        dispatch!(self, m => m.is_null(monoid))
    }
}

/// Builds [`DynamicMatrix`] values from a [`StorageConfig`]
///
/// `default` is the fill of dense storages and the unstored value of the
/// sparse, triangular and diagonal ones. The ring backs identity and zero
/// storages.
#[derive(Debug, Clone)]
pub struct DynamicFactory<T, R> {
    config: StorageConfig,
    default: T,
    ring: R,
}

impl<T: MatrixElement, R: Ring<T> + Clone> DynamicFactory<T, R> {
    pub fn new(config: StorageConfig, default: T, ring: R) -> Self {
        Self {
            config,
            default,
            ring,
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl<T: MatrixElement, R: Ring<T> + Clone> MatrixFactory<T> for DynamicFactory<T, R> {
    type Output = DynamicMatrix<T, R>;

    fn create_matrix(&self, lines: usize, columns: usize) -> Result<Self::Output> {
        let default = self.default.clone();
        let matrix = match self.config.kind {
            StorageKind::Dense => {
                DynamicMatrix::Dense(DenseFactory::new(default).create_matrix(lines, columns)?)
            }
            StorageKind::Sparse => {
                DynamicMatrix::Sparse(SparseFactory::new(default).create_matrix(lines, columns)?)
            }
            StorageKind::Triangular => DynamicMatrix::Triangular(
                TriangularFactory::new(self.config.triangle, default)
                    .create_matrix(lines, columns)?,
            ),
            StorageKind::Diagonal => DynamicMatrix::Diagonal(
                DiagonalFactory::new(default).create_matrix(lines, columns)?,
            ),
            StorageKind::Identity => DynamicMatrix::Identity(
                IdentityFactory::new(self.ring.clone()).create_matrix(lines, columns)?,
            ),
            StorageKind::Zero => DynamicMatrix::Zero(
                ZeroFactory::new(self.ring.clone()).create_matrix(lines, columns)?,
            ),
        };
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxstore_core::{MatrixError, StandardRing};

    fn factory(config: StorageConfig) -> DynamicFactory<i64, StandardRing<i64>> {
        DynamicFactory::new(config, 0, StandardRing::new())
    }

    #[test]
    fn test_builder_setters() {
        let config = StorageConfig::default()
            .with_kind(StorageKind::Triangular)
            .with_triangle(Triangle::Upper);
        assert_eq!(config.kind, StorageKind::Triangular);
        assert_eq!(config.triangle, Triangle::Upper);
        assert_eq!(StorageConfig::new(StorageKind::Zero).triangle, Triangle::Lower);
    }

    #[test]
    fn test_each_kind_builds_its_storage() {
        let kinds = [
            (StorageKind::Dense, "dense"),
            (StorageKind::Sparse, "sparse"),
            (StorageKind::Triangular, "lower triangular"),
            (StorageKind::Diagonal, "diagonal"),
            (StorageKind::Identity, "identity"),
            (StorageKind::Zero, "zero"),
        ];
        for (kind, name) in kinds {
            let matrix = factory(StorageConfig::new(kind)).create_matrix(3, 3).unwrap();
            assert_eq!(matrix.kind(), kind);
            assert_eq!(matrix.storage_kind(), name);
            assert_eq!(matrix.dimensions(), (3, 3));
        }
    }

    #[test]
    fn test_dispatch_keeps_storage_rules() {
        let mut matrix = factory(StorageConfig::new(StorageKind::Triangular).with_triangle(Triangle::Upper))
            .create_matrix(3, 3)
            .unwrap();
        assert_eq!(matrix.structure(), Structure::Upper);
        matrix.set(0, 2, 5).unwrap();
        assert!(matrix.set(2, 0, 5).unwrap_err().is_structural());
        assert!(matrix.swap_lines(0, 1).unwrap_err().is_structural());

        let identity = factory(StorageConfig::new(StorageKind::Identity)).create_matrix(2, 2).unwrap();
        assert_eq!(identity.get(1, 1), Ok(1));
        assert_eq!(identity.get(0, 1), Ok(0));
    }

    #[test]
    fn test_square_kinds_reject_rectangles() {
        for kind in [StorageKind::Triangular, StorageKind::Diagonal, StorageKind::Identity] {
            assert!(kind.is_square_only());
            let err = factory(StorageConfig::new(kind)).create_matrix(2, 4).unwrap_err();
            assert_eq!(err, MatrixError::NotSquare { lines: 2, columns: 4 });
        }
        let zero = factory(StorageConfig::new(StorageKind::Zero)).create_matrix(2, 4).unwrap();
        assert_eq!(zero.dimensions(), (2, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: StorageConfig =
            serde_json::from_str(r#"{ "kind": "triangular", "triangle": "upper" }"#).unwrap();
        assert_eq!(
            config,
            StorageConfig::new(StorageKind::Triangular).with_triangle(Triangle::Upper)
        );

        let partial: StorageConfig = serde_json::from_str(r#"{ "kind": "sparse" }"#).unwrap();
        assert_eq!(partial.triangle, Triangle::Lower);

        let json = serde_json::to_string(&StorageConfig::default()).unwrap();
        assert_eq!(json, r#"{"kind":"dense","triangle":"lower"}"#);
    }
}
