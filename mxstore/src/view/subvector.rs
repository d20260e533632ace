//! Subvector views

use mxstore_core::{check_index, check_indices, IndexSequence, MatrixElement, Result, Vector};

use crate::legality::reject;

const INDEXED: &str = "index-array subvector";
const SEQUENCE: &str = "sequence subvector";

/// Subvector selected by an explicit index array; swaps permute the array
#[derive(Debug, Clone)]
pub struct IndexedSubVector<V> {
    backing: V,
    indices: Vec<usize>,
}

impl<V> IndexedSubVector<V> {
    pub fn new<T>(backing: V, indices: Vec<usize>) -> Result<Self>
    where
        T: MatrixElement,
        V: Vector<T>,
    {
        check_indices(&indices, backing.len())?;
        tracing::trace!(
            len = indices.len(),
            backing = backing.storage_kind(),
            "index-array subvector"
        );
        Ok(Self { backing, indices })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_backing(self) -> V {
        self.backing
    }

    fn translate(&self, index: usize) -> Result<usize> {
        check_index(index, self.indices.len())?;
        Ok(self.indices[index])
    }
}

impl<T: MatrixElement, V: Vector<T>> Vector<T> for IndexedSubVector<V> {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn storage_kind(&self) -> &'static str {
        INDEXED
    }

    fn get(&self, index: usize) -> Result<T> {
        let index = self.translate(index)?;
        self.backing.get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let index = self.translate(index)?;
        self.backing.set(index, value)
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.indices.len())?;
        check_index(second, self.indices.len())?;
        self.indices.swap(first, second);
        Ok(())
    }
}

/// Subvector selected by an ordered index sequence; swaps are illegal
#[derive(Debug, Clone)]
pub struct SequenceSubVector<V> {
    backing: V,
    indices: IndexSequence,
}

impl<V> SequenceSubVector<V> {
    pub fn new<T>(backing: V, indices: impl Into<IndexSequence>) -> Result<Self>
    where
        T: MatrixElement,
        V: Vector<T>,
    {
        let indices = indices.into();
        indices.check_within(backing.len())?;
        tracing::trace!(
            len = indices.len(),
            backing = backing.storage_kind(),
            "sequence subvector"
        );
        Ok(Self { backing, indices })
    }

    pub fn sequence(&self) -> &IndexSequence {
        &self.indices
    }

    pub fn into_backing(self) -> V {
        self.backing
    }
}

impl<T: MatrixElement, V: Vector<T>> Vector<T> for SequenceSubVector<V> {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn storage_kind(&self) -> &'static str {
        SEQUENCE
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.indices.len())?;
        self.backing.get(self.indices.start() + index * self.indices.step())
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.indices.len())?;
        self.backing
            .set(self.indices.start() + index * self.indices.step(), value)
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.indices.len())?;
        check_index(second, self.indices.len())?;
        reject("swap", SEQUENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::VectorViewExt;
    use crate::{DenseVector, SparseVector};

    #[test]
    fn test_indexed_subvector() {
        let mut vector = DenseVector::from(vec![10, 11, 12, 13]);
        let mut view = (&mut vector).sub_vector(vec![3, 1]).unwrap();
        assert_eq!(view.entries().collect::<Vec<_>>(), [13, 11]);
        view.swap(0, 1).unwrap();
        assert_eq!(view.get(0), Ok(11));
        view.set(1, 0).unwrap();
        assert_eq!(vector.as_slice(), &[10, 11, 12, 0]);
    }

    #[test]
    fn test_sequence_subvector() {
        let mut vector = SparseVector::new(10, 0);
        vector.set(6, 1).unwrap();
        let mut view = (&mut vector)
            .sub_vector_seq(IndexSequence::new(0, 3, 4).unwrap())
            .unwrap();
        assert_eq!(view.entries().collect::<Vec<_>>(), [0, 0, 1, 0]);
        assert!(view.swap(0, 1).unwrap_err().is_structural());
        view.set(3, 4).unwrap();
        assert_eq!(vector.get(9), Ok(4));
        assert!(SequenceSubVector::new(&mut vector, 5..11).is_err());
    }
}
