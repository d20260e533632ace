//! Shared-ownership handle over a storage
//!
//! A view normally borrows its backing (`&mut M`) and so cannot outlive
//! it. When several parties need to reach the same storage, wrap it in a
//! [`Shared`] instead: every clone points at the same storage, and a view
//! built over one clone sees writes made through any other.
//!
//! Access is single-threaded. Each contract call borrows the storage only
//! for its own duration; holding a [`Shared::borrow_mut`] guard while a view
//! reads through another clone panics, exactly like `RefCell`.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use mxstore_core::{
    EqualityComparator, Matrix, MatrixElement, Monoid, Result, Ring, Structure, Vector,
};

/// Cloneable handle to a storage shared between views and callers
#[derive(Debug)]
pub struct Shared<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Shared<S> {
    pub fn new(storage: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(storage)),
        }
    }

    pub fn borrow(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.inner.borrow_mut()
    }

    /// Recover the storage if this is the last handle
    pub fn try_unwrap(self) -> std::result::Result<S, Self> {
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Self { inner })
    }

    /// Number of live handles
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: MatrixElement, M: Matrix<T>> Matrix<T> for Shared<M> {
    fn lines(&self) -> usize {
        self.inner.borrow().lines()
    }

    fn columns(&self) -> usize {
        self.inner.borrow().columns()
    }

    fn storage_kind(&self) -> &'static str {
        self.inner.borrow().storage_kind()
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        self.inner.borrow().get(line, column)
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        self.inner.borrow_mut().set(line, column, value)
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        self.inner.borrow_mut().swap_lines(first, second)
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        self.inner.borrow_mut().swap_columns(first, second)
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        self.inner.borrow_mut().multiply_line(line, factor, ring)
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        target_factor: &T,
        source_factor: &T,
        ring: &dyn Ring<T>,
    ) -> Result<()> {
        self.inner
            .borrow_mut()
            .combine_lines(target, source, target_factor, source_factor, ring)
    }

    fn structure(&self) -> Structure {
        self.inner.borrow().structure()
    }

    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        self.inner.borrow().is_symmetric(comparator)
    }

    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        Matrix::is_null(&*self.inner.borrow(), monoid)
    }
}

impl<T: MatrixElement, V: Vector<T>> Vector<T> for Shared<V> {
    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn storage_kind(&self) -> &'static str {
        self.inner.borrow().storage_kind()
    }

    fn get(&self, index: usize) -> Result<T> {
        self.inner.borrow().get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.borrow_mut().set(index, value)
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        self.inner.borrow_mut().swap(first, second)
    }

    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        self.inner.borrow().is_symmetric(comparator)
    }

    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        Vector::is_null(&*self.inner.borrow(), monoid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MatrixViewExt, VectorViewExt};
    use crate::{DenseMatrix, SparseVector};

    #[test]
    fn test_clones_share_storage() {
        let first = Shared::new(DenseMatrix::new(2, 2, 0).unwrap());
        let mut second = first.clone();
        Matrix::set(&mut second, 1, 0, 5).unwrap();
        assert_eq!(Matrix::get(&first, 1, 0), Ok(5));
        assert_eq!(first.handle_count(), 2);
        drop(second);
        let dense = first.try_unwrap().unwrap();
        assert_eq!(dense.row_major_data(), &[0, 0, 5, 0]);
    }

    #[test]
    fn test_shared_vector() {
        let shared = Shared::new(SparseVector::new(3, 0u8));
        let mut writer = shared.clone();
        Vector::set(&mut writer, 2, 9).unwrap();
        assert_eq!(Vector::get(&shared, 2), Ok(9));
        assert_eq!(shared.borrow().stored_count(), 1);
    }

    #[test]
    fn test_views_over_a_clone_see_later_writes() {
        let shared = Shared::new(DenseMatrix::new(2, 3, 0).unwrap());
        // line 0 of the view is column 2 of the backing
        let view = shared
            .clone()
            .transpose()
            .sub_matrix(vec![2], vec![0, 1])
            .unwrap();
        let second_line = shared.clone().line_vector(1).unwrap();
        assert_eq!(view.entries().collect::<Vec<_>>(), [0, 0]);

        let mut writer = shared.clone();
        Matrix::set(&mut writer, 1, 2, 42).unwrap();
        Matrix::set(&mut writer, 0, 2, 7).unwrap();
        assert_eq!(view.get(0, 1), Ok(42));
        assert_eq!(view.entries().collect::<Vec<_>>(), [7, 42]);
        assert_eq!(second_line.entries().collect::<Vec<_>>(), [0, 0, 42]);
        assert_eq!(shared.handle_count(), 4);
    }

    #[test]
    fn test_subvector_over_a_clone_sees_later_writes() {
        let shared = Shared::new(SparseVector::new(5, 0u8));
        let tail = shared.clone().sub_vector_seq(2..5).unwrap();
        let mut writer = shared.clone();
        Vector::set(&mut writer, 4, 3).unwrap();
        assert_eq!(tail.get(2), Ok(3));
        assert_eq!(tail.entries().collect::<Vec<_>>(), [0, 0, 3]);
    }
}
