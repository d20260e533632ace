//! The vector access contract

extern crate alloc;
use alloc::boxed::Box;

use super::algebra::Monoid;
use super::compare::{entries_equal, EqualityComparator};
use super::element::MatrixElement;
use crate::iter::VectorEntries;
use crate::Result;

/// Uniform entry-access contract for one-dimensional storages
pub trait Vector<T: MatrixElement> {
    /// Number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the storage, used in structural errors
    fn storage_kind(&self) -> &'static str;

    fn get(&self, index: usize) -> Result<T>;

    fn set(&mut self, index: usize, value: T) -> Result<()>;

    /// Exchange two entries
    fn swap(&mut self, first: usize, second: usize) -> Result<()>;

    /// Whether the vector reads the same front to back and back to front
    fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
        let len = self.len();
        for index in 0..len / 2 {
            let front = self.get(index)?;
            let back = self.get(len - 1 - index)?;
            if !entries_equal(comparator, &front, &back) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every entry is the additive unity of `monoid`
    fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
        for index in 0..self.len() {
            if !monoid.is_additive_unity(&self.get(index)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lazy, restartable traversal in index order
    fn entries(&self) -> VectorEntries<'_, T, Self>
    where
        Self: Sized,
    {
        VectorEntries::new(self)
    }
}

macro_rules! forward_vector {
    () => {
        fn len(&self) -> usize {
            (**self).len()
        }

        fn storage_kind(&self) -> &'static str {
            (**self).storage_kind()
        }

        fn get(&self, index: usize) -> Result<T> {
            (**self).get(index)
        }

        fn set(&mut self, index: usize, value: T) -> Result<()> {
            (**self).set(index, value)
        }

        fn swap(&mut self, first: usize, second: usize) -> Result<()> {
            (**self).swap(first, second)
        }

        fn is_symmetric(&self, comparator: Option<&dyn EqualityComparator<T>>) -> Result<bool> {
            (**self).is_symmetric(comparator)
        }

        fn is_null(&self, monoid: &dyn Monoid<T>) -> Result<bool> {
            (**self).is_null(monoid)
        }
    };
}

impl<T: MatrixElement, V: Vector<T> + ?Sized> Vector<T> for &mut V {
    forward_vector!();
}

impl<T: MatrixElement, V: Vector<T> + ?Sized> Vector<T> for Box<V> {
    forward_vector!();
}
