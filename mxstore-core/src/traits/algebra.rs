//! Algebraic collaborators: monoids and rings
//!
//! Storages never assume arithmetic on their coefficients. Anything that
//! needs a zero, a one, a sum or a product receives one of these traits.

use core::marker::PhantomData;
use core::ops::{Add, Mul};

use num_traits::{One, Zero};

/// Additive unity and a test for it
pub trait Monoid<T> {
    /// The additive unity ("zero")
    fn additive_unity(&self) -> T;

    /// Whether `value` is the additive unity
    fn is_additive_unity(&self, value: &T) -> bool;
}

/// Full ring interface used by line scaling, line combination and the operator
pub trait Ring<T>: Monoid<T> {
    /// The multiplicative unity ("one")
    fn multiplicative_unity(&self) -> T;

    fn add(&self, left: &T, right: &T) -> T;

    fn multiply(&self, left: &T, right: &T) -> T;
}

impl<T, M: Monoid<T> + ?Sized> Monoid<T> for &M {
    fn additive_unity(&self) -> T {
        (**self).additive_unity()
    }

    fn is_additive_unity(&self, value: &T) -> bool {
        (**self).is_additive_unity(value)
    }
}

impl<T, R: Ring<T> + ?Sized> Ring<T> for &R {
    fn multiplicative_unity(&self) -> T {
        (**self).multiplicative_unity()
    }

    fn add(&self, left: &T, right: &T) -> T {
        (**self).add(left, right)
    }

    fn multiply(&self, left: &T, right: &T) -> T {
        (**self).multiply(left, right)
    }
}

/// The usual numeric ring of a primitive type
#[derive(Debug)]
pub struct StandardRing<T>(PhantomData<fn() -> T>);

impl<T> StandardRing<T> {
    pub const fn new() -> Self {
        StandardRing(PhantomData)
    }
}

impl<T> Default for StandardRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StandardRing<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StandardRing<T> {}

impl<T> Monoid<T> for StandardRing<T>
where
    T: Zero + Clone,
{
    fn additive_unity(&self) -> T {
        T::zero()
    }

    fn is_additive_unity(&self, value: &T) -> bool {
        value.is_zero()
    }
}

impl<T> Ring<T> for StandardRing<T>
where
    T: Zero + One + Clone + Add<Output = T> + Mul<Output = T>,
{
    fn multiplicative_unity(&self) -> T {
        T::one()
    }

    fn add(&self, left: &T, right: &T) -> T {
        left.clone() + right.clone()
    }

    fn multiply(&self, left: &T, right: &T) -> T {
        left.clone() * right.clone()
    }
}

/// GF(2) over `bool`: addition is xor, multiplication is and
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRing;

impl Monoid<bool> for BooleanRing {
    fn additive_unity(&self) -> bool {
        false
    }

    fn is_additive_unity(&self, value: &bool) -> bool {
        !*value
    }
}

impl Ring<bool> for BooleanRing {
    fn multiplicative_unity(&self) -> bool {
        true
    }

    fn add(&self, left: &bool, right: &bool) -> bool {
        left ^ right
    }

    fn multiply(&self, left: &bool, right: &bool) -> bool {
        *left && *right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ring() {
        let ring = StandardRing::<i64>::new();
        assert_eq!(ring.additive_unity(), 0);
        assert_eq!(ring.multiplicative_unity(), 1);
        assert_eq!(ring.add(&3, &4), 7);
        assert_eq!(ring.multiply(&3, &4), 12);
        assert!(ring.is_additive_unity(&0));
        assert!(!ring.is_additive_unity(&-2));
    }

    #[test]
    fn test_boolean_ring() {
        let ring = BooleanRing;
        assert!(!ring.add(&true, &true));
        assert!(ring.add(&true, &false));
        assert!(!ring.multiply(&true, &false));
        assert!(ring.is_additive_unity(&false));
    }

    #[test]
    fn test_ring_through_reference() {
        let ring = StandardRing::<f64>::new();
        let by_ref: &dyn Ring<f64> = &ring;
        assert_eq!(by_ref.multiply(&2.0, &0.5), 1.0);
        assert_eq!(by_ref.additive_unity(), 0.0);
    }
}
