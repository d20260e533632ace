//! Equality comparators used by symmetry tests

/// Decides whether two entries count as equal
pub trait EqualityComparator<T: ?Sized> {
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// Falls back to `PartialEq`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparator<T> for DefaultEquality {
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

impl<T: ?Sized, F> EqualityComparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Compare with `comparator` when given, `PartialEq` otherwise
pub fn entries_equal<T: PartialEq>(
    comparator: Option<&dyn EqualityComparator<T>>,
    left: &T,
    right: &T,
) -> bool {
    match comparator {
        Some(comparator) => comparator.equals(left, right),
        None => DefaultEquality.equals(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_comparator() {
        let close = |a: &f64, b: &f64| (a - b).abs() < 1e-9;
        let comparator: &dyn EqualityComparator<f64> = &close;
        assert!(entries_equal(Some(comparator), &1.0, &(1.0 + 1e-12)));
        assert!(!entries_equal(None, &1.0, &(1.0 + 1e-12)));
    }
}
