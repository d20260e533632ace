//! Ordered integer sequences used as view index sets
//!
//! An [`IndexSequence`] describes `start, start + step, ...` with `count`
//! terms and never allocates. Views built from one hold their own copy, so
//! later changes to the caller's sequence never leak into the view.

use core::ops::Range;

use crate::{MatrixError, Result};

/// Immutable, strictly increasing arithmetic sequence of indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexSequence {
    start: usize,
    step: usize,
    count: usize,
}

impl IndexSequence {
    /// Build `count` terms starting at `start`, `step` apart
    ///
    /// A zero step is only accepted for sequences of at most one term, since
    /// anything longer would not be strictly increasing.
    pub fn new(start: usize, step: usize, count: usize) -> Result<Self> {
        if step == 0 && count > 1 {
            return Err(MatrixError::InvalidSequence {
                reason: "step must be positive",
            });
        }
        if count > 0 {
            (count - 1)
                .checked_mul(step)
                .and_then(|span| span.checked_add(start))
                .ok_or(MatrixError::InvalidSequence {
                    reason: "sequence overflows usize",
                })?;
        }
        Ok(Self {
            start,
            step: step.max(1),
            count,
        })
    }

    /// The contiguous sequence covering `range`
    pub const fn contiguous(range: Range<usize>) -> Self {
        let count = if range.end > range.start {
            range.end - range.start
        } else {
            0
        };
        Self {
            start: range.start,
            step: 1,
            count,
        }
    }

    /// Recognise an arithmetic, strictly increasing index set
    ///
    /// Returns `None` for sets that need an explicit index array.
    pub fn detect(indices: &[usize]) -> Option<Self> {
        match indices {
            [] => Some(Self::contiguous(0..0)),
            [only] => Some(Self {
                start: *only,
                step: 1,
                count: 1,
            }),
            [first, second, ..] => {
                if second <= first {
                    return None;
                }
                let step = second - first;
                let arithmetic = indices
                    .windows(2)
                    .all(|pair| pair[1] > pair[0] && pair[1] - pair[0] == step);
                arithmetic.then_some(Self {
                    start: *first,
                    step,
                    count: indices.len(),
                })
            }
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn step(&self) -> usize {
        self.step
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The `position`-th term
    pub const fn get(&self, position: usize) -> Option<usize> {
        if position < self.count {
            Some(self.start + position * self.step)
        } else {
            None
        }
    }

    /// Largest term, if any
    pub const fn last(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(self.start + (self.count - 1) * self.step)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |position| self.start + position * self.step)
    }

    /// Fails unless every term is below `extent`
    pub fn check_within(&self, extent: usize) -> Result<()> {
        match self.last() {
            Some(last) if last >= extent => Err(MatrixError::IndexOutOfRange {
                index: last,
                extent,
            }),
            _ => Ok(()),
        }
    }
}

impl From<Range<usize>> for IndexSequence {
    fn from(range: Range<usize>) -> Self {
        Self::contiguous(range)
    }
}
