//! Sparse storage: only entries that differ from a default are kept
//!
//! Each line is a hash map keyed by column (by index for vectors). Writing
//! the default removes the stored entry, so the maps never hold a value the
//! storage would report anyway. Extents are tracked separately from the
//! number of stored entries.

use hashbrown::HashMap;
use mxstore_core::{check_index, check_position, Matrix, MatrixElement, Result, Ring, Vector};

const SPARSE: &str = "sparse";

/// One line of a sparse matrix, or the body of a sparse vector
///
/// The default lives in the owning storage and is passed in on every call
/// that needs it, so lines never hold a reference back to their owner.
#[derive(Debug, Clone, PartialEq)]
struct SparseLine<T> {
    entries: HashMap<usize, T>,
    // invariant: the largest key of `entries`, if any
    last_used: Option<usize>,
}

impl<T: MatrixElement> SparseLine<T> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            last_used: None,
        }
    }

    fn get(&self, index: usize, default: &T) -> T {
        self.entries
            .get(&index)
            .cloned()
            .unwrap_or_else(|| default.clone())
    }

    fn put(&mut self, index: usize, value: T, default: &T) {
        if value == *default {
            if self.entries.remove(&index).is_some() && self.last_used == Some(index) {
                self.recompute_last_used();
            }
        } else {
            self.entries.insert(index, value);
            self.last_used = Some(self.last_used.map_or(index, |last| last.max(index)));
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    fn swap(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        let at_first = self.entries.remove(&first);
        let at_second = self.entries.remove(&second);
        if let Some(value) = at_first {
            self.entries.insert(second, value);
        }
        if let Some(value) = at_second {
            self.entries.insert(first, value);
        }
        self.recompute_last_used();
    }

    /// Stored indices in ascending order
    fn stored_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn recompute_last_used(&mut self) {
        self.last_used = self.entries.keys().copied().max();
    }
}

/// Vector that stores only entries different from `default`
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T> {
    len: usize,
    default: T,
    body: SparseLine<T>,
}

impl<T: MatrixElement> SparseVector<T> {
    pub fn new(len: usize, default: T) -> Self {
        Self {
            len,
            default,
            body: SparseLine::new(),
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of physically stored entries
    pub fn stored_count(&self) -> usize {
        self.body.len()
    }

    /// Whether `index` has a stored (non-default) entry
    pub fn is_stored(&self, index: usize) -> bool {
        self.body.contains(index)
    }

    /// Largest index holding a stored entry
    pub fn last_used_index(&self) -> Option<usize> {
        self.body.last_used
    }

    /// Stored `(index, value)` pairs in ascending index order
    pub fn stored(&self) -> Vec<(usize, T)> {
        self.body
            .stored_indices()
            .into_iter()
            .map(|index| (index, self.body.get(index, &self.default)))
            .collect()
    }
}

impl<T: MatrixElement> Vector<T> for SparseVector<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn storage_kind(&self) -> &'static str {
        SPARSE
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        Ok(self.body.get(index, &self.default))
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        self.body.put(index, value, &self.default);
        Ok(())
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.len)?;
        check_index(second, self.len)?;
        self.body.swap(first, second);
        Ok(())
    }
}

/// Matrix that stores only entries different from `default`
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    columns: usize,
    default: T,
    rows: Vec<SparseLine<T>>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    pub fn new(lines: usize, columns: usize, default: T) -> Self {
        Self {
            columns,
            default,
            rows: (0..lines).map(|_| SparseLine::new()).collect(),
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of physically stored entries
    pub fn stored_count(&self) -> usize {
        self.rows.iter().map(SparseLine::len).sum()
    }

    /// Whether `(line, column)` has a stored (non-default) entry
    pub fn is_stored(&self, line: usize, column: usize) -> bool {
        self.rows
            .get(line)
            .is_some_and(|row| row.contains(column))
    }

    /// Largest column of `line` holding a stored entry
    pub fn last_used_column(&self, line: usize) -> Result<Option<usize>> {
        check_index(line, self.rows.len())?;
        Ok(self.rows[line].last_used)
    }

    /// Stored `(column, value)` pairs of `line` in ascending column order
    pub fn stored_in_line(&self, line: usize) -> Result<Vec<(usize, T)>> {
        check_index(line, self.rows.len())?;
        let row = &self.rows[line];
        Ok(row
            .stored_indices()
            .into_iter()
            .map(|column| (column, row.get(column, &self.default)))
            .collect())
    }

    /// Columns worth visiting when a line update maps the default to `image`
    fn columns_to_visit(&self, lines: &[usize], image: &T) -> Vec<usize> {
        if *image != self.default {
            return (0..self.columns).collect();
        }
        let mut columns: Vec<usize> = lines
            .iter()
            .flat_map(|&line| self.rows[line].stored_indices())
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}

impl<T: MatrixElement> Matrix<T> for SparseMatrix<T> {
    fn lines(&self) -> usize {
        self.rows.len()
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn storage_kind(&self) -> &'static str {
        SPARSE
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        check_position(line, column, self.rows.len(), self.columns)?;
        Ok(self.rows[line].get(column, &self.default))
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        check_position(line, column, self.rows.len(), self.columns)?;
        self.rows[line].put(column, value, &self.default);
        Ok(())
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.rows.len())?;
        check_index(second, self.rows.len())?;
        self.rows.swap(first, second);
        Ok(())
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.columns)?;
        check_index(second, self.columns)?;
        for row in &mut self.rows {
            row.swap(first, second);
        }
        Ok(())
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.rows.len())?;
        let image = ring.multiply(factor, &self.default);
        for column in self.columns_to_visit(&[line], &image) {
            let scaled = ring.multiply(factor, &self.rows[line].get(column, &self.default));
            self.rows[line].put(column, scaled, &self.default);
        }
        Ok(())
    }

    fn combine_lines(
        &mut self,
        target: usize,
        source: usize,
        target_factor: &T,
        source_factor: &T,
        ring: &dyn Ring<T>,
    ) -> Result<()> {
        check_index(target, self.rows.len())?;
        check_index(source, self.rows.len())?;
        let combine = |t: &T, s: &T| {
            ring.add(
                &ring.multiply(target_factor, t),
                &ring.multiply(source_factor, s),
            )
        };
        let image = combine(&self.default, &self.default);
        let updates: Vec<(usize, T)> = self
            .columns_to_visit(&[target, source], &image)
            .into_iter()
            .map(|column| {
                let t = self.rows[target].get(column, &self.default);
                let s = self.rows[source].get(column, &self.default);
                (column, combine(&t, &s))
            })
            .collect();
        for (column, value) in updates {
            self.rows[target].put(column, value, &self.default);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxstore_core::{MatrixError, StandardRing};

    #[test]
    fn test_default_write_compacts() {
        let mut vector = SparseVector::new(10, 0);
        vector.set(4, 3).unwrap();
        assert!(vector.is_stored(4));
        vector.set(4, 0).unwrap();
        assert!(!vector.is_stored(4));
        assert_eq!(vector.stored_count(), 0);
        assert_eq!(vector.len(), 10);
        assert_eq!(vector.get(4), Ok(0));
    }

    #[test]
    fn test_last_used_index_follows_removals() {
        let mut vector = SparseVector::new(10, -1);
        vector.set(2, 5).unwrap();
        vector.set(7, 5).unwrap();
        assert_eq!(vector.last_used_index(), Some(7));
        vector.set(7, -1).unwrap();
        assert_eq!(vector.last_used_index(), Some(2));
        vector.swap(2, 9).unwrap();
        assert_eq!(vector.last_used_index(), Some(9));
        assert_eq!(vector.stored(), vec![(9, 5)]);
        assert!(matches!(
            vector.set(10, 1),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_matrix_reads_default_for_missing_keys() {
        let mut matrix = SparseMatrix::new(3, 4, 0.5);
        matrix.set(1, 3, 2.0).unwrap();
        assert_eq!(matrix.get(1, 3), Ok(2.0));
        assert_eq!(matrix.get(0, 0), Ok(0.5));
        assert_eq!(matrix.stored_count(), 1);
        assert_eq!(matrix.entries().count(), 12);
    }

    #[test]
    fn test_swaps_move_entries() {
        let mut matrix = SparseMatrix::new(2, 3, 0);
        matrix.set(0, 0, 1).unwrap();
        matrix.set(1, 2, 2).unwrap();
        matrix.swap_lines(0, 1).unwrap();
        assert_eq!(matrix.get(0, 2), Ok(2));
        matrix.swap_columns(0, 2).unwrap();
        assert_eq!(matrix.get(0, 0), Ok(2));
        assert_eq!(matrix.get(1, 2), Ok(1));
        assert_eq!(matrix.last_used_column(1), Ok(Some(2)));
        assert_eq!(matrix.stored_count(), 2);
    }

    #[test]
    fn test_line_arithmetic_with_zero_default() {
        let ring = StandardRing::<i32>::new();
        let mut matrix = SparseMatrix::new(2, 4, 0);
        matrix.set(0, 1, 3).unwrap();
        matrix.set(1, 1, 3).unwrap();
        matrix.set(1, 3, 1).unwrap();
        matrix.multiply_line(0, &2, &ring).unwrap();
        assert_eq!(matrix.stored_in_line(0), Ok(vec![(1, 6)]));

        // line_1 <- 2 * line_1 - line_0 cancels column 1
        matrix.combine_lines(1, 0, &2, &-1, &ring).unwrap();
        assert_eq!(matrix.stored_in_line(1), Ok(vec![(3, 2)]));
        assert!(!matrix.is_stored(1, 1));
    }

    #[test]
    fn test_line_arithmetic_with_nonzero_default() {
        let ring = StandardRing::<i32>::new();
        let mut matrix = SparseMatrix::new(1, 3, 1);
        matrix.multiply_line(0, &3, &ring).unwrap();
        assert_eq!(matrix.entries().collect::<Vec<_>>(), [3, 3, 3]);
        assert_eq!(matrix.stored_count(), 3);
    }
}
