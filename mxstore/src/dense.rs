//! Array-backed storage where every cell is physically present

use mxstore_core::{
    check_index, check_position, checked_cell_count, Matrix, MatrixElement, MatrixError, Result,
    Ring, Vector,
};

const DENSE: &str = "dense";

/// Owned matrix with row-major layout
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    // invariant: lines * columns == data.len()
    data: Vec<T>,
    lines: usize,
    columns: usize,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// A `lines x columns` matrix with every cell set to `fill`
    pub fn new(lines: usize, columns: usize, fill: T) -> Result<Self> {
        let cells = checked_cell_count(lines, columns)?;
        Ok(Self {
            data: vec![fill; cells],
            lines,
            columns,
        })
    }

    /// Wrap row-major `data`, which must hold exactly `lines * columns` values
    pub fn from_row_major(lines: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let expected = checked_cell_count(lines, columns)?;
        if data.len() != expected {
            return Err(MatrixError::ValueCount {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            lines,
            columns,
        })
    }

    pub fn row_major_data(&self) -> &[T] {
        &self.data
    }

    /// Contiguous slice of one line
    pub fn line(&self, line: usize) -> Result<&[T]> {
        check_index(line, self.lines)?;
        let start = line * self.columns;
        Ok(&self.data[start..start + self.columns])
    }

    pub fn into_row_major(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, line: usize, column: usize) -> Result<usize> {
        check_position(line, column, self.lines, self.columns)?;
        Ok(line * self.columns + column)
    }
}

impl<T: MatrixElement> Matrix<T> for DenseMatrix<T> {
    fn lines(&self) -> usize {
        self.lines
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn storage_kind(&self) -> &'static str {
        DENSE
    }

    fn get(&self, line: usize, column: usize) -> Result<T> {
        let offset = self.offset(line, column)?;
        Ok(self.data[offset].clone())
    }

    fn set(&mut self, line: usize, column: usize, value: T) -> Result<()> {
        let offset = self.offset(line, column)?;
        self.data[offset] = value;
        Ok(())
    }

    fn swap_lines(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.lines)?;
        check_index(second, self.lines)?;
        if first != second {
            for column in 0..self.columns {
                self.data
                    .swap(first * self.columns + column, second * self.columns + column);
            }
        }
        Ok(())
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.columns)?;
        check_index(second, self.columns)?;
        if first != second {
            for line in 0..self.lines {
                let base = line * self.columns;
                self.data.swap(base + first, base + second);
            }
        }
        Ok(())
    }

    fn multiply_line(&mut self, line: usize, factor: &T, ring: &dyn Ring<T>) -> Result<()> {
        check_index(line, self.lines)?;
        let start = line * self.columns;
        for cell in &mut self.data[start..start + self.columns] {
            *cell = ring.multiply(factor, cell);
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
        check_index(target, self.lines)?;
        check_index(source, self.lines)?;
        for column in 0..self.columns {
            let target_cell = target * self.columns + column;
            let source_cell = source * self.columns + column;
            let scaled_target = ring.multiply(target_factor, &self.data[target_cell]);
            let scaled_source = ring.multiply(source_factor, &self.data[source_cell]);
            self.data[target_cell] = ring.add(&scaled_target, &scaled_source);
        }
        Ok(())
    }
}

/// Owned vector backed by a `Vec`
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: MatrixElement> DenseVector<T> {
    pub fn new(len: usize, fill: T) -> Self {
        Self {
            data: vec![fill; len],
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: MatrixElement> Vector<T> for DenseVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn storage_kind(&self) -> &'static str {
        DENSE
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.data.len())?;
        Ok(self.data[index].clone())
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.data.len())?;
        self.data[index] = value;
        Ok(())
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(first, self.data.len())?;
        check_index(second, self.data.len())?;
        self.data.swap(first, second);
        Ok(())
    }
}
