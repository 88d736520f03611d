//! Dense row-major storage

use mtx_core::MatrixAccess;

/// Immutable dense matrix stored in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Wrap row-major values
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "dense data length mismatch");
        Self { rows, cols, data }
    }

    /// Reorder column-major values (the MatrixMarket array order)
    ///
    /// Value `k` belongs to `(k % rows, k / rows)`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != rows * cols`.
    pub fn from_column_major(rows: usize, cols: usize, values: &[f64]) -> Self {
        assert_eq!(values.len(), rows * cols, "dense data length mismatch");
        let mut data = vec![0.0; values.len()];
        for (k, &value) in values.iter().enumerate() {
            data[(k % rows) * cols + k / rows] = value;
        }
        Self { rows, cols, data }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Row-major backing slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Values of one row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All values in column-major order
    pub fn iter_column_major(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.cols)
            .flat_map(move |col| (0..self.rows).map(move |row| self.data[row * self.cols + col]))
    }
}

impl MatrixAccess for DenseMatrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }
}
