//! Core matrix capability trait
//!
//! Sparse and dense results expose the same read-only capability set so that
//! callers can inspect a parsed matrix without knowing its storage.

/// Read-only access to an assembled real matrix
pub trait MatrixAccess {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the stored value at `(row, col)`
    ///
    /// Returns `None` if the position is out of bounds or, for sparse
    /// storage, if nothing is stored there.
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Get number of stored elements
    ///
    /// Dense storage stores every element, so this is `rows * cols`.
    fn nnz(&self) -> usize;

    /// Value at `(row, col)`, zero where nothing is stored
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    fn at(&self, row: usize, col: usize) -> f64 {
        let (rows, cols) = self.dimensions();
        assert!(
            row < rows && col < cols,
            "index ({row}, {col}) out of bounds for {rows}x{cols} matrix"
        );
        self.get_element(row, col).unwrap_or(0.0)
    }
}
