//! Compressed sparse row storage

use mtx_core::MatrixAccess;

use super::coo::CooBuilder;
use crate::config::DuplicatePolicy;
use crate::error::Result;

/// Immutable CSR matrix with sorted, unique column indices in every row
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(row_ptr.len(), rows + 1);
        debug_assert_eq!(col_idx.len(), values.len());
        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Build a matrix from 0-based `(row, col, value)` triplets
    ///
    /// Zero values are not stored, as for a parsed coordinate body.
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside `rows x cols`.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, f64)],
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        let mut coo = CooBuilder::with_capacity(rows, cols, policy, triplets.len());
        for &(row, col, value) in triplets {
            coo.push(row, col, value);
        }
        coo.into_csr()
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Row pointer array, `rows + 1` long
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Stored `(col, value)` pairs of one row in ascending column order
    ///
    /// An out-of-range row yields nothing.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = if row < self.rows {
            self.row_ptr[row]..self.row_ptr[row + 1]
        } else {
            0..0
        };
        self.col_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Every stored entry as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |row| self.row(row).map(move |(col, value)| (row, col, value)))
    }
}

impl MatrixAccess for CsrMatrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_idx[start..end]
            .binary_search(&col)
            .ok()
            .map(|offset| self.values[start + offset])
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
