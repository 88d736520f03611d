//! Coordinate-list accumulation
//!
//! The builder is owned by a single parse and consumed when the CSR matrix is
//! assembled, so no partially built matrix ever escapes.

use mtx_core::format::constants::SMALLEST_NONZERO;
use mtx_core::MtxError;

use super::csr::CsrMatrix;
use crate::config::DuplicatePolicy;
use crate::error::Result;

/// Mutable coordinate list for one matrix
#[derive(Debug)]
pub struct CooBuilder {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, f64)>,
    policy: DuplicatePolicy,
}

impl CooBuilder {
    /// Create an empty builder for a `rows x cols` matrix
    pub fn new(rows: usize, cols: usize, policy: DuplicatePolicy) -> Self {
        Self::with_capacity(rows, cols, policy, 0)
    }

    pub fn with_capacity(
        rows: usize,
        cols: usize,
        policy: DuplicatePolicy,
        capacity: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::with_capacity(capacity),
            policy,
        }
    }

    /// Record a value at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix; the reader validates
    /// indices before inserting.
    pub fn push(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "entry ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.entries.push((row, col, value));
    }

    /// Number of insertions so far, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the builder and assemble compressed sparse rows
    ///
    /// Repeated positions are merged by the policy. A merged value below the
    /// smallest subnormal in magnitude is not stored; a non-finite one is an
    /// error. A row count whose row pointer cannot be allocated is a
    /// dimension error.
    pub fn into_csr(mut self) -> Result<CsrMatrix> {
        // Stable sort: entries at the same position keep file order
        self.entries.sort_by_key(|&(row, col, _)| (row, col));

        let mut row_ptr = allocate_row_ptr(self.rows)?;
        let mut col_idx: Vec<usize> = Vec::with_capacity(self.entries.len());
        let mut values: Vec<f64> = Vec::with_capacity(self.entries.len());

        let mut entries = self.entries.into_iter().peekable();
        while let Some((row, col, mut value)) = entries.next() {
            while let Some((_, _, next)) = entries.next_if(|&(r, c, _)| (r, c) == (row, col)) {
                value = match self.policy {
                    DuplicatePolicy::Sum => value + next,
                    DuplicatePolicy::Overwrite => next,
                };
            }

            if !value.is_finite() {
                return Err(MtxError::NonFiniteSum {
                    row: row + 1,
                    col: col + 1,
                }
                .into());
            }
            if value.abs() < SMALLEST_NONZERO {
                continue;
            }

            col_idx.push(col);
            values.push(value);
            row_ptr[row + 1] += 1;
        }

        for row in 0..self.rows {
            row_ptr[row + 1] += row_ptr[row];
        }

        Ok(CsrMatrix::from_parts(self.rows, self.cols, row_ptr, col_idx, values))
    }
}

fn allocate_row_ptr(rows: usize) -> Result<Vec<usize>> {
    let too_many = || MtxError::Dimension {
        token: rows.to_string(),
        position: 0,
        reason: "row count too large to allocate",
    };
    let len = rows.checked_add(1).ok_or_else(too_many)?;
    let mut row_ptr = Vec::new();
    row_ptr.try_reserve_exact(len).map_err(|_| too_many())?;
    row_ptr.resize(len, 0);
    Ok(row_ptr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtx_core::MatrixAccess;

    #[test]
    fn test_into_csr_sorts_rows_and_columns() {
        let mut coo = CooBuilder::new(3, 3, DuplicatePolicy::Sum);
        coo.push(2, 0, 5.0);
        coo.push(0, 2, 3.0);
        coo.push(0, 0, 1.0);
        coo.push(1, 1, 4.0);

        let csr = coo.into_csr().unwrap();
        assert_eq!(csr.nnz(), 4);
        let order: Vec<_> = csr.iter().collect();
        assert_eq!(
            order,
            vec![(0, 0, 1.0), (0, 2, 3.0), (1, 1, 4.0), (2, 0, 5.0)]
        );
    }

    #[test]
    fn test_duplicates_sum() {
        let mut coo = CooBuilder::new(2, 2, DuplicatePolicy::Sum);
        coo.push(1, 0, 1.5);
        coo.push(0, 0, 7.0);
        coo.push(1, 0, 2.0);

        let csr = coo.into_csr().unwrap();
        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.at(1, 0), 3.5);
    }

    #[test]
    fn test_duplicates_overwrite_keeps_last() {
        let mut coo = CooBuilder::new(2, 2, DuplicatePolicy::Overwrite);
        coo.push(1, 0, 1.5);
        coo.push(0, 0, 7.0);
        coo.push(1, 0, 2.0);
        coo.push(1, 0, -4.0);

        let csr = coo.into_csr().unwrap();
        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.at(1, 0), -4.0);
    }

    #[test]
    fn test_cancelling_duplicates_are_not_stored() {
        let mut coo = CooBuilder::new(2, 2, DuplicatePolicy::Sum);
        coo.push(0, 1, 1.5);
        coo.push(1, 1, 4.0);
        coo.push(0, 1, -1.5);
        assert_eq!(coo.len(), 3);

        let csr = coo.into_csr().unwrap();
        assert_eq!(csr.nnz(), 1);
        assert_eq!(csr.get_element(0, 1), None);
        assert_eq!(csr.row_ptr(), &[0, 0, 1]);
        assert_eq!(csr.col_indices(), &[1]);
    }

    #[test]
    fn test_overflowing_sum_is_an_error() {
        let mut coo = CooBuilder::new(3, 3, DuplicatePolicy::Sum);
        coo.push(2, 1, f64::MAX);
        coo.push(2, 1, f64::MAX);
        assert_eq!(
            coo.into_csr().unwrap_err().format(),
            Some(&MtxError::NonFiniteSum { row: 3, col: 2 })
        );
    }

    #[test]
    fn test_unallocatable_row_count_is_an_error() {
        let coo = CooBuilder::new(usize::MAX / 8, 1, DuplicatePolicy::Sum);
        assert!(coo.is_empty());
        assert!(matches!(
            coo.into_csr().unwrap_err().format(),
            Some(MtxError::Dimension { position: 0, .. })
        ));
    }

    #[test]
    fn test_empty_rows() {
        let mut coo = CooBuilder::new(4, 2, DuplicatePolicy::Sum);
        coo.push(3, 1, 9.0);
        let csr = coo.into_csr().unwrap();
        assert_eq!(csr.row(0).count(), 0);
        assert_eq!(csr.row(3).collect::<Vec<_>>(), vec![(1, 9.0)]);
    }

    #[test]
    #[should_panic]
    fn test_push_out_of_bounds_panics() {
        let mut coo = CooBuilder::new(2, 2, DuplicatePolicy::Sum);
        coo.push(2, 0, 1.0);
    }
}
