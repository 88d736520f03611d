//! Assembled matrix storage
//!
//! A parse yields either compressed sparse rows (coordinate bodies) or a
//! dense row-major grid (array bodies), wrapped in [`AssembledMatrix`].

pub mod coo;
pub mod csr;
pub mod dense;

pub use coo::CooBuilder;
pub use csr::CsrMatrix;
pub use dense::DenseMatrix;

use mtx_core::{MatrixAccess, StorageFormat};

/// Terminal result of a parse, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum AssembledMatrix {
    Sparse(CsrMatrix),
    Dense(DenseMatrix),
}

impl AssembledMatrix {
    /// Storage format this matrix is written back with
    pub fn storage_format(&self) -> StorageFormat {
        match self {
            AssembledMatrix::Sparse(_) => StorageFormat::Coordinate,
            AssembledMatrix::Dense(_) => StorageFormat::Array,
        }
    }

    pub fn as_sparse(&self) -> Option<&CsrMatrix> {
        match self {
            AssembledMatrix::Sparse(m) => Some(m),
            AssembledMatrix::Dense(_) => None,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix> {
        match self {
            AssembledMatrix::Dense(m) => Some(m),
            AssembledMatrix::Sparse(_) => None,
        }
    }

    pub fn into_sparse(self) -> Option<CsrMatrix> {
        match self {
            AssembledMatrix::Sparse(m) => Some(m),
            AssembledMatrix::Dense(_) => None,
        }
    }

    pub fn into_dense(self) -> Option<DenseMatrix> {
        match self {
            AssembledMatrix::Dense(m) => Some(m),
            AssembledMatrix::Sparse(_) => None,
        }
    }
}

impl MatrixAccess for AssembledMatrix {
    fn dimensions(&self) -> (usize, usize) {
        match self {
            AssembledMatrix::Sparse(m) => m.dimensions(),
            AssembledMatrix::Dense(m) => m.dimensions(),
        }
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        match self {
            AssembledMatrix::Sparse(m) => m.get_element(row, col),
            AssembledMatrix::Dense(m) => m.get_element(row, col),
        }
    }

    fn nnz(&self) -> usize {
        match self {
            AssembledMatrix::Sparse(m) => m.nnz(),
            AssembledMatrix::Dense(m) => m.nnz(),
        }
    }
}

impl From<CsrMatrix> for AssembledMatrix {
    fn from(matrix: CsrMatrix) -> Self {
        AssembledMatrix::Sparse(matrix)
    }
}

impl From<DenseMatrix> for AssembledMatrix {
    fn from(matrix: DenseMatrix) -> Self {
        AssembledMatrix::Dense(matrix)
    }
}
