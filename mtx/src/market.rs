//! Parsed matrix record

use mtx_core::{MatrixAccess, MatrixDescriptor};

use crate::matrix::AssembledMatrix;

/// A fully parsed MatrixMarket file: descriptor plus assembled matrix
///
/// `declared_lines()` counts the entry lines announced by the size line, while
/// `nnz()` counts what was stored after symmetry expansion, zero suppression
/// and duplicate merging. The two only coincide for general matrices without
/// duplicates or explicit zeros, and for array bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixMarket {
    descriptor: MatrixDescriptor,
    matrix: AssembledMatrix,
}

impl MatrixMarket {
    pub(crate) fn new(descriptor: MatrixDescriptor, matrix: AssembledMatrix) -> Self {
        Self { descriptor, matrix }
    }

    pub fn descriptor(&self) -> &MatrixDescriptor {
        &self.descriptor
    }

    /// Comment block following the banner, verbatim
    pub fn comment(&self) -> &str {
        &self.descriptor.comment
    }

    pub fn declared_lines(&self) -> usize {
        self.descriptor.declared_lines()
    }

    pub fn matrix(&self) -> &AssembledMatrix {
        &self.matrix
    }

    /// Hand the matrix to the caller, dropping the descriptor
    pub fn into_matrix(self) -> AssembledMatrix {
        self.matrix
    }

    pub fn into_parts(self) -> (MatrixDescriptor, AssembledMatrix) {
        (self.descriptor, self.matrix)
    }

    /// Descriptor and stored entry count as a JSON object
    #[cfg(feature = "serde")]
    pub fn summary_json(&self) -> serde_json::Result<String> {
        #[derive(serde::Serialize)]
        struct Summary<'a> {
            descriptor: &'a MatrixDescriptor,
            nnz: usize,
        }

        serde_json::to_string_pretty(&Summary {
            descriptor: &self.descriptor,
            nnz: self.matrix.nnz(),
        })
    }
}

impl MatrixAccess for MatrixMarket {
    fn dimensions(&self) -> (usize, usize) {
        self.matrix.dimensions()
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.matrix.get_element(row, col)
    }

    fn nnz(&self) -> usize {
        self.matrix.nnz()
    }
}

impl std::fmt::Display for MatrixMarket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        let banner = &self.descriptor.banner;
        write!(
            f,
            "Matrix {rows}x{cols}: format: `{}`, type: `{}`, symmetry: `{}`, nnz: {}",
            banner.format,
            banner.element,
            banner.symmetry,
            self.nnz()
        )
    }
}
