//! Structural metadata of one parsed matrix

use alloc::string::String;

use super::header::{Banner, ElementType, StorageFormat, Symmetry};

/// Decoded size line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
    /// Entry lines to read: the third size-line field for coordinate bodies,
    /// `rows * cols` for array bodies
    pub declared_lines: usize,
}

/// Banner, comment block and size of a matrix
///
/// `rows` and `cols` are always positive; they are fixed once the size line
/// has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDescriptor {
    pub banner: Banner,
    pub size: Size,
    /// Raw comment and blank lines following the banner, newlines included
    pub comment: String,
}

impl MatrixDescriptor {
    pub fn new(banner: Banner, size: Size, comment: String) -> Self {
        Self {
            banner,
            size,
            comment,
        }
    }

    pub fn storage_format(&self) -> StorageFormat {
        self.banner.format
    }

    pub fn element_type(&self) -> ElementType {
        self.banner.element
    }

    pub fn symmetry(&self) -> Symmetry {
        self.banner.symmetry
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.size.rows, self.size.cols)
    }

    pub fn declared_lines(&self) -> usize {
        self.size.declared_lines
    }
}
