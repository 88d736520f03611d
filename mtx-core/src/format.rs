//! MatrixMarket format definitions
//!
//! This module contains pure definitions of the text grammar: banner tokens,
//! the decoded descriptor, and value rendering. No I/O operations.

pub mod constants;
pub mod descriptor;
pub mod header;
pub mod number;

pub use descriptor::{MatrixDescriptor, Size};
pub use header::{Banner, ElementType, StorageFormat, Symmetry};
pub use number::{format_real, write_real, Real};
