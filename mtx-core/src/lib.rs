#![no_std]

//! MTX Core - MatrixMarket format definitions
//!
//! This crate provides the text grammar of the MatrixMarket exchange format:
//! banner decoding, size and entry line parsing, value rendering, the error
//! taxonomy and the read-only matrix capability trait. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{parse_array_value, parse_size_line, parse_triplet, Triplet};
