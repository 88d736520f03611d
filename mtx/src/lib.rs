//! MTX - MatrixMarket reader and writer
//!
//! This library decodes MatrixMarket exchange files into compressed sparse
//! row or dense matrices and encodes matrices back into the format.
//!
//! ## Architecture
//!
//! MTX follows a grammar/implementation separation:
//!
//! - **mtx-core**: Banner, size line and entry line grammar, value rendering,
//!   the error taxonomy and the matrix access trait (no I/O)
//! - **mtx**: Staged stream reader, matrix assembly, writer, file input and
//!   retrieval of the public collection
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mtx::{MatrixAccess, MtxFile, WriterConfig};
//!
//! fn example() -> mtx::Result<()> {
//!     // Load a (possibly gzip compressed) matrix
//!     let market = MtxFile::read("ash608.mtx.gz")?;
//!     println!("{market}");
//!
//!     // Access elements, absent entries read as zero
//!     let (rows, cols) = market.dimensions();
//!     println!("matrix[0, 0] = {} of {rows}x{cols}", market.at(0, 0));
//!
//!     // Write it back as a general coordinate file
//!     MtxFile::write("copy.mtx", market.matrix(), &WriterConfig::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: Memory-mapped reading of plain `.mtx` files
//! - **serde**: Serializable descriptors and JSON summaries
//! - **http**: Async download of matrices from the public collection

// Re-export the grammar and core abstractions
pub use mtx_core::{
    // Core trait
    MatrixAccess,
    // Format definitions
    Banner, ElementType, MatrixDescriptor, Size, StorageFormat, Symmetry,
    // Error handling
    MtxError, Section, Unsupported,
    // Value rendering
    format_real, Real,
};

// Implementation modules
pub mod catalog;
pub mod config;
pub mod error;
pub mod file_io;
pub mod http_source;
pub mod market;
pub mod matrix;
pub mod reader;
pub mod writer;

// Public exports
pub use catalog::{CatalogEntry, LocalSource, MatrixSource};
pub use config::{DuplicatePolicy, ReaderConfig, WriterConfig};
pub use error::{Error, Result};
pub use file_io::MtxFile;
pub use market::MatrixMarket;
pub use matrix::{AssembledMatrix, CooBuilder, CsrMatrix, DenseMatrix};
pub use reader::{parse, parse_with_config, MtxReader};
pub use writer::{encode, encode_to_string, encode_with_config};

// HTTP retrieval
#[cfg(feature = "http")]
pub use http_source::http_impl::HttpSource;
