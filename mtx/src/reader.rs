//! Staged MatrixMarket reader
//!
//! Parsing runs banner → comments → size line → body over one forward-only
//! cursor. Each stage is public so callers can stop after the header, e.g. to
//! inspect the size of a large file before reading its body.
//!
//! ```
//! use mtx::{parse, MatrixAccess};
//!
//! let text = "%%MatrixMarket matrix coordinate real symmetric\n\
//!             % lower triangle only\n\
//!             3 3 2\n\
//!             1 1 4.0\n\
//!             3 1 -2.5\n";
//! let market = parse(text.as_bytes()).unwrap();
//! assert_eq!(market.dimensions(), (3, 3));
//! assert_eq!(market.at(0, 2), -2.5);
//! assert_eq!(market.nnz(), 3);
//! ```

pub mod line_reader;

use std::io::{BufRead, BufReader, Read};

use mtx_core::format::constants::{SKIPPABLE_BYTES, SMALLEST_NONZERO};
use mtx_core::validation::validate_entry_bounds;
use mtx_core::{
    parse_array_value, parse_size_line, parse_triplet, Banner, ElementType, MatrixDescriptor,
    MtxError, Section, Size, StorageFormat, Symmetry, Unsupported,
};
use tracing::{debug, trace, warn};

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::market::MatrixMarket;
use crate::matrix::{AssembledMatrix, CooBuilder, CsrMatrix, DenseMatrix};
use line_reader::LineReader;

/// Parse a complete MatrixMarket stream with the default configuration
pub fn parse<R: Read>(reader: R) -> Result<MatrixMarket> {
    parse_with_config(reader, ReaderConfig::default())
}

/// Parse a complete MatrixMarket stream
pub fn parse_with_config<R: Read>(reader: R, config: ReaderConfig) -> Result<MatrixMarket> {
    MtxReader::with_config(BufReader::new(reader), config).read_matrix()
}

/// Reader over a buffered MatrixMarket stream
pub struct MtxReader<R> {
    lines: LineReader<R>,
    config: ReaderConfig,
}

impl<R: BufRead> MtxReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            lines: LineReader::new(inner),
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read and decode the banner line
    ///
    /// An empty stream is an empty-header error.
    pub fn read_banner(&mut self) -> Result<Banner> {
        let line = self.lines.read_line()?.unwrap_or_default();
        let banner = Banner::parse(&line)?;
        debug!(
            format = %banner.format,
            element = %banner.element,
            symmetry = %banner.symmetry,
            "parsed banner"
        );
        Ok(banner)
    }

    /// Consume comment and blank lines, returning them verbatim
    ///
    /// A line is skipped when it starts with `%`, a newline, a space or a tab.
    /// End of stream simply ends the scan.
    pub fn read_comments(&mut self) -> Result<String> {
        let mut comment = Vec::new();
        while let Some(byte) = self.lines.peek_byte()? {
            if !SKIPPABLE_BYTES.contains(&byte) {
                break;
            }
            self.lines.read_line_into(&mut comment)?;
        }
        Ok(String::from_utf8_lossy(&comment).into_owned())
    }

    /// Read the size line for the given storage format
    pub fn read_size(&mut self, format: StorageFormat) -> Result<Size> {
        let Some(line) = self.lines.read_line()? else {
            return Err(MtxError::UnexpectedEof {
                section: Section::SizeLine,
                expected: 1,
                found: 0,
            }
            .into());
        };
        let size = parse_size_line(&line, format)?;
        debug!(
            rows = size.rows,
            cols = size.cols,
            declared_lines = size.declared_lines,
            "parsed size line"
        );
        Ok(size)
    }

    /// Read banner, comment block and size line
    pub fn read_descriptor(&mut self) -> Result<MatrixDescriptor> {
        let banner = self.read_banner()?;
        let comment = self.read_comments()?;
        let size = self.read_size(banner.format)?;
        Ok(MatrixDescriptor::new(banner, size, comment))
    }

    /// Read a coordinate body into compressed sparse rows
    ///
    /// Each non-empty line is a `row col value` triplet. Explicit zeros are
    /// dropped and off-diagonal entries of symmetric and skew-symmetric
    /// matrices are mirrored. End of stream ends the body.
    pub fn read_coordinate_body(&mut self, descriptor: &MatrixDescriptor) -> Result<CsrMatrix> {
        ensure_real(descriptor)?;
        let size = descriptor.size;
        let symmetry = descriptor.symmetry();
        if symmetry == Symmetry::Hermitian {
            warn!("hermitian matrix read without mirroring");
        }

        let capacity = self
            .config
            .capacity_for(size.declared_lines, symmetry.mirror(1.0).is_some());
        let mut coo = CooBuilder::with_capacity(
            size.rows,
            size.cols,
            self.config.duplicate_policy,
            capacity,
        );

        let mut entry_lines = 0usize;
        let mut explicit_zeros = 0usize;
        while let Some(raw) = self.lines.read_line()? {
            let line = raw.trim_end();
            if line.trim_start().is_empty() {
                continue;
            }
            let line_no = self.lines.line_no();
            entry_lines += 1;
            if self.config.strict_entry_count && entry_lines > size.declared_lines {
                return Err(MtxError::Triplet {
                    line: line_no,
                    content: line.into(),
                    reason: "more entries than the size line declares",
                }
                .into());
            }

            let entry = parse_triplet(line, line_no)?;
            validate_entry_bounds(&entry, &size, line_no, line)?;

            if entry.value.abs() < SMALLEST_NONZERO {
                trace!(line = line_no, "dropping explicit zero");
                explicit_zeros += 1;
                continue;
            }

            coo.push(entry.row, entry.col, entry.value);

            if entry.row != entry.col {
                if let Some(mirrored) = symmetry.mirror(entry.value) {
                    if entry.col >= size.rows || entry.row >= size.cols {
                        return Err(MtxError::Triplet {
                            line: line_no,
                            content: line.into(),
                            reason: "mirrored entry out of bounds",
                        }
                        .into());
                    }
                    coo.push(entry.col, entry.row, mirrored);
                }
            }
        }

        if entry_lines != size.declared_lines {
            if self.config.strict_entry_count {
                return Err(MtxError::UnexpectedEof {
                    section: Section::CoordinateBody,
                    expected: size.declared_lines,
                    found: entry_lines,
                }
                .into());
            }
            warn!(
                declared = size.declared_lines,
                found = entry_lines,
                "coordinate entry count differs from size line"
            );
        }

        let insertions = coo.len();
        let csr = coo.into_csr()?;
        debug!(
            entry_lines,
            explicit_zeros,
            insertions,
            nnz = csr.values().len(),
            "assembled coordinate body"
        );
        Ok(csr)
    }

    /// Read an array body into a dense matrix
    ///
    /// Exactly `rows * cols` values are read, one per non-empty line, in
    /// column-major order.
    pub fn read_array_body(&mut self, descriptor: &MatrixDescriptor) -> Result<DenseMatrix> {
        ensure_real(descriptor)?;
        if descriptor.symmetry() != Symmetry::General {
            return Err(MtxError::UnsupportedFeature(Unsupported::ArraySymmetry(
                descriptor.symmetry(),
            ))
            .into());
        }

        let size = descriptor.size;
        let expected = size.declared_lines;
        let mut values = Vec::with_capacity(self.config.capacity_for(expected, false));
        while values.len() < expected {
            let Some(raw) = self.lines.read_line()? else {
                return Err(MtxError::UnexpectedEof {
                    section: Section::ArrayBody,
                    expected,
                    found: values.len(),
                }
                .into());
            };
            let line = raw.trim_end();
            if line.trim_start().is_empty() {
                continue;
            }
            values.push(parse_array_value(line, self.lines.line_no())?);
        }

        debug!(values = values.len(), "assembled array body");
        Ok(DenseMatrix::from_column_major(size.rows, size.cols, &values))
    }

    /// Parse the whole stream
    pub fn read_matrix(mut self) -> Result<MatrixMarket> {
        let descriptor = self.read_descriptor()?;
        let matrix = match descriptor.storage_format() {
            StorageFormat::Coordinate => {
                AssembledMatrix::Sparse(self.read_coordinate_body(&descriptor)?)
            }
            StorageFormat::Array => AssembledMatrix::Dense(self.read_array_body(&descriptor)?),
        };
        Ok(MatrixMarket::new(descriptor, matrix))
    }
}

fn ensure_real(descriptor: &MatrixDescriptor) -> Result<()> {
    match descriptor.element_type() {
        ElementType::Real => Ok(()),
        other => Err(MtxError::UnsupportedFeature(Unsupported::ElementType(other)).into()),
    }
}
