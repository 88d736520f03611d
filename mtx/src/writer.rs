//! MatrixMarket encoder
//!
//! Sparse matrices are written as `coordinate real general` with every stored
//! entry listed explicitly; symmetry is never re-derived. Dense matrices are
//! written as `array real general` in column-major order.

use std::io::{BufWriter, Write};

use mtx_core::format::constants::COMMENT_BYTE;
use mtx_core::{Banner, MatrixAccess, Real};
use tracing::debug;

use crate::config::WriterConfig;
use crate::error::Result;
use crate::matrix::{AssembledMatrix, CsrMatrix, DenseMatrix};

/// Encode `matrix` into `sink` with the default configuration
pub fn encode<W: Write>(matrix: &AssembledMatrix, sink: W) -> Result<()> {
    encode_with_config(matrix, sink, &WriterConfig::default())
}

/// Encode `matrix` into `sink`
///
/// Output is buffered and flushed before returning; a failing sink surfaces
/// as [`crate::Error::Io`].
pub fn encode_with_config<W: Write>(
    matrix: &AssembledMatrix,
    sink: W,
    config: &WriterConfig,
) -> Result<()> {
    let mut out = BufWriter::new(sink);
    match matrix {
        AssembledMatrix::Sparse(csr) => write_coordinate(&mut out, csr, config)?,
        AssembledMatrix::Dense(dense) => write_array(&mut out, dense, config)?,
    }
    out.flush()?;
    Ok(())
}

/// Encode `matrix` into a new string
pub fn encode_to_string(matrix: &AssembledMatrix, config: &WriterConfig) -> Result<String> {
    let mut bytes = Vec::new();
    encode_with_config(matrix, &mut bytes, config)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_coordinate<W: Write>(out: &mut W, csr: &CsrMatrix, config: &WriterConfig) -> Result<()> {
    writeln!(out, "{}", Banner::COORDINATE_REAL_GENERAL)?;
    write_comment(out, config)?;
    writeln!(out, "{} {} {}", csr.nrows(), csr.ncols(), csr.nnz())?;

    for (row, col, value) in csr.iter() {
        writeln!(out, "{} {} {}", row + 1, col + 1, Real(value))?;
    }

    debug!(
        rows = csr.nrows(),
        cols = csr.ncols(),
        nnz = csr.nnz(),
        "encoded coordinate matrix"
    );
    Ok(())
}

fn write_array<W: Write>(out: &mut W, dense: &DenseMatrix, config: &WriterConfig) -> Result<()> {
    writeln!(out, "{}", Banner::ARRAY_REAL_GENERAL)?;
    write_comment(out, config)?;
    writeln!(out, "{} {}", dense.nrows(), dense.ncols())?;

    for value in dense.iter_column_major() {
        writeln!(out, "{}", Real(value))?;
    }

    debug!(
        rows = dense.nrows(),
        cols = dense.ncols(),
        "encoded array matrix"
    );
    Ok(())
}

/// One `%` line per line of the configured comment
fn write_comment<W: Write>(out: &mut W, config: &WriterConfig) -> Result<()> {
    let Some(comment) = config.comment.as_deref() else {
        return Ok(());
    };
    for line in comment.lines() {
        let line = line.strip_prefix(COMMENT_BYTE as char).unwrap_or(line);
        writeln!(out, "%{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::reader::parse;
    use std::io;

    fn sparse(rows: usize, cols: usize, entries: &[(usize, usize, f64)]) -> AssembledMatrix {
        CsrMatrix::from_triplets(rows, cols, entries, DuplicatePolicy::Sum)
            .unwrap()
            .into()
    }

    #[test]
    fn test_encode_coordinate() {
        let matrix = sparse(3, 4, &[(2, 3, -1.5), (0, 0, 1.0), (0, 2, 2.25)]);
        let text = encode_to_string(&matrix, &WriterConfig::default()).unwrap();
        assert_eq!(
            text,
            "%%MatrixMarket matrix coordinate real general\n\
             3 4 3\n\
             1 1 1\n\
             1 3 2.25\n\
             3 4 -1.5\n"
        );
    }

    #[test]
    fn test_encode_empty_sparse() {
        let matrix = sparse(2, 2, &[]);
        let text = encode_to_string(&matrix, &WriterConfig::default()).unwrap();
        assert_eq!(text, "%%MatrixMarket matrix coordinate real general\n2 2 0\n");
    }

    #[test]
    fn test_encode_array() {
        let dense = DenseMatrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let text = encode_to_string(&dense.into(), &WriterConfig::default()).unwrap();
        assert_eq!(
            text,
            "%%MatrixMarket matrix array real general\n2 2\n1\n3\n2\n4\n"
        );
    }

    #[test]
    fn test_encode_comment() {
        let matrix = sparse(1, 1, &[(0, 0, 5.0)]);
        let config = WriterConfig::default().with_comment("written by mtx\n%already prefixed");
        let text = encode_to_string(&matrix, &config).unwrap();
        assert_eq!(
            text,
            "%%MatrixMarket matrix coordinate real general\n\
             %written by mtx\n\
             %already prefixed\n\
             1 1 1\n\
             1 1 5\n"
        );
    }

    #[test]
    fn test_extreme_values_round_trip() {
        let values = [1e300, -2.5e-300, 1.0 / 3.0, 123456789.123, 5e-324];
        let entries: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i, i, v))
            .collect();
        let matrix = sparse(values.len(), values.len(), &entries);

        let text = encode_to_string(&matrix, &WriterConfig::default()).unwrap();
        assert!(text.contains("1e300"));
        let decoded = parse(text.as_bytes()).unwrap();
        assert_eq!(decoded.matrix(), &matrix);
    }

    #[test]
    fn test_symmetric_input_encodes_as_general() {
        let text = "%%MatrixMarket matrix coordinate real symmetric\n2 2 1\n2 1 7.0\n";
        let market = parse(text.as_bytes()).unwrap();
        let encoded = encode_to_string(market.matrix(), &WriterConfig::default()).unwrap();
        assert_eq!(
            encoded,
            "%%MatrixMarket matrix coordinate real general\n2 2 2\n1 2 7\n2 1 7\n"
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_sink_failure_is_io_error() {
        let matrix = sparse(1, 1, &[(0, 0, 1.0)]);
        let err = encode(&matrix, FailingSink).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
