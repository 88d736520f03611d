//! File input and output for `.mtx` and `.mtx.gz` files
//!
//! Plain files are memory mapped when the `mmap` feature is enabled and read
//! through a buffered reader otherwise. Files ending in `.gz` are streamed
//! through a gzip decoder.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::config::{ReaderConfig, WriterConfig};
use crate::error::Result;
use crate::market::MatrixMarket;
use crate::matrix::AssembledMatrix;
use crate::reader::{parse_with_config, MtxReader};
use crate::writer::encode_with_config;

/// Entry points for MatrixMarket files on disk
pub struct MtxFile;

impl MtxFile {
    /// Read and parse a `.mtx` or `.mtx.gz` file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<MatrixMarket> {
        Self::read_with_config(path, ReaderConfig::default())
    }

    /// Read and parse a file with an explicit reader configuration
    pub fn read_with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<MatrixMarket> {
        let path = path.as_ref();
        let file = File::open(path)?;

        if is_gzip(path) {
            debug!(path = %path.display(), "reading gzip matrix file");
            return parse_with_config(GzDecoder::new(file), config);
        }

        debug!(path = %path.display(), "reading matrix file");
        Self::read_plain(file, config)
    }

    #[cfg(feature = "mmap")]
    fn read_plain(file: File, config: ReaderConfig) -> Result<MatrixMarket> {
        if file.metadata()?.len() == 0 {
            return MtxReader::with_config(&[][..], config).read_matrix();
        }
        // SAFETY: the map is read-only and dropped before this function
        // returns. Concurrent truncation of the file by another process is
        // not guarded against.
        let mmap = unsafe { memmap2::Mmap::map(&file)? };
        MtxReader::with_config(&mmap[..], config).read_matrix()
    }

    #[cfg(not(feature = "mmap"))]
    fn read_plain(file: File, config: ReaderConfig) -> Result<MatrixMarket> {
        MtxReader::with_config(BufReader::new(file), config).read_matrix()
    }

    /// Encode `matrix` to `path`, gzip-compressed when the path ends in `.gz`
    pub fn write<P: AsRef<Path>>(
        path: P,
        matrix: &AssembledMatrix,
        config: &WriterConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;

        if is_gzip(path) {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
            encode_with_config(matrix, &mut encoder, config)?;
            encoder.finish()?.flush()?;
        } else {
            encode_with_config(matrix, file, config)?;
        }

        debug!(path = %path.display(), "wrote matrix file");
        Ok(())
    }

    /// Decompress a gzip container held in memory and parse it
    pub fn parse_gzip(bytes: &[u8], config: ReaderConfig) -> Result<MatrixMarket> {
        parse_with_config(BufReader::new(GzDecoder::new(bytes)), config)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::matrix::{CsrMatrix, DenseMatrix};
    use mtx_core::MatrixAccess;
    use std::path::PathBuf;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("mtx-{tag}-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn path(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn sample() -> AssembledMatrix {
        CsrMatrix::from_triplets(
            3,
            3,
            &[(0, 0, 1.5), (2, 1, -4.0), (1, 2, 1e-9)],
            DuplicatePolicy::Sum,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_plain_file_round_trip() {
        let dir = TempDir::new("plain");
        let path = dir.path("sample.mtx");
        MtxFile::write(&path, &sample(), &WriterConfig::default()).unwrap();

        let market = MtxFile::read(&path).unwrap();
        assert_eq!(market.matrix(), &sample());
        assert_eq!(market.declared_lines(), 3);
    }

    #[test]
    fn test_gzip_file_round_trip() {
        let dir = TempDir::new("gzip");
        let path = dir.path("sample.mtx.gz");
        let config = WriterConfig::default().with_comment("compressed");
        MtxFile::write(&path, &sample(), &config).unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);

        let market = MtxFile::read(&path).unwrap();
        assert_eq!(market.comment(), "%compressed\n");
        assert_eq!(market.at(1, 2), 1e-9);
    }

    #[test]
    fn test_dense_file_round_trip() {
        let dir = TempDir::new("dense");
        let path = dir.path("dense.mtx");
        let dense: AssembledMatrix =
            DenseMatrix::from_row_major(2, 3, vec![1.0, 0.0, 2.0, 3.0, 4.0, 0.5]).into();
        MtxFile::write(&path, &dense, &WriterConfig::default()).unwrap();
        assert_eq!(MtxFile::read(&path).unwrap().matrix(), &dense);
    }

    #[test]
    fn test_empty_file_is_malformed_header() {
        let dir = TempDir::new("empty");
        let path = dir.path("empty.mtx");
        std::fs::write(&path, b"").unwrap();
        assert!(MtxFile::read(&path).unwrap_err().is_format());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new("missing");
        let err = MtxFile::read(dir.path("absent.mtx")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
