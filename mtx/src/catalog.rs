//! Matrix catalog entries and matrix sources
//!
//! The public MatrixMarket collection is addressed by `collection/set/name`
//! triples scraped from its HTML index page. A [`MatrixSource`] turns such a
//! triple into an uncompressed byte stream for the reader.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::market::MatrixMarket;
use crate::reader::parse_with_config;

/// Anchor prefix marking a matrix link on the listing page
pub const LISTING_ANCHOR: &str = r#"<A HREF="/MatrixMarket/data/"#;

/// Extension of the compressed files served by the collection
pub const REMOTE_EXTENSION: &str = "mtx.gz";

/// A matrix of the public collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub collection: String,
    pub set: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(
        collection: impl Into<String>,
        set: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            set: set.into(),
            name: name.into(),
        }
    }

    /// Local file name of the compressed matrix
    pub fn file_name(&self) -> String {
        format!("{}.{REMOTE_EXTENSION}", self.name)
    }

    /// Path of the compressed matrix relative to the server root
    pub fn remote_path(&self) -> String {
        format!(
            "pub/MatrixMarket2/{}/{}/{}.{REMOTE_EXTENSION}",
            self.collection, self.set, self.name
        )
    }

    /// Extract an entry from one line of the listing page
    ///
    /// The line must hold an anchor such as
    /// `<A HREF="/MatrixMarket/data/Harwell-Boeing/smtape/ash608.html">`.
    /// Lines without a well-formed link give `None`.
    pub fn parse_listing_line(line: &str) -> Option<Self> {
        let start = line.find(LISTING_ANCHOR)? + LISTING_ANCHOR.len();
        let rest = &line[start..];
        let target = &rest[..rest.find('"')?];

        let mut parts = target.split('/');
        let (Some(collection), Some(set), Some(page), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        let name = page.split('.').next().unwrap_or(page);
        if collection.is_empty() || set.is_empty() || name.is_empty() {
            return None;
        }

        Some(Self::new(collection, set, name))
    }

    /// Collect every entry of a listing page
    ///
    /// Anchor lines that fail to parse are logged and skipped.
    pub fn parse_listing<R: BufRead>(reader: R) -> Result<Vec<Self>> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.contains(LISTING_ANCHOR) {
                continue;
            }
            match Self::parse_listing_line(&line) {
                Some(entry) => entries.push(entry),
                None => warn!(line = %line, "skipping malformed listing entry"),
            }
        }
        debug!(entries = entries.len(), "parsed matrix listing");
        Ok(entries)
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.collection, self.set, self.name)
    }
}

/// Retrieval collaborator yielding uncompressed MatrixMarket text
///
/// Failures are reported as [`Error::Retrieval`] or [`Error::Io`] and are
/// passed through untouched by the reader.
pub trait MatrixSource {
    /// Open the uncompressed byte stream of `entry`
    fn fetch(&self, entry: &CatalogEntry) -> Result<Box<dyn Read + '_>>;

    /// Fetch and parse `entry`
    fn load(&self, entry: &CatalogEntry, config: ReaderConfig) -> Result<MatrixMarket> {
        parse_with_config(self.fetch(entry)?, config)
    }
}

/// Directory of previously downloaded matrices
///
/// `<name>.mtx.gz` is preferred over a plain `<name>.mtx`.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl MatrixSource for LocalSource {
    fn fetch(&self, entry: &CatalogEntry) -> Result<Box<dyn Read + '_>> {
        let compressed = self.root.join(entry.file_name());
        if compressed.is_file() {
            debug!(path = %compressed.display(), "opening local gzip matrix");
            let file = File::open(compressed)?;
            return Ok(Box::new(GzDecoder::new(BufReader::new(file))));
        }

        let plain = self.root.join(format!("{}.mtx", entry.name));
        if plain.is_file() {
            debug!(path = %plain.display(), "opening local matrix");
            return Ok(Box::new(File::open(plain)?));
        }

        Err(Error::Retrieval(format!(
            "matrix {entry} not found under {}",
            self.root.display()
        )))
    }
}
