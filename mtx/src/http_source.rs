//! HTTP retrieval of the public MatrixMarket collection
//!
//! Only available when the "http" feature is enabled. The listing page is
//! scraped for [`CatalogEntry`] values and matrices are downloaded as gzip
//! containers, then decompressed in memory.

#[cfg(feature = "http")]
pub mod http_impl {
    use reqwest::Client;
    use tracing::debug;

    use crate::catalog::CatalogEntry;
    use crate::config::ReaderConfig;
    use crate::error::{Error, Result};
    use crate::file_io::MtxFile;
    use crate::market::MatrixMarket;

    /// Index page listing every matrix of the collection
    pub const LISTING_URL: &str = "http://math.nist.gov/MatrixMarket/matrices.html";

    /// Server hosting the compressed matrix files
    pub const FILE_SERVER: &str = "https://math.nist.gov";

    /// Async client for the remote collection
    pub struct HttpSource {
        client: Client,
        listing_url: String,
        file_server: String,
    }

    impl HttpSource {
        pub fn new() -> Self {
            Self::with_endpoints(LISTING_URL, FILE_SERVER)
        }

        /// Client against a mirror of the collection
        pub fn with_endpoints(listing_url: &str, file_server: &str) -> Self {
            Self {
                client: Client::new(),
                listing_url: listing_url.to_string(),
                file_server: file_server.trim_end_matches('/').to_string(),
            }
        }

        /// URL of the compressed file of `entry`
        pub fn matrix_url(&self, entry: &CatalogEntry) -> String {
            format!("{}/{}", self.file_server, entry.remote_path())
        }

        async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|err| Error::Retrieval(format!("request to {url} failed: {err}")))?;

            if !response.status().is_success() {
                return Err(Error::Retrieval(format!(
                    "request to {url} returned {}",
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|err| Error::Retrieval(format!("reading {url} failed: {err}")))?;
            debug!(url, bytes = bytes.len(), "downloaded");
            Ok(bytes.to_vec())
        }

        /// Fetch and scrape the listing page
        pub async fn listing(&self) -> Result<Vec<CatalogEntry>> {
            let page = self.get_bytes(&self.listing_url).await?;
            CatalogEntry::parse_listing(page.as_slice())
        }

        /// Download the gzip container of `entry` without decompressing it
        pub async fn fetch_compressed(&self, entry: &CatalogEntry) -> Result<Vec<u8>> {
            self.get_bytes(&self.matrix_url(entry)).await
        }

        /// Download and save `entry` as `<dir>/<name>.mtx.gz`
        pub async fn download(
            &self,
            entry: &CatalogEntry,
            dir: &std::path::Path,
        ) -> Result<std::path::PathBuf> {
            let bytes = self.fetch_compressed(entry).await?;
            let path = dir.join(entry.file_name());
            tokio::fs::write(&path, bytes).await?;
            Ok(path)
        }

        /// Download, decompress and parse `entry`
        pub async fn load(&self, entry: &CatalogEntry, config: ReaderConfig) -> Result<MatrixMarket> {
            let bytes = self.fetch_compressed(entry).await?;
            MtxFile::parse_gzip(&bytes, config)
        }
    }

    impl Default for HttpSource {
        fn default() -> Self {
            Self::new()
        }
    }

}
