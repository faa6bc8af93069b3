//! Fetch-if-absent file downloads.

use std::path::{Path, PathBuf};

use crate::config::OptionsConfig;
use crate::download::fetch::{Fetcher, HttpFetcher};
use crate::error::Result;
use crate::fs::{ensure_parent_dir, partial_path};

/// Downloads files into a local cache, skipping those already present.
#[derive(Debug, Clone)]
pub struct Downloader<F = HttpFetcher> {
    fetcher: F,
}

impl Downloader<HttpFetcher> {
    /// Create a downloader backed by HTTP using the configured options.
    pub fn from_options(options: &OptionsConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options.user_agent)?.with_progress(options.show_progress);
        Ok(Self::new(fetcher))
    }
}

impl<F: Fetcher> Downloader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Make sure `save_path` exists locally, downloading `url` if it does not.
    ///
    /// Parent directories are created as needed. An existing file is never
    /// fetched again or compared with the remote. The transfer goes to a
    /// temporary sibling that is renamed into place once complete, so an
    /// interrupted download never leaves a partial file at `save_path`.
    pub async fn download_file(&self, url: &str, save_path: impl AsRef<Path>) -> Result<PathBuf> {
        let save_path = save_path.as_ref();

        ensure_parent_dir(save_path).await?;

        if is_file(save_path).await {
            tracing::debug!("Already downloaded: {}", save_path.display());
            return Ok(save_path.to_path_buf());
        }

        tracing::info!("Downloading {}", url);

        let part_path = partial_path(save_path);
        let written = match self.fetcher.fetch(url, &part_path).await {
            Ok(written) => written,
            Err(e) => {
                discard(&part_path).await;
                return Err(e);
            }
        };

        if let Err(e) = tokio::fs::rename(&part_path, save_path).await {
            discard(&part_path).await;
            return Err(e.into());
        }

        tracing::info!("Downloaded {} ({} bytes)", url, written);

        Ok(save_path.to_path_buf())
    }
}

/// Download `url` to `save_path` with default options unless it is already there.
pub async fn download_file(url: &str, save_path: impl AsRef<Path>) -> Result<PathBuf> {
    Downloader::from_options(&OptionsConfig::default())?
        .download_file(url, save_path)
        .await
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove partial download {}: {}", path.display(), e);
        }
    }
}
