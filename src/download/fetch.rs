//! HTTP fetching.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("face2face-utils/", env!("CARGO_PKG_VERSION"));

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Something that can copy a remote resource into a local file.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Write the body of `url` to `dest`, returning the number of bytes written.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Fetcher backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
    show_progress: bool,
}

impl HttpFetcher {
    /// Create a fetcher sending `user_agent` with every request.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            show_progress: false,
        })
    }

    /// Show a progress bar for large transfers.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// GET `url`, failing on any non-success status.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.get(url).await?;

        let content_length = response.content_length();
        let progress = if self.show_progress
            && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
        {
            Some(create_download_bar(content_length.unwrap_or(0)))
        } else {
            None
        };

        // Stream to file
        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(downloaded)
    }
}
