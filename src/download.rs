//! Image downloader.
//!
//! Streams the generated image from its temporary URL into the output file.
//! A failure part-way through leaves whatever was already written on disk.

use crate::error::Result;
use crate::pipeline::ImageSink;
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ImageSink for HttpDownloader {
    async fn download(&self, url: &str, path: &Path) -> Result<u64> {
        download_image(&self.client, url, path).await
    }
}

/// GET `url` and write the body to `path`, replacing any existing file.
///
/// Returns the number of bytes written. The file is only created once the
/// response headers have arrived, so a failed request leaves no file behind.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn download_image(client: &Client, url: &str, path: &Path) -> Result<u64> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "Image download returned non-success status; writing body anyway");
    }

    let mut file = File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    info!(bytes = written, "Wrote image");
    Ok(written)
}
