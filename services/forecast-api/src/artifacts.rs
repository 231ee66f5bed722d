//! Startup fetch of the classifier artifact.
//!
//! The model is downloaded once, before the server starts accepting
//! traffic. Retries with exponential backoff; a download that still fails
//! after the last attempt aborts startup.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::config::ArtifactConfig;

const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Ensure the classifier artifact exists locally, downloading it when a
/// URL is configured.
///
/// The label decoder artifact is expected to be pre-placed next to the
/// service and is never fetched.
pub async fn ensure_model(config: &ArtifactConfig) -> Result<()> {
    if config.model_path.exists() {
        debug!(path = %config.model_path.display(), "Model artifact already present");
        return Ok(());
    }

    let Some(url) = config.model_url.as_deref() else {
        anyhow::bail!(
            "Model artifact {} is missing and no model URL is configured",
            config.model_path.display()
        );
    };

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(Duration::from_secs(30))
        .build()
        .context("Failed to create HTTP client")?;

    let mut delay = INITIAL_RETRY_DELAY;
    for attempt in 1..=MAX_RETRIES {
        match fetch_artifact(&client, url, &config.model_path).await {
            Ok(()) => {
                info!(path = %config.model_path.display(), "Downloaded model artifact");
                return Ok(());
            }
            Err(e) if attempt < MAX_RETRIES => {
                warn!(error = %e, attempt, "Model download failed, retrying");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(e.context(format!("Failed to download model from {}", url)));
            }
        }
    }

    unreachable!("retry loop returns on success or final failure")
}

/// Stream one artifact to a `.partial` file, then rename into place so a
/// torn download never masquerades as a complete artifact.
async fn fetch_artifact(client: &Client, url: &str, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let temp_path = dest.with_extension("partial");

    let response = client
        .get(url)
        .send()
        .await
        .context("Request failed")?
        .error_for_status()
        .context("Server returned an error status")?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)
        .await
        .context("Failed to create temp file")?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed reading response body")?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    drop(file);

    fs::rename(&temp_path, dest).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_present_artifact_is_not_fetched() {
        let dir = tempfile::TempDir::new().unwrap();
        let model_path = dir.path().join("weather_model.json");
        std::fs::write(&model_path, "{}").unwrap();

        // No URL configured; succeeds because the file is already there.
        let config = ArtifactConfig::new(
            model_path,
            dir.path().join("label_encoder.json"),
            None,
        );
        assert!(ensure_model(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_artifact_without_url_is_fatal() {
        let config = ArtifactConfig::new(
            PathBuf::from("/nonexistent/weather_model.json"),
            PathBuf::from("/nonexistent/label_encoder.json"),
            None,
        );

        let err = ensure_model(&config).await.unwrap_err();
        assert!(err.to_string().contains("no model URL"));
    }
}
