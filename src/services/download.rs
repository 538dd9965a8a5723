use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

use crate::modules::convert::interface::{DownloadSink, Result};

/// Saves converted files into a download directory.
///
/// Bytes are staged in a hidden temporary file next to the target and
/// renamed into place, so a failed write never leaves a partial
/// `frames.pdf` behind. The temporary is gone once `download` returns.
#[derive(Debug, Clone)]
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn staging_path(&self, filename: &str) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.part", filename, Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl DownloadSink for FileDownloader {
    async fn download(&self, filename: &str, contents: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;

        let target = self.dir.join(filename);
        let staging = self.staging_path(filename);

        let written = async {
            fs::write(&staging, contents).await?;
            fs::rename(&staging, &target).await
        }
        .await;

        if let Err(e) = written {
            if let Err(cleanup_error) = fs::remove_file(&staging).await {
                tracing::debug!(
                    "Could not remove staging file {}: {}",
                    staging.display(),
                    cleanup_error
                );
            }
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", contents.len(), target.display());
        Ok(target)
    }
}
