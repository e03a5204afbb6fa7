// Append rendered text blocks to the single shared call log file.
//
// The file is opened once at startup in append mode and held behind a tokio
// mutex. The mutex is the single-writer serialization point: concurrent
// requests cannot interleave lines within a block. Appends from other
// processes are out of scope.

use crate::error::ServiceError;
use crate::port::LogSink;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub struct TextFileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TextFileSink {
    /// Open (or create) the call log in append mode.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open call log at {}", path.display()))?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_block(&self, block: &str) -> Result<(), std::io::Error> {
        let mut file = self.file.lock().await;

        file.write_all(block.as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;

        Ok(())
    }
}

impl LogSink for TextFileSink {
    fn append(
        &self,
        block: String,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), ServiceError>> + Send + '_>>
    {
        Box::pin(async move { self.write_block(&block).await.map_err(ServiceError::Append) })
    }
}
