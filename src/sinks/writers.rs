use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::Summary;

use super::path::ensure_jsonl;

/// Open handle on a record file; every append lands after existing content.
#[derive(Debug)]
pub struct SummarySink {
    path: PathBuf,
    file: File,
    /// Set when a failed write left bytes that could not be truncated away.
    torn: bool,
}

impl SummarySink {
    /// Opens `path` for appending, creating it when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the path is not `.jsonl` or cannot be opened.
    pub async fn open(path: &Path) -> AppResult<Self> {
        ensure_jsonl(path).map_err(|err| AppError::sink(SinkError::InvalidPath { source: err }))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|err| {
                AppError::sink(SinkError::Open {
                    path: path.to_path_buf(),
                    source: err,
                })
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            torn: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one summary as a single JSON line.
    ///
    /// The record is encoded fully before anything is written, so an encode
    /// failure leaves the file untouched. A write that fails partway is cut
    /// back to the previous end of file; if that is impossible, the next
    /// record starts on a fresh line instead.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding or writing fails.
    pub async fn append(&mut self, summary: &Summary) -> AppResult<()> {
        let mut line = serde_json::to_vec(summary)
            .map_err(|err| AppError::sink(SinkError::Encode { source: err }))?;
        line.push(b'\n');
        if self.torn {
            line.insert(0, b'\n');
        }

        let start = self
            .file
            .metadata()
            .await
            .map_err(|err| self.write_error(err))?
            .len();
        if let Err(err) = self.write_line(&line).await {
            self.discard_from(start).await;
            return Err(err);
        }
        self.torn = false;
        Ok(())
    }

    async fn write_line(&mut self, line: &[u8]) -> AppResult<()> {
        self.file.write_all(line).await.map_err(|err| self.write_error(err))?;
        self.file.flush().await.map_err(|err| self.write_error(err))?;
        Ok(())
    }

    /// Truncates the file back to `len`, dropping any partial record after it.
    pub(super) async fn discard_from(&mut self, len: u64) {
        if let Err(err) = self.file.set_len(len).await {
            warn!(
                "Could not truncate partial record in {}: {}",
                self.path.display(),
                err
            );
            self.torn = true;
        }
    }

    fn write_error(&self, err: std::io::Error) -> AppError {
        AppError::sink(SinkError::Write {
            path: self.path.clone(),
            source: err,
        })
    }
}

/// Appends `summary`, logging instead of failing when the record cannot be written.
///
/// Returns whether the record was persisted.
pub async fn persist_summary(sink: &mut SummarySink, summary: &Summary) -> bool {
    match sink.append(summary).await {
        Ok(()) => {
            info!(
                "Appended {} @ {} req/s to {}",
                summary.operation,
                summary.rate,
                sink.path().display()
            );
            true
        }
        Err(err) => {
            error!("Dropped summary record for {}: {}", summary.operation, err);
            false
        }
    }
}
