//! File Line Sink
//!
//! Writes result lines to a UTF-8 file, flushing after every line. The file
//! is truncated on open and held under an exclusive advisory lock until
//! `close()`, so two writers never interleave lines in one result file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::LineSink;
use crate::error::{PerflogError, PerflogResult};

/// Auto-flushing, locked result file
#[derive(Debug)]
pub struct FileLineSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileLineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl LineSink for FileLineSink {
    fn open(&mut self) -> PerflogResult<()> {
        if self.writer.is_some() {
            return Err(PerflogError::AlreadyOpen {
                sink: self.path.display().to_string(),
            });
        }

        // Truncate only after the lock is held so a running writer's file survives.
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        file.try_lock_exclusive().map_err(|e| {
            if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() {
                PerflogError::Locked {
                    path: self.path.clone(),
                }
            } else {
                PerflogError::Io(e)
            }
        })?;
        file.set_len(0)?;

        tracing::debug!(path = %self.path.display(), "opened result file");
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        if self.writer.is_none() {
            self.open()?;
        }
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}", line)?;
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> PerflogResult<()> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer.flush()?;
        if let Err(e) = writer.get_ref().unlock() {
            tracing::debug!(path = %self.path.display(), error = %e, "failed to release result file lock");
        }
        tracing::debug!(path = %self.path.display(), "closed result file");
        Ok(())
    }
}

impl Drop for FileLineSink {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
