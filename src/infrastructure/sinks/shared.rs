//! Shared Line Sink
//!
//! Sinks are single-writer. Clone a `SharedLineSink` into each per-thread
//! logger to let several threads write whole lines into one sink.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::LineSink;
use crate::error::{PerflogError, PerflogResult};

/// Mutex-guarded handle to a sink
#[derive(Debug)]
pub struct SharedLineSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedLineSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: LineSink> SharedLineSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    fn lock(&self) -> PerflogResult<MutexGuard<'_, S>> {
        self.inner.lock().map_err(|_| PerflogError::SinkPoisoned)
    }

    /// Run `f` with exclusive access to the wrapped sink
    pub fn with_sink<T>(&self, f: impl FnOnce(&mut S) -> T) -> PerflogResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Return the wrapped sink if this is the last handle
    pub fn try_unwrap(self) -> Result<S, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|e| e.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<S: LineSink> LineSink for SharedLineSink<S> {
    fn open(&mut self) -> PerflogResult<()> {
        self.lock()?.open()
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        self.lock()?.write_line(line)
    }

    fn close(&mut self) -> PerflogResult<()> {
        self.lock()?.close()
    }
}
