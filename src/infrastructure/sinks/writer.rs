//! Writer Line Sink
//!
//! Writes result lines to any `io::Write` (stdout, an in-memory buffer, ...).

use std::io::{self, Write};

use crate::domain::ports::LineSink;
use crate::error::{PerflogError, PerflogResult};

/// Line sink over an arbitrary writer
#[derive(Debug)]
pub struct WriterLineSink<W: Write> {
    writer: W,
    open: bool,
}

impl WriterLineSink<io::Stdout> {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterLineSink<W> {
    fn open(&mut self) -> PerflogResult<()> {
        if self.open {
            return Err(PerflogError::AlreadyOpen {
                sink: std::any::type_name::<W>().to_string(),
            });
        }
        self.open = true;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        if !self.open {
            self.open()?;
        }
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> PerflogResult<()> {
        if self.open {
            self.writer.flush()?;
            self.open = false;
        }
        Ok(())
    }
}
