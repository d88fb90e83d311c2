//! Test sinks

use std::sync::{Arc, Mutex};

use perflog::{LineSink, PerflogError, PerflogResult};

/// Sink that records all lines, shared with the test through an `Arc`
#[derive(Default)]
pub struct RecordingSink {
    open: bool,
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                open: false,
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl LineSink for RecordingSink {
    fn open(&mut self) -> PerflogResult<()> {
        if self.open {
            return Err(PerflogError::AlreadyOpen {
                sink: "recording".to_string(),
            });
        }
        self.open = true;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> PerflogResult<()> {
        if !self.open {
            self.open()?;
        }
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn close(&mut self) -> PerflogResult<()> {
        self.open = false;
        Ok(())
    }
}

/// Last line recorded, or an empty string
pub fn last_line(lines: &Arc<Mutex<Vec<String>>>) -> String {
    lines.lock().unwrap().last().cloned().unwrap_or_default()
}
