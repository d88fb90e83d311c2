//! Time interval value object
//!
//! A start/stop pair of monotonic instants. Reading the length of an
//! interval that was started but never stopped stops it.

use std::fmt;
use std::time::Instant;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60_000;
const HOUR: i64 = 3_600_000;

/// A single time measurement
///
/// Not `Copy`: handing an interval to an event moves it, so the implicit
/// stop on logging is seen by whoever owns the interval afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeInterval {
    start: Option<Instant>,
    end: Option<Instant>,
    stopped: bool,
}

impl TimeInterval {
    /// Create an interval that has not been started (`length()` is -1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an already stopped interval from externally captured marks
    pub fn with_marks(start: Instant, end: Instant) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            stopped: true,
        }
    }

    /// Start measuring. Sets both the start and the end mark.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.start = Some(now);
        self.end = Some(now);
        self.stopped = false;
    }

    /// Stop measuring (sets the end mark)
    pub fn stop(&mut self) {
        self.end = Some(Instant::now());
        self.stopped = true;
    }

    /// Returns true once `start()` has been called
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// Elapsed whole milliseconds, or -1 if the interval was never started.
    pub fn length(&mut self) -> i64 {
        let Some(start) = self.start else {
            return -1;
        };
        if !self.stopped {
            self.stop();
        }
        let end = self.end.unwrap_or(start);
        i64::try_from(end.saturating_duration_since(start).as_millis()).unwrap_or(i64::MAX)
    }

    /// The interval as `H:MM:SS,mmm`
    pub fn format(&mut self) -> String {
        format_millis(self.length())
    }
}

impl fmt::Display for TimeInterval {
    /// `TimeInterval[H:MM:SS,mmm]`; a running interval shows the time elapsed so far.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = match self.start {
            None => -1,
            Some(start) => {
                let end = if self.stopped {
                    self.end.unwrap_or(start)
                } else {
                    Instant::now()
                };
                i64::try_from(end.saturating_duration_since(start).as_millis()).unwrap_or(i64::MAX)
            }
        };
        write!(f, "TimeInterval[{}]", format_millis(length))
    }
}

/// Render a millisecond duration as `H:MM:SS,mmm`. Hours are not clamped.
pub fn format_millis(duration: i64) -> String {
    let hours = duration / HOUR;
    let duration = duration - hours * HOUR;

    let minutes = duration / MINUTE;
    let duration = duration - minutes * MINUTE;

    let seconds = duration / SECOND;
    let millis = duration - seconds * SECOND;

    format!("{}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
