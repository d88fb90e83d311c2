//! Result logger port

use crate::domain::entities::MeasurementEvent;
use crate::error::PerflogResult;

/// Logs measurement results
///
/// The intervals of the event are read with `TimeInterval::length`, which
/// stops intervals that were started but not stopped yet.
pub trait ResultLogger {
    /// Format the event and hand the line to the sink.
    ///
    /// Sink failures are returned unchanged; nothing is retried.
    fn log_result(&mut self, event: &mut MeasurementEvent) -> PerflogResult<()>;
}
