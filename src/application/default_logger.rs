//! Default result logger
//!
//! Builds the fixed field sequence of a result line from the logger
//! context and the measurement event, then writes it to the sink:
//!
//! ```text
//! "daemonId";"processId";"threadId";"timestamp";"ti1";"ti2";"operation";"target";
//! "STATUS";"errorMsg";"type";"uri";"uriAlias";"localAddress";"layer";
//! "executionId";"requestId";"extra0";...
//! ```

use crate::domain::entities::MeasurementEvent;
use crate::domain::ports::{LineSink, ResultLogger};
use crate::domain::services::{format_timestamp, format_timestamp_local, LineBuilder};
use crate::domain::value_objects::LoggerContext;
use crate::error::PerflogResult;

const STATUS_SUCCESS: &str = "SUCCESS";
const STATUS_ERROR: &str = "ERROR";
const LINE_CAPACITY: usize = 250;

/// Result logger writing one quoted, semicolon-delimited line per event
#[derive(Debug)]
pub struct DefaultResultLogger<S> {
    sink: S,
    context: LoggerContext,
}

impl<S: LineSink> DefaultResultLogger<S> {
    pub fn new(sink: S, context: LoggerContext) -> Self {
        Self { sink, context }
    }

    pub fn context(&self) -> &LoggerContext {
        &self.context
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the logger and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Build the result line for `event` without writing it.
    ///
    /// Stops any interval of the event that is still running.
    pub fn format_line(&self, event: &mut MeasurementEvent) -> String {
        let ctx = &self.context;
        let mut line = LineBuilder::with_capacity(LINE_CAPACITY);
        let timestamp = match ctx.utc_offset() {
            Some(offset) => format_timestamp(event.timestamp, &offset),
            None => format_timestamp_local(event.timestamp),
        };

        line.display_field(ctx.daemon_id())
            .display_field(ctx.process_id())
            .display_field(ctx.thread_id())
            .str_field(&timestamp)
            .display_field(event.ti1.length())
            .display_field(event.ti2.length())
            .str_field(ctx.operation())
            .str_field(ctx.target());

        match &event.error_message {
            Some(message) => line.str_field(STATUS_ERROR).str_field(message),
            None => line.str_field(STATUS_SUCCESS).str_field(""),
        };

        line.str_field(&event.request_type)
            .str_field(&event.uri)
            .str_field(&event.uri_alias)
            .str_field(&ctx.local_address_text())
            .str_field(ctx.layer())
            .display_field(event.execution_id)
            .display_field(event.request_id);

        for extra in &event.extra_args {
            line.display_field(extra);
        }

        line.finish()
    }

    /// Close the underlying sink
    pub fn close(&mut self) -> PerflogResult<()> {
        self.sink.close()
    }
}

impl<S: LineSink> ResultLogger for DefaultResultLogger<S> {
    fn log_result(&mut self, event: &mut MeasurementEvent) -> PerflogResult<()> {
        let line = self.format_line(event);
        tracing::trace!(
            request_id = %event.request_id,
            error = event.is_error(),
            "writing result line"
        );
        self.sink.write_line(&line)
    }
}
